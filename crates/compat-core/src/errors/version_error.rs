//! Version comparison errors.

use super::error_code::CompatErrorCode;

/// Errors raised when ordering browser version tokens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VersionError {
    /// The token is neither a numeric version, a range, nor a known alias.
    /// Raised per target; evaluation of sibling targets continues.
    #[error("Malformed version token: {token}")]
    Malformed { token: String },
}

impl CompatErrorCode for VersionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Malformed { .. } => "VERSION_MALFORMED_TOKEN",
        }
    }
}
