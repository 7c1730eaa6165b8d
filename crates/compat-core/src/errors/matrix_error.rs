//! Support-matrix pack loading errors.

use super::error_code::CompatErrorCode;

/// Errors that can occur while loading a support-data pack.
///
/// All of these are load-time concerns. The registry skips the offending
/// pack or feature and keeps loading; nothing here aborts an evaluation.
#[derive(Debug, thiserror::Error)]
pub enum MatrixError {
    #[error("Failed to parse pack: {message}")]
    Parse { message: String },

    #[error("Failed to read pack file: {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown feature kind: {kind}")]
    UnknownKind { kind: String },

    #[error("Feature '{name}' of kind '{kind}' requires an owning element")]
    MissingElement { kind: String, name: String },

    #[error("Invalid version token '{token}' for browser '{browser}' in feature '{feature}'")]
    BadVersion {
        feature: String,
        browser: String,
        token: String,
    },
}

impl CompatErrorCode for MatrixError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Parse { .. } => "MATRIX_PARSE",
            Self::Read { .. } => "MATRIX_READ",
            Self::UnknownKind { .. } => "MATRIX_UNKNOWN_KIND",
            Self::MissingElement { .. } => "MATRIX_MISSING_ELEMENT",
            Self::BadVersion { .. } => "MATRIX_BAD_VERSION",
        }
    }
}
