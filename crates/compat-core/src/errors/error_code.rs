//! Stable machine-readable error codes.

/// Every error in the workspace exposes a stable code so hosts can branch on
/// failures without string-matching display text.
pub trait CompatErrorCode {
    fn error_code(&self) -> &'static str;
}
