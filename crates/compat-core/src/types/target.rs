//! Resolved browser targets.

use serde::{Deserialize, Serialize};

/// One `(browser, version)` pair a document is checked against.
///
/// Produced by the browser-target-resolution collaborator; the version is an
/// opaque token whose ordering is delegated to the engine's `VersionOrder`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Target {
    pub browser: String,
    pub version: String,
}

impl Target {
    pub fn new(browser: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            browser: browser.into(),
            version: version.into(),
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.browser, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Target::new("chrome", "19").to_string(), "chrome 19");
    }
}
