//! Compatibility check configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Caller-supplied options for a compatibility check run.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CheckConfig {
    /// Feature names to report even though they are ignored by default
    /// (e.g. `["integrity"]`).
    pub enable: Vec<String>,
    /// Additional feature names to exclude from reporting, on top of the
    /// built-in ignore list. `enable` wins when a name appears in both.
    pub ignore: Vec<String>,
    /// Directory with extra support-data packs loaded after the built-ins.
    pub pack_dir: Option<String>,
}

impl CheckConfig {
    /// Load a configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&raw).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_empty() {
        let config = CheckConfig::default();
        assert!(config.enable.is_empty());
        assert!(config.ignore.is_empty());
        assert!(config.pack_dir.is_none());
    }

    #[test]
    fn test_load_from_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "enable = [\"integrity\"]\nignore = [\"download\"]\npack_dir = \"packs\""
        )
        .unwrap();

        let config = CheckConfig::load(file.path()).unwrap();
        assert_eq!(config.enable, vec!["integrity".to_string()]);
        assert_eq!(config.ignore, vec!["download".to_string()]);
        assert_eq!(config.pack_dir.as_deref(), Some("packs"));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: CheckConfig = toml::from_str("enable = [\"spellcheck\"]").unwrap();
        assert_eq!(config.enable, vec!["spellcheck".to_string()]);
        assert!(config.ignore.is_empty());
        assert!(config.pack_dir.is_none());
    }
}
