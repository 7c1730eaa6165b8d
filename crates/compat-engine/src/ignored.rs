//! Features excluded from reporting unless explicitly enabled.

use compat_core::{CheckConfig, FxHashSet};

/// Feature names ignored by default. Subresource-integrity and cross-origin
/// attributes plus spellcheck overwhelmingly appear intentionally and would
/// drown real findings.
const DEFAULT_IGNORED: &[&str] = &["integrity", "crossorigin", "spellcheck"];

/// Immutable set of feature names excluded from reporting.
///
/// Built once at checker construction from the static defaults plus the
/// caller's `ignore` list, minus the caller's `enable` list. Read-only
/// thereafter.
#[derive(Debug, Clone)]
pub struct IgnoredFeatureSet {
    ignored: FxHashSet<String>,
}

impl IgnoredFeatureSet {
    pub fn from_config(config: &CheckConfig) -> Self {
        let mut ignored: FxHashSet<String> =
            DEFAULT_IGNORED.iter().map(|s| s.to_string()).collect();
        ignored.extend(config.ignore.iter().cloned());
        for name in &config.enable {
            ignored.remove(name);
        }
        Self { ignored }
    }

    /// Whether reports for this feature name are suppressed.
    pub fn contains(&self, name: &str) -> bool {
        self.ignored.contains(name)
    }

    pub fn len(&self) -> usize {
        self.ignored.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ignored.is_empty()
    }
}

impl Default for IgnoredFeatureSet {
    fn default() -> Self {
        Self::from_config(&CheckConfig::default())
    }
}
