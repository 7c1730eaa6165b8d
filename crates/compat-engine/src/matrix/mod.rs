//! Versioned per-browser feature support data.

pub mod diagnostics;
pub mod loader;
pub mod registry;

use compat_core::{FeatureKey, FxHashMap};
use serde::{Deserialize, Serialize};

/// When a browser added a feature.
///
/// The upstream data encodes this as an overloaded dynamic value
/// (`true` / `false` / version / null); the closed enum forces every call
/// site to handle every case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Added {
    /// Always supported, origin unknown (upstream `true` or absent).
    #[default]
    Unconditional,
    /// Never supported by this browser (upstream `false`).
    Never,
    /// Supported from this version on.
    Since(String),
    /// Insufficient data (upstream `null`); treated as supported.
    Unknown,
}

/// Compatibility record for one feature on one browser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SupportEntry {
    pub added: Added,
    /// Version the feature was removed in. Targets at or past it are
    /// unsupported, unless the feature is deprecated (legacy-supported).
    pub removed: Option<String>,
    pub deprecated: bool,
}

impl SupportEntry {
    pub fn unconditional() -> Self {
        Self::default()
    }

    pub fn never() -> Self {
        Self {
            added: Added::Never,
            ..Self::default()
        }
    }

    pub fn since(version: impl Into<String>) -> Self {
        Self {
            added: Added::Since(version.into()),
            ..Self::default()
        }
    }

    pub fn unknown() -> Self {
        Self {
            added: Added::Unknown,
            ..Self::default()
        }
    }

    pub fn removed_in(mut self, version: impl Into<String>) -> Self {
        self.removed = Some(version.into());
        self
    }

    pub fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }
}

/// Per-browser support table for one feature.
pub type BrowserSupport = FxHashMap<String, SupportEntry>;

/// Static, read-only mapping from feature identity to per-browser support.
///
/// Constructed once (normally via [`registry::MatrixRegistry`]) and shared
/// read-only across evaluations; no writer exists after construction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SupportMatrix {
    features: FxHashMap<FeatureKey, BrowserSupport>,
}

impl SupportMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert (or replace) the full support table for a feature.
    pub fn insert(&mut self, key: FeatureKey, support: BrowserSupport) {
        self.features.insert(key, support);
    }

    /// Insert one (feature, browser) entry, merging with existing browsers.
    /// Later inserts win, so custom packs can override built-in data.
    pub fn insert_entry(&mut self, key: FeatureKey, browser: String, entry: SupportEntry) {
        self.features.entry(key).or_default().insert(browser, entry);
    }

    /// Per-browser support for a feature. `None` means the matrix has no
    /// data for the feature at all, which evaluates fail-open.
    pub fn feature(&self, key: &FeatureKey) -> Option<&BrowserSupport> {
        self.features.get(key)
    }

    /// Support entry for one (feature, browser) pair. A `None` at either
    /// level means "no data", not "unsupported".
    pub fn support_for(&self, key: &FeatureKey, browser: &str) -> Option<&SupportEntry> {
        self.features.get(key).and_then(|s| s.get(browser))
    }

    pub fn feature_count(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}
