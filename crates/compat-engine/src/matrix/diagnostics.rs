//! Matrix load diagnostics — pack and entry counters.

use compat_core::FxHashMap;

/// Aggregated counters from support-pack loading.
#[derive(Debug, Clone, Default)]
pub struct MatrixDiagnostics {
    pub builtin_packs_loaded: usize,
    pub builtin_packs_skipped: usize,
    pub custom_packs_loaded: usize,
    pub custom_packs_skipped: usize,
    pub features_compiled: usize,
    /// Browser entries dropped for invalid version tokens.
    pub entries_skipped: usize,
    pub pack_versions: FxHashMap<String, String>,
}

impl MatrixDiagnostics {
    /// Format a one-line load summary.
    pub fn summary(&self) -> String {
        format!(
            "[compat] matrix diagnostics: {} packs ({} builtin, {} custom), \
             {} features, {} entries skipped",
            self.builtin_packs_loaded + self.custom_packs_loaded,
            self.builtin_packs_loaded,
            self.custom_packs_loaded,
            self.features_compiled,
            self.entries_skipped,
        )
    }
}
