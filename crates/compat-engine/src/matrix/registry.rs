//! Support pack registry — loads built-in packs + user custom packs.
//!
//! Built-in packs are embedded at compile time via `include_str!`. User
//! packs are loaded from a caller-supplied directory and override built-in
//! entries browser by browser.

use std::path::Path;

use tracing::warn;

use super::diagnostics::MatrixDiagnostics;
use super::loader::{self, CompiledPack};
use super::SupportMatrix;
use crate::version::VersionOrder;

/// Registry of loaded support packs, merged into one matrix.
pub struct MatrixRegistry {
    matrix: SupportMatrix,
    diag: MatrixDiagnostics,
}

impl MatrixRegistry {
    /// Load only the built-in packs.
    ///
    /// Version tokens are validated against `order`, which should be the
    /// same instance later used for evaluation (alias tables may differ).
    pub fn with_builtins(order: &VersionOrder) -> Self {
        let mut registry = Self {
            matrix: SupportMatrix::new(),
            diag: MatrixDiagnostics::default(),
        };

        // Load each built-in pack. If any fails to parse, log and skip.
        for (name, raw) in builtin_packs() {
            match loader::load_from_str(raw, order) {
                Ok(pack) => registry.merge(pack, true),
                Err(e) => {
                    warn!(pack = name, error = %e, "failed to load built-in pack");
                    registry.diag.builtin_packs_skipped += 1;
                }
            }
        }

        registry
    }

    /// Load built-in packs plus every `*.toml` pack in `custom_dir`.
    pub fn with_builtins_and_custom(custom_dir: &Path, order: &VersionOrder) -> Self {
        let mut registry = Self::with_builtins(order);

        if custom_dir.is_dir() {
            if let Ok(entries) = std::fs::read_dir(custom_dir) {
                for entry in entries.flatten() {
                    let path = entry.path();
                    if path.extension().is_some_and(|ext| ext == "toml") {
                        match loader::load_from_file(&path, order) {
                            Ok(pack) => registry.merge(pack, false),
                            Err(e) => {
                                warn!(
                                    pack = %path.display(),
                                    error = %e,
                                    "failed to load custom pack"
                                );
                                registry.diag.custom_packs_skipped += 1;
                            }
                        }
                    }
                }
            }
        }

        registry
    }

    /// Consume the registry and return the merged matrix.
    pub fn into_matrix(self) -> SupportMatrix {
        self.matrix
    }

    pub fn matrix(&self) -> &SupportMatrix {
        &self.matrix
    }

    /// Get load-time diagnostics.
    pub fn diagnostics(&self) -> &MatrixDiagnostics {
        &self.diag
    }

    fn merge(&mut self, pack: CompiledPack, builtin: bool) {
        self.diag.features_compiled += pack.features.len();
        self.diag.entries_skipped += pack.entries_skipped;
        if builtin {
            self.diag.builtin_packs_loaded += 1;
        } else {
            self.diag.custom_packs_loaded += 1;
        }
        if let Some(version) = pack.version {
            self.diag.pack_versions.insert(pack.name, version);
        }

        for (key, support) in pack.features {
            for (browser, entry) in support {
                self.matrix.insert_entry(key.clone(), browser, entry);
            }
        }
    }
}

/// Built-in support packs embedded at compile time.
fn builtin_packs() -> Vec<(&'static str, &'static str)> {
    vec![("html", include_str!("packs/html.toml"))]
}
