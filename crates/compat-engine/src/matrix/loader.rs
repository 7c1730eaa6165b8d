//! Support pack loading — TOML schema and compilation into matrix entries.
//!
//! A pack is one TOML file: `[pack]` metadata plus `[[features]]` entries,
//! each with a per-browser `support` table. The `added` field accepts
//! `true`, `false`, a version string, or the literal string `"unknown"`
//! (TOML has no null).

use std::path::Path;

use serde::Deserialize;

use compat_core::{FeatureKey, FeatureKind, FxHashMap, MatrixError};
use tracing::warn;

use super::{Added, BrowserSupport, SupportEntry};
use crate::version::VersionOrder;

/// Top-level pack definition (one per TOML file).
#[derive(Debug, Deserialize)]
pub struct PackDef {
    pub pack: PackMeta,
    #[serde(default)]
    pub features: Vec<FeatureDef>,
}

/// Pack metadata.
#[derive(Debug, Deserialize)]
pub struct PackMeta {
    /// Unique pack identifier (e.g. "html").
    pub name: String,
    /// Pack data version string.
    pub version: Option<String>,
}

/// A single feature definition within a pack.
#[derive(Debug, Deserialize)]
pub struct FeatureDef {
    /// Feature kind name (maps to [`FeatureKind`]).
    pub kind: String,
    pub name: String,
    /// Owning element; required for element-scoped kinds.
    pub element: Option<String>,
    #[serde(default)]
    pub support: FxHashMap<String, SupportDef>,
}

/// Per-browser support record as written in pack files.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SupportDef {
    pub added: Option<AddedDef>,
    pub removed: Option<String>,
    pub deprecated: bool,
}

/// Raw `added` value: boolean flag or version string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum AddedDef {
    Flag(bool),
    Version(String),
}

/// A pack compiled into matrix entries, with validated version tokens.
#[derive(Debug)]
pub struct CompiledPack {
    pub name: String,
    pub version: Option<String>,
    pub features: Vec<(FeatureKey, BrowserSupport)>,
    /// Browser entries dropped because a version token failed validation.
    pub entries_skipped: usize,
}

/// Parse and compile a pack from a TOML string.
pub fn load_from_str(raw: &str, order: &VersionOrder) -> Result<CompiledPack, MatrixError> {
    let def: PackDef = toml::from_str(raw).map_err(|e| MatrixError::Parse {
        message: e.to_string(),
    })?;
    compile(def, order)
}

/// Parse and compile a pack from a TOML file on disk.
pub fn load_from_file(path: &Path, order: &VersionOrder) -> Result<CompiledPack, MatrixError> {
    let raw = std::fs::read_to_string(path).map_err(|source| MatrixError::Read {
        path: path.display().to_string(),
        source,
    })?;
    load_from_str(&raw, order)
}

fn compile(def: PackDef, order: &VersionOrder) -> Result<CompiledPack, MatrixError> {
    let mut features = Vec::with_capacity(def.features.len());
    let mut entries_skipped = 0usize;

    for feature in def.features {
        let kind = FeatureKind::parse_str(&feature.kind).ok_or_else(|| MatrixError::UnknownKind {
            kind: feature.kind.clone(),
        })?;
        let key = feature_key(kind, &feature)?;

        let mut support = BrowserSupport::default();
        for (browser, sdef) in feature.support {
            match compile_entry(sdef, order) {
                Ok(entry) => {
                    support.insert(browser, entry);
                }
                Err(token) => {
                    warn!(
                        feature = %key.name,
                        browser = %browser,
                        token = %token,
                        "skipping support entry with invalid version token"
                    );
                    entries_skipped += 1;
                }
            }
        }
        features.push((key, support));
    }

    Ok(CompiledPack {
        name: def.pack.name,
        version: def.pack.version,
        features,
        entries_skipped,
    })
}

fn feature_key(kind: FeatureKind, feature: &FeatureDef) -> Result<FeatureKey, MatrixError> {
    let element = match kind {
        // Input types are always scoped to <input>; pack authors may omit it.
        FeatureKind::InputType => Some(
            feature
                .element
                .clone()
                .unwrap_or_else(|| "input".to_string()),
        ),
        FeatureKind::ElementAttribute => {
            Some(
                feature
                    .element
                    .clone()
                    .ok_or_else(|| MatrixError::MissingElement {
                        kind: feature.kind.clone(),
                        name: feature.name.clone(),
                    })?,
            )
        }
        FeatureKind::Element | FeatureKind::GlobalAttribute => None,
    };

    Ok(FeatureKey {
        kind,
        name: feature.name.clone(),
        element,
    })
}

/// Compile one support record, validating version tokens.
/// Returns the offending token on failure.
fn compile_entry(def: SupportDef, order: &VersionOrder) -> Result<SupportEntry, String> {
    let added = match def.added {
        None | Some(AddedDef::Flag(true)) => Added::Unconditional,
        Some(AddedDef::Flag(false)) => Added::Never,
        Some(AddedDef::Version(v)) if v == "unknown" => Added::Unknown,
        Some(AddedDef::Version(v)) => {
            if order.validate(&v).is_err() {
                return Err(v);
            }
            Added::Since(v)
        }
    };

    if let Some(removed) = &def.removed {
        if order.validate(removed).is_err() {
            return Err(removed.clone());
        }
    }

    Ok(SupportEntry {
        added,
        removed: def.removed,
        deprecated: def.deprecated,
    })
}
