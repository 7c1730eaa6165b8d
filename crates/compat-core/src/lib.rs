//! # compat-core
//!
//! Foundation crate for the compat HTML feature-support engine.
//! Defines shared types, errors, configuration, and the tracing bootstrap.
//! The engine crate depends on this.

pub mod config;
pub mod errors;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::CheckConfig;
pub use errors::error_code::CompatErrorCode;
pub use errors::{ConfigError, MatrixError, VersionError};
pub use types::collections::{FxHashMap, FxHashSet};
pub use types::feature::{FeatureKey, FeatureKind, FeatureUsage, PositionHint};
pub use types::target::Target;
