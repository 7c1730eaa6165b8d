//! Per-target support evaluation.
//!
//! Pure function of (entry, target version); no side effects. The branch
//! order encodes real policy and must not be reordered: removal wins over
//! `added`, and deprecation overrides both removal and `Never`.

use serde::{Deserialize, Serialize};

use compat_core::VersionError;

use crate::matrix::{Added, SupportEntry};
use crate::version::VersionOrder;

/// Outcome of evaluating one feature against one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Support {
    Supported,
    Unsupported(UnsupportedReason),
}

/// Why a target does not support a feature.
///
/// Recorded per failing target; drives version granularity when the
/// diagnostic is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnsupportedReason {
    /// The browser has no supporting version at all.
    NeverSupported,
    /// Support arrives in a later version than the target.
    AddedLater { since: String },
    /// The feature was removed at or before the target version.
    Removed { in_version: String },
}

/// Decide support of one feature for one target version.
///
/// `entry` is `None` when the matrix has no record for this (feature,
/// browser) pair; no data evaluates as supported, never as a failure.
pub fn evaluate(
    entry: Option<&SupportEntry>,
    version: &str,
    order: &VersionOrder,
) -> Result<Support, VersionError> {
    let Some(entry) = entry else {
        return Ok(Support::Supported);
    };

    // Removal wins over `added`, except for deprecated features: a
    // deprecated-but-historically-present feature is legacy-supported,
    // not flagged as removed.
    if let Some(removed) = &entry.removed {
        if !entry.deprecated && order.at_least(version, removed)? {
            return Ok(Support::Unsupported(UnsupportedReason::Removed {
                in_version: removed.clone(),
            }));
        }
    }

    match &entry.added {
        Added::Unconditional | Added::Unknown => Ok(Support::Supported),
        Added::Never => {
            if entry.deprecated {
                // Deprecated features that were never formally added
                // predate tracking; not flagged.
                Ok(Support::Supported)
            } else {
                Ok(Support::Unsupported(UnsupportedReason::NeverSupported))
            }
        }
        Added::Since(since) => {
            if order.at_least(version, since)? {
                Ok(Support::Supported)
            } else {
                Ok(Support::Unsupported(UnsupportedReason::AddedLater {
                    since: since.clone(),
                }))
            }
        }
    }
}
