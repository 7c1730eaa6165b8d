//! Unsupported-target reports and diagnostic building.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use compat_core::{FeatureUsage, PositionHint, Target};

use crate::evaluator::UnsupportedReason;
use crate::version::VersionOrder;

/// One failing target together with why it failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailingTarget {
    pub target: Target,
    pub reason: UnsupportedReason,
}

/// Aggregated outcome of checking one usage against all targets.
///
/// Failing targets are kept in caller-supplied target order; the builder
/// sorts and deduplicates, so the rendered diagnostic is stable regardless
/// of input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedReport {
    pub usage: FeatureUsage,
    pub failing: SmallVec<[FailingTarget; 4]>,
}

/// Structured diagnostic handed to the reporting collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Human-readable feature label (e.g. "srcset attribute of the img element").
    pub feature_label: String,
    /// Full rendered message.
    pub message: String,
    /// Deduplicated failing targets, sorted by browser then version.
    pub unsupported_targets: Vec<Target>,
    /// Locator from the originating usage, for the host to surface.
    pub position: PositionHint,
}

/// Turns an [`UnsupportedReport`] into a deterministic [`Diagnostic`].
pub struct DiagnosticBuilder<'a> {
    order: &'a VersionOrder,
}

impl<'a> DiagnosticBuilder<'a> {
    pub fn new(order: &'a VersionOrder) -> Self {
        Self { order }
    }

    /// Deduplicate and sort the failing set, then render one clause per
    /// browser and the final message.
    pub fn build(&self, report: &UnsupportedReport) -> Diagnostic {
        let mut failing: Vec<FailingTarget> = report.failing.to_vec();
        failing.sort_by(|a, b| {
            a.target.browser.cmp(&b.target.browser).then_with(|| {
                // Failing versions already went through evaluation; malformed
                // tokens can only appear behind Never verdicts. Fall back to
                // lexical order so the sort stays total either way.
                self.order
                    .compare(&a.target.version, &b.target.version)
                    .unwrap_or_else(|_| a.target.version.cmp(&b.target.version))
            })
        });
        failing.dedup_by(|a, b| a.target == b.target);

        let feature_label = report.usage.label();
        let clauses = render_clauses(&failing);
        let message = format!("{feature_label} is not supported by {clauses}.");

        Diagnostic {
            feature_label,
            message,
            unsupported_targets: failing.into_iter().map(|f| f.target).collect(),
            position: report.usage.position.clone(),
        }
    }
}

/// One clause per browser, joined by ", ".
///
/// A browser that has no supporting version at all renders as its bare name
/// ("ie"); a browser whose failure is version-specific lists the failing
/// versions ("chrome 19, 20").
fn render_clauses(failing: &[FailingTarget]) -> String {
    let mut clauses: Vec<String> = Vec::new();
    let mut i = 0;
    while i < failing.len() {
        let browser = &failing[i].target.browser;
        let group_end = failing[i..]
            .iter()
            .position(|f| &f.target.browser != browser)
            .map(|offset| i + offset)
            .unwrap_or(failing.len());
        let group = &failing[i..group_end];

        let versionless = group
            .iter()
            .all(|f| matches!(f.reason, UnsupportedReason::NeverSupported));
        if versionless {
            clauses.push(browser.clone());
        } else {
            let versions: Vec<&str> =
                group.iter().map(|f| f.target.version.as_str()).collect();
            clauses.push(format!("{} {}", browser, versions.join(", ")));
        }

        i = group_end;
    }
    clauses.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::UnsupportedReason;
    use smallvec::smallvec;

    fn failing(browser: &str, version: &str, reason: UnsupportedReason) -> FailingTarget {
        FailingTarget {
            target: Target::new(browser, version),
            reason,
        }
    }

    fn added_later(since: &str) -> UnsupportedReason {
        UnsupportedReason::AddedLater {
            since: since.to_string(),
        }
    }

    #[test]
    fn test_versionless_clause_for_never_supported() {
        let report = UnsupportedReport {
            usage: FeatureUsage::element_attribute("img", "srcset", PositionHint::default()),
            failing: smallvec![failing("ie", "9", UnsupportedReason::NeverSupported)],
        };
        let diagnostic = DiagnosticBuilder::new(&VersionOrder::default()).build(&report);
        assert_eq!(
            diagnostic.message,
            "srcset attribute of the img element is not supported by ie."
        );
    }

    #[test]
    fn test_versioned_clause_for_added_later() {
        let report = UnsupportedReport {
            usage: FeatureUsage::element("video", PositionHint::default()),
            failing: smallvec![failing("ie", "8", added_later("9"))],
        };
        let diagnostic = DiagnosticBuilder::new(&VersionOrder::default()).build(&report);
        assert_eq!(diagnostic.message, "video element is not supported by ie 8.");
    }

    #[test]
    fn test_multiple_versions_of_one_browser_group() {
        let report = UnsupportedReport {
            usage: FeatureUsage::input_type("color", PositionHint::default()),
            failing: smallvec![
                failing("chrome", "19", added_later("20")),
                failing("chrome", "18", added_later("20")),
            ],
        };
        let diagnostic = DiagnosticBuilder::new(&VersionOrder::default()).build(&report);
        assert_eq!(
            diagnostic.message,
            "input type color is not supported by chrome 18, 19."
        );
    }

    #[test]
    fn test_dedup_and_input_order_independence() {
        let usage = FeatureUsage::global_attribute("dropzone", PositionHint::default());
        let a = UnsupportedReport {
            usage: usage.clone(),
            failing: smallvec![
                failing("ie", "11", UnsupportedReason::NeverSupported),
                failing("edge", "15", UnsupportedReason::NeverSupported),
                failing("ie", "11", UnsupportedReason::NeverSupported),
            ],
        };
        let b = UnsupportedReport {
            usage,
            failing: smallvec![
                failing("edge", "15", UnsupportedReason::NeverSupported),
                failing("ie", "11", UnsupportedReason::NeverSupported),
            ],
        };
        let order = VersionOrder::default();
        let builder = DiagnosticBuilder::new(&order);
        assert_eq!(builder.build(&a), builder.build(&b));
        assert_eq!(
            builder.build(&a).message,
            "global attribute dropzone is not supported by edge, ie."
        );
    }

    #[test]
    fn test_versions_sort_numerically_not_lexically() {
        let report = UnsupportedReport {
            usage: FeatureUsage::element("dialog", PositionHint::default()),
            failing: smallvec![
                failing("chrome", "10", added_later("37")),
                failing("chrome", "9", added_later("37")),
            ],
        };
        let diagnostic = DiagnosticBuilder::new(&VersionOrder::default()).build(&report);
        assert_eq!(
            diagnostic.message,
            "dialog element is not supported by chrome 9, 10."
        );
    }

    #[test]
    fn test_diagnostic_serializes() {
        let report = UnsupportedReport {
            usage: FeatureUsage::element("video", PositionHint::match_token("video")),
            failing: smallvec![failing("ie", "8", added_later("9"))],
        };
        let diagnostic = DiagnosticBuilder::new(&VersionOrder::default()).build(&report);
        let json = serde_json::to_string(&diagnostic).unwrap();
        assert!(json.contains("video element is not supported by ie 8."));
    }
}
