//! Target aggregation — runs the evaluator across all resolved targets.

use rayon::prelude::*;
use smallvec::SmallVec;
use tracing::{debug, warn};

use compat_core::{CheckConfig, FeatureUsage, Target};

use crate::evaluator::{self, Support};
use crate::ignored::IgnoredFeatureSet;
use crate::matrix::SupportMatrix;
use crate::report::{Diagnostic, DiagnosticBuilder, FailingTarget, UnsupportedReport};
use crate::version::VersionOrder;

/// The compatibility checker.
///
/// Owns the immutable support matrix, ignore set, and version order;
/// stateless per call and safe to share across threads.
pub struct CompatChecker {
    matrix: SupportMatrix,
    ignored: IgnoredFeatureSet,
    order: VersionOrder,
}

impl CompatChecker {
    pub fn new(matrix: SupportMatrix, config: &CheckConfig) -> Self {
        Self::with_version_order(matrix, config, VersionOrder::default())
    }

    /// Use a version order with a customized alias table.
    pub fn with_version_order(
        matrix: SupportMatrix,
        config: &CheckConfig,
        order: VersionOrder,
    ) -> Self {
        Self {
            matrix,
            ignored: IgnoredFeatureSet::from_config(config),
            order,
        }
    }

    pub fn matrix(&self) -> &SupportMatrix {
        &self.matrix
    }

    pub fn version_order(&self) -> &VersionOrder {
        &self.order
    }

    /// Check one usage against the resolved targets.
    ///
    /// Returns `None` when every target supports the feature, or when the
    /// feature is ignored and not explicitly enabled. Targets are evaluated
    /// independently in caller order; a browser may appear multiple times
    /// with different versions.
    pub fn check(&self, usage: &FeatureUsage, targets: &[Target]) -> Option<UnsupportedReport> {
        if self.ignored.contains(&usage.name) {
            debug!(feature = %usage.name, "feature ignored by default");
            return None;
        }

        let key = usage.key();
        let support = self.matrix.feature(&key);

        let mut failing: SmallVec<[FailingTarget; 4]> = SmallVec::new();
        for target in targets {
            let entry = support.and_then(|s| s.get(&target.browser));
            match evaluator::evaluate(entry, &target.version, &self.order) {
                Ok(Support::Supported) => {}
                Ok(Support::Unsupported(reason)) => failing.push(FailingTarget {
                    target: target.clone(),
                    reason,
                }),
                Err(e) => {
                    // A non-comparable target version degrades to supported;
                    // one bad target never aborts the sibling targets.
                    warn!(
                        browser = %target.browser,
                        version = %target.version,
                        error = %e,
                        "skipping target with malformed version"
                    );
                }
            }
        }

        if failing.is_empty() {
            return None;
        }
        Some(UnsupportedReport {
            usage: usage.clone(),
            failing,
        })
    }

    /// Check one usage and build its diagnostic in one step.
    pub fn diagnose(&self, usage: &FeatureUsage, targets: &[Target]) -> Option<Diagnostic> {
        self.check(usage, targets)
            .map(|report| DiagnosticBuilder::new(&self.order).build(&report))
    }

    /// Check a whole extracted-usage sequence against the targets.
    ///
    /// Usages are evaluated in parallel; the returned diagnostics preserve
    /// usage order.
    pub fn check_document(&self, usages: &[FeatureUsage], targets: &[Target]) -> Vec<Diagnostic> {
        usages
            .par_iter()
            .filter_map(|usage| self.diagnose(usage, targets))
            .collect()
    }
}
