//! Browser version ordering.
//!
//! Version tokens are opaque to the rest of the engine: numeric dotted
//! versions ("4.4.3"), ranges ("11.0-11.2", ordered by their lower bound),
//! and alias tokens ("all", "TP") all collapse to a sortable key here. The
//! evaluator never inspects token internals directly, so a new browser
//! naming scheme only requires a new alias entry.

use std::cmp::Ordering;

use compat_core::{FxHashMap, VersionError};
use smallvec::SmallVec;

/// Sortable key for a parsed version token.
type VersionKey = SmallVec<[u64; 4]>;

/// Total, transitive ordering over browser version tokens.
#[derive(Debug, Clone)]
pub struct VersionOrder {
    /// Alias token (lowercased) to synthetic ordering epoch.
    aliases: FxHashMap<String, u64>,
}

impl Default for VersionOrder {
    fn default() -> Self {
        let mut aliases = FxHashMap::default();
        // "all" is browserslist's marker for browsers with a single rolling
        // release (op_mini); it predates every numeric version.
        aliases.insert("all".to_string(), 0);
        // Technology previews order after every numeric version.
        aliases.insert("tp".to_string(), u64::MAX);
        aliases.insert("preview".to_string(), u64::MAX);
        Self { aliases }
    }
}

impl VersionOrder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an extra alias token with an explicit ordering epoch.
    /// Tokens are matched case-insensitively.
    pub fn with_alias(mut self, token: &str, epoch: u64) -> Self {
        self.aliases.insert(token.to_ascii_lowercase(), epoch);
        self
    }

    /// Compare two version tokens.
    pub fn compare(&self, a: &str, b: &str) -> Result<Ordering, VersionError> {
        let ka = self.parse(a)?;
        let kb = self.parse(b)?;
        Ok(compare_keys(&ka, &kb))
    }

    /// Whether `version` is at least `floor`.
    pub fn at_least(&self, version: &str, floor: &str) -> Result<bool, VersionError> {
        Ok(self.compare(version, floor)? != Ordering::Less)
    }

    /// Check that a token is comparable without comparing it to anything.
    pub fn validate(&self, token: &str) -> Result<(), VersionError> {
        self.parse(token).map(|_| ())
    }

    fn parse(&self, token: &str) -> Result<VersionKey, VersionError> {
        let trimmed = token.trim();
        if trimmed.is_empty() {
            return Err(VersionError::Malformed {
                token: token.to_string(),
            });
        }

        let lower = trimmed.to_ascii_lowercase();
        if let Some(&epoch) = self.aliases.get(&lower) {
            let mut key = VersionKey::new();
            key.push(epoch);
            return Ok(key);
        }

        // Ranges order by their lower bound.
        let numeric = match trimmed.split_once('-') {
            Some((low, _)) => low,
            None => trimmed,
        };
        // Upstream data carries "≤37"-style bounds; order them as the bound.
        let numeric = numeric.trim_start_matches("<=").trim_start_matches('≤');

        let mut key = VersionKey::new();
        for part in numeric.split('.') {
            let n: u64 = part.parse().map_err(|_| VersionError::Malformed {
                token: token.to_string(),
            })?;
            key.push(n);
        }
        Ok(key)
    }
}

/// Segment-wise comparison with implicit zero padding, so "9" == "9.0".
fn compare_keys(a: &VersionKey, b: &VersionKey) -> Ordering {
    let len = a.len().max(b.len());
    for i in 0..len {
        let x = a.get(i).copied().unwrap_or(0);
        let y = b.get(i).copied().unwrap_or(0);
        match x.cmp(&y) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_ordering() {
        let order = VersionOrder::default();
        assert_eq!(order.compare("9", "11").unwrap(), Ordering::Less);
        assert_eq!(order.compare("11", "9").unwrap(), Ordering::Greater);
        assert_eq!(order.compare("10", "10").unwrap(), Ordering::Equal);
    }

    #[test]
    fn test_dotted_ordering() {
        let order = VersionOrder::default();
        assert_eq!(order.compare("4.4.3", "4.10").unwrap(), Ordering::Less);
        assert_eq!(order.compare("3.5", "3").unwrap(), Ordering::Greater);
        assert_eq!(order.compare("9.0", "9").unwrap(), Ordering::Equal);
    }

    #[test]
    fn test_range_orders_by_lower_bound() {
        let order = VersionOrder::default();
        assert_eq!(order.compare("11.0-11.2", "11").unwrap(), Ordering::Equal);
        assert!(order.at_least("11.0-11.2", "10.3").unwrap());
        assert!(!order.at_least("11.0-11.2", "11.1").unwrap());
    }

    #[test]
    fn test_bounded_token() {
        let order = VersionOrder::default();
        assert_eq!(order.compare("≤37", "37").unwrap(), Ordering::Equal);
        assert!(order.at_least("≤37", "4.4").unwrap());
    }

    #[test]
    fn test_aliases() {
        let order = VersionOrder::default();
        assert_eq!(order.compare("all", "1").unwrap(), Ordering::Less);
        assert_eq!(order.compare("TP", "99999").unwrap(), Ordering::Greater);
        assert!(order.at_least("TP", "17.4").unwrap());
    }

    #[test]
    fn test_custom_alias() {
        let order = VersionOrder::default().with_alias("froyo", 2);
        assert_eq!(order.compare("froyo", "2.0").unwrap(), Ordering::Equal);
        assert_eq!(order.compare("Froyo", "3").unwrap(), Ordering::Less);
    }

    #[test]
    fn test_malformed_tokens() {
        let order = VersionOrder::default();
        for token in ["", "  ", "beta", "1..2", "1.x"] {
            assert!(
                matches!(order.compare(token, "1"), Err(VersionError::Malformed { .. })),
                "expected malformed: {token:?}"
            );
            assert!(order.validate(token).is_err());
        }
    }

    #[test]
    fn test_validate_accepts_comparable_tokens() {
        let order = VersionOrder::default();
        for token in ["9", "4.4.3", "11.0-11.2", "TP", "all", "≤37"] {
            assert!(order.validate(token).is_ok(), "expected valid: {token:?}");
        }
    }
}
