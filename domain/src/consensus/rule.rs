//! Acceptance rules for tolerant consensus.

use serde::{Deserialize, Serialize};

/// How many validators must accept a proposal for it to stand.
///
/// # Example
///
/// ```
/// use arena_domain::QuorumRule;
///
/// assert!(QuorumRule::Majority.is_satisfied(2, 3));
/// assert!(!QuorumRule::Majority.is_satisfied(2, 4));
/// assert!(!QuorumRule::Unanimous.is_satisfied(4, 5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum QuorumRule {
    /// Strictly more than half of the validators accept
    #[default]
    Majority,

    /// Every validator accepts
    Unanimous,

    /// At least n validators accept
    AtLeast(usize),

    /// At least this percentage (0-100) of validators accept, rounded up
    Percentage(u8),
}

impl QuorumRule {
    /// Number of acceptances needed out of `total` validators.
    pub fn required(&self, total: usize) -> usize {
        match self {
            QuorumRule::Majority => total / 2 + 1,
            QuorumRule::Unanimous => total,
            QuorumRule::AtLeast(n) => *n,
            QuorumRule::Percentage(p) => (total * usize::from(*p)).div_ceil(100),
        }
    }

    /// An empty validator set never satisfies any rule.
    pub fn is_satisfied(&self, accepts: usize, total: usize) -> bool {
        total > 0 && accepts >= self.required(total).max(1)
    }
}

impl std::fmt::Display for QuorumRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuorumRule::Majority => write!(f, "majority"),
            QuorumRule::Unanimous => write!(f, "unanimous"),
            QuorumRule::AtLeast(n) => write!(f, "atleast:{}", n),
            QuorumRule::Percentage(p) => write!(f, "{}%", p),
        }
    }
}

impl std::str::FromStr for QuorumRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        if s == "majority" {
            return Ok(QuorumRule::Majority);
        }
        if s == "unanimous" {
            return Ok(QuorumRule::Unanimous);
        }
        if let Some(n) = s
            .strip_prefix("atleast:")
            .or_else(|| s.strip_prefix("at_least:"))
        {
            return n
                .parse()
                .map(QuorumRule::AtLeast)
                .map_err(|_| format!("Invalid validator count in rule '{}'", s));
        }
        if let Some(p) = s.strip_suffix('%') {
            let p: u8 = p
                .parse()
                .map_err(|_| format!("Invalid percentage in rule '{}'", s))?;
            if p > 100 {
                return Err(format!("Percentage {} exceeds 100", p));
            }
            return Ok(QuorumRule::Percentage(p));
        }
        Err(format!(
            "Unknown quorum rule: {}. Valid: majority, unanimous, atleast:N, N%",
            s
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_majority_needs_more_than_half() {
        let rule = QuorumRule::Majority;
        assert_eq!(rule.required(3), 2);
        assert_eq!(rule.required(4), 3);
        assert!(rule.is_satisfied(1, 1));
        assert!(!rule.is_satisfied(1, 2));
    }

    #[test]
    fn test_unanimous() {
        assert!(QuorumRule::Unanimous.is_satisfied(3, 3));
        assert!(!QuorumRule::Unanimous.is_satisfied(2, 3));
    }

    #[test]
    fn test_at_least() {
        let rule = QuorumRule::AtLeast(2);
        assert!(!rule.is_satisfied(1, 5));
        assert!(rule.is_satisfied(2, 5));
    }

    #[test]
    fn test_percentage_rounds_up() {
        let rule = QuorumRule::Percentage(75);
        assert_eq!(rule.required(4), 3);
        assert_eq!(rule.required(5), 4);
        assert!(!rule.is_satisfied(3, 5));
    }

    #[test]
    fn test_no_validators_never_passes() {
        assert!(!QuorumRule::Majority.is_satisfied(0, 0));
        assert!(!QuorumRule::AtLeast(0).is_satisfied(0, 0));
        assert!(!QuorumRule::Percentage(0).is_satisfied(0, 3));
    }

    #[test]
    fn test_parse_and_display_agree() {
        for text in ["majority", "unanimous", "atleast:2", "60%"] {
            let rule: QuorumRule = text.parse().unwrap();
            assert_eq!(rule.to_string(), text);
        }
        assert_eq!(
            "AT_LEAST:3".parse::<QuorumRule>().unwrap(),
            QuorumRule::AtLeast(3)
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("most".parse::<QuorumRule>().is_err());
        assert!("150%".parse::<QuorumRule>().is_err());
        assert!("atleast:x".parse::<QuorumRule>().is_err());
    }
}
