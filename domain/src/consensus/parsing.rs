//! Validator answer parsing.
//!
//! Validators answer a verification prompt in free text. This extracts the
//! ACCEPT / REJECT decision. Pure text matching, no I/O.

/// Parse a validator answer into `(accepted, full_answer)`.
///
/// Conservative: anything that is not an unambiguous ACCEPT counts as a
/// rejection.
///
/// ```
/// use arena_domain::parse_verdict;
///
/// assert!(parse_verdict("ACCEPT - the scores are consistent").0);
/// assert!(!parse_verdict("REJECT: logic exceeds 40").0);
/// assert!(!parse_verdict("Looks plausible I guess").0);
/// ```
pub fn parse_verdict(answer: &str) -> (bool, String) {
    let upper = answer.to_uppercase();

    let negated = ["NOT ACCEPT", "DON'T ACCEPT", "CANNOT ACCEPT", "UNACCEPTABLE"]
        .iter()
        .any(|n| upper.contains(n));
    let rejected = negated || upper.contains("REJECT") || upper.contains("INVALID");
    let accepted = upper.contains("ACCEPT") && !rejected;

    (accepted, answer.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept() {
        assert!(parse_verdict("ACCEPT").0);
        assert!(parse_verdict("accept - fields are present and in range").0);
    }

    #[test]
    fn test_reject() {
        assert!(!parse_verdict("REJECT").0);
        assert!(!parse_verdict("I would reject this, total is wrong").0);
    }

    #[test]
    fn test_negated_accept() {
        assert!(!parse_verdict("I cannot accept this score").0);
        assert!(!parse_verdict("This is unacceptable").0);
        assert!(!parse_verdict("Do NOT ACCEPT").0);
    }

    #[test]
    fn test_ambiguous_defaults_to_reject() {
        assert!(!parse_verdict("The score seems about right.").0);
        assert!(!parse_verdict("").0);
    }

    #[test]
    fn test_mixed_signals_reject() {
        assert!(!parse_verdict("ACCEPT? No, REJECT.").0);
        assert!(!parse_verdict("ACCEPT but the JSON is INVALID").0);
    }

    #[test]
    fn test_returns_full_answer() {
        let (_, text) = parse_verdict("ACCEPT because reasons");
        assert_eq!(text, "ACCEPT because reasons");
    }
}
