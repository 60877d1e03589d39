//! Consensus domain
//!
//! Vocabulary for reconciling non-deterministic oracle output across
//! independent validators.
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │  Exact match                    Tolerant                      │
//! ├───────────────────────────────────────────────────────────────┤
//! │  every validator runs the op    leader runs the op once       │
//! │  outputs compared byte-for-byte validators ACCEPT / REJECT    │
//! │  any difference → divergence    QuorumRule decides the tally  │
//! │  used for: weekly topic         used for: argument scores     │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! Running validators is the job of a `ConsensusRuntime` adapter; this module
//! only holds the pure parts (rules, votes, verdict parsing, records).

pub mod mode;
pub mod outcome;
pub mod parsing;
pub mod rule;
pub mod vote;

pub use mode::EquivalenceMode;
pub use outcome::{ConsensusOutcome, ConsensusRecord};
pub use parsing::parse_verdict;
pub use rule::QuorumRule;
pub use vote::{Tally, ValidatorVote};
