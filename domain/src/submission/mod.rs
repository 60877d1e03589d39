//! Submission domain
//!
//! One argument per participant per round. The ledger keeps the roster (who
//! has submitted, in first-seen order) next to the latest entry of each
//! participant.

pub mod ledger;
pub mod side;
pub mod text;

pub use ledger::{Submission, SubmissionLedger};
pub use side::Side;
pub use text::{ArgumentText, MAX_ARGUMENT_CHARS, MIN_ARGUMENT_CHARS};
