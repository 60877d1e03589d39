//! Round domain
//!
//! A [`Round`] is one open → submit → judge cycle, keyed by the ISO week it
//! was opened in ([`PeriodId`]).

pub mod entities;
pub mod period;

pub use entities::{Round, RoundSnapshot};
pub use period::PeriodId;
