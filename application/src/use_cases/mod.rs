//! Use cases
//!
//! Each use case mutates an [`ArenaState`](arena_domain::ArenaState) passed
//! in by the caller and returns the confirmation message shown to the user.

pub mod judge_all;
pub mod open_round;
pub mod submit_argument;

#[cfg(test)]
pub(crate) mod test_support;
