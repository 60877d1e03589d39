//! Judging progress display

pub mod reporter;
