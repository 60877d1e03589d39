//! CLI command definitions

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for verdict-arena
#[derive(Parser, Debug)]
#[command(name = "verdict-arena")]
#[command(author, version, about = "Weekly debate arena judged by a panel of LLM validators")]
#[command(long_about = r#"
Verdict Arena runs one debate round per ISO week.

1. The host opens a round: a topic with two opposing sides is drawn from a
   live news page, and the validators must agree on it byte-for-byte
2. Players submit one argument each for side A or B (20-600 characters)
3. The host triggers judging: every argument is scored by the oracle and the
   score is accepted only if enough validators agree it is reasonable

Configuration files are loaded from (in priority order):
1. ARENA_<SECTION>__<KEY>   Environment variables
2. --config <path>          Explicit config file
3. ./arena.toml             Project-level config
4. ~/.config/verdict-arena/config.toml   Global config

Example:
  verdict-arena open
  verdict-arena --caller alice submit a "Remote work saves hours of commuting every week."
  verdict-arena judge
  verdict-arena leaderboard
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Identity of the caller (defaults to the configured host)
    #[arg(long, global = true, value_name = "ID")]
    pub caller: Option<String>,

    /// Evaluate as if called at this RFC 3339 time (e.g. 2025-03-05T12:00:00Z)
    #[arg(long, global = true, value_name = "TIME", value_parser = parse_timestamp)]
    pub at: Option<DateTime<Utc>>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open this week's round (host only)
    Open,

    /// Submit or replace your argument for the open round
    Submit {
        /// Side to argue: a or b
        side: String,
        /// Argument text, 20 to 600 characters
        text: String,
    },

    /// Score every submission and close the round (host only)
    Judge,

    /// Show the current round's leaderboard
    Leaderboard,

    /// Show the all-time leaderboard
    #[command(name = "all-time")]
    AllTime,

    /// Show the current round
    Round,

    /// Show a participant's period and lifetime score
    Score {
        /// Participant id
        participant: String,
    },

    /// Show the effective configuration and where it was loaded from
    #[command(name = "show-config")]
    ShowConfig,
}

impl Command {
    /// Whether the command changes arena state
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Command::Open | Command::Submit { .. } | Command::Judge
        )
    }
}

fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(s)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| format!("expected RFC 3339 time: {}", e))
}
