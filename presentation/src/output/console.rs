//! Console output formatter for arena views

use arena_domain::{
    LeaderboardEntry, LifetimeLeaderboard, PeriodLeaderboard, PlayerScore, RoundSnapshot,
};
use colored::Colorize;
use serde::Serialize;

/// Formats arena results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Confirmation line returned by a successful command
    pub fn format_message(message: &str) -> String {
        format!("{} {}\n", "v".green().bold(), message)
    }

    /// Rejected command
    pub fn format_error(error: &str) -> String {
        format!("{} {}\n", "Error:".red().bold(), error)
    }

    /// Current round details
    pub fn format_round(round: &RoundSnapshot) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Current Round"));

        if round.period_id.is_unplayed() {
            output.push_str(&format!("\n{}\n", "No round has been opened yet.".dimmed()));
            output.push_str(&Self::footer());
            return output;
        }

        let status = match (round.round_open, round.judging_done) {
            (true, _) => "open".green().bold(),
            (false, true) => "judged".cyan().bold(),
            (false, false) => "closed".yellow().bold(),
        };

        output.push_str(&format!(
            "\n{} {} ({})\n",
            "Period:".cyan().bold(),
            round.period_id,
            status
        ));
        output.push_str(&format!("{} {}\n\n", "Topic:".cyan().bold(), round.topic));
        output.push_str(&format!("  {} {}\n", "A:".yellow().bold(), round.side_a));
        output.push_str(&format!("  {} {}\n\n", "B:".yellow().bold(), round.side_b));
        output.push_str(&format!(
            "{} {}\n",
            "Participants:".cyan().bold(),
            round.participant_count
        ));

        output.push_str(&Self::footer());
        output
    }

    /// Ranking of the current round
    pub fn format_leaderboard(board: &PeriodLeaderboard) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(&format!("Leaderboard {}", board.period_id)));
        if !board.topic.is_empty() {
            output.push_str(&format!("\n{} {}\n", "Topic:".cyan().bold(), board.topic));
        }
        output.push_str(&Self::entries(&board.entries, "No submissions this round."));
        output.push_str(&Self::footer());
        output
    }

    /// Ranking across all rounds
    pub fn format_lifetime(board: &LifetimeLeaderboard) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("All-Time Leaderboard"));
        output.push_str(&Self::entries(&board.entries, "Nobody has scored yet."));
        output.push_str(&Self::footer());
        output
    }

    /// One participant's standing
    pub fn format_player(score: &PlayerScore) -> String {
        format!(
            "{} {}\n  {} {}\n  {} {}\n",
            "Participant:".cyan().bold(),
            score.participant,
            "This round:".bold(),
            score.period_score,
            "All time:  ".bold(),
            score.lifetime_score
        )
    }

    /// Format any serializable view as JSON
    pub fn format_json<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    fn entries(entries: &[LeaderboardEntry], empty: &str) -> String {
        if entries.is_empty() {
            return format!("\n{}\n", empty.dimmed());
        }

        let width = entries
            .iter()
            .map(|e| e.participant.as_str().chars().count())
            .max()
            .unwrap_or(0);

        let mut output = String::from("\n");
        for entry in entries {
            let rank = format!("{:>3}.", entry.rank);
            let rank = if entry.rank == 1 {
                rank.yellow().bold()
            } else {
                rank.normal()
            };
            output.push_str(&format!(
                "{} {:<width$}  {:>5}\n",
                rank,
                entry.participant.as_str(),
                entry.score,
                width = width
            ));
        }
        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!(
            "\n{}\n{}\n{}\n",
            line.cyan(),
            format!("  {}", title).cyan().bold(),
            line.cyan()
        )
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}
