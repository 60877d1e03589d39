//! Progress reporting while a round is judged

use arena_application::JudgingProgress;
use arena_domain::ParticipantId;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;

/// Reports judging progress with a progress bar
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn judging_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn with_bar(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(guard) = self.bar.lock()
            && let Some(pb) = guard.as_ref()
        {
            f(pb);
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl JudgingProgress for ProgressReporter {
    fn on_judging_start(&self, total: usize) {
        let pb = ProgressBar::new(total as u64);
        pb.set_style(Self::judging_style());
        pb.set_prefix("Judging");
        pb.set_message("Scoring...");

        if let Ok(mut guard) = self.bar.lock() {
            *guard = Some(pb);
        }
    }

    fn on_participant_scored(&self, participant: &ParticipantId, score: u32) {
        self.with_bar(|pb| {
            pb.set_message(format!("{} {} ({})", "v".green(), participant, score));
            pb.inc(1);
        });
    }

    fn on_participant_failed(&self, participant: &ParticipantId, error: &str) {
        self.with_bar(|pb| {
            pb.println(format!("  {} {}: {}", "x".red(), participant, error));
            pb.set_message(format!("{} {}", "x".red(), participant));
        });
    }

    fn on_judging_complete(&self, success: bool) {
        let taken = self.bar.lock().ok().and_then(|mut guard| guard.take());
        if let Some(pb) = taken {
            if success {
                pb.finish_with_message(format!("{}", "complete!".green()));
            } else {
                pb.abandon_with_message(format!("{}", "aborted".red()));
            }
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl JudgingProgress for SimpleProgress {
    fn on_judging_start(&self, total: usize) {
        println!(
            "{} {} ({} submissions)",
            "->".cyan(),
            "Judging".bold(),
            total
        );
    }

    fn on_participant_scored(&self, participant: &ParticipantId, score: u32) {
        println!("  {} {} scored {}", "v".green(), participant, score);
    }

    fn on_participant_failed(&self, participant: &ParticipantId, error: &str) {
        println!("  {} {} (failed: {})", "x".red(), participant, error);
    }

    fn on_judging_complete(&self, _success: bool) {
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reporter_lifecycle() {
        let reporter = ProgressReporter::new();
        let alice = ParticipantId::new("alice");

        reporter.on_judging_start(2);
        reporter.on_participant_scored(&alice, 72);
        assert_eq!(
            reporter.bar.lock().unwrap().as_ref().map(|pb| pb.position()),
            Some(1)
        );

        reporter.on_judging_complete(true);
        assert!(reporter.bar.lock().unwrap().is_none());
    }

    #[test]
    fn test_events_without_start_are_ignored() {
        let reporter = ProgressReporter::default();
        reporter.on_participant_failed(&ParticipantId::new("bob"), "oracle unavailable");
        reporter.on_judging_complete(false);
        assert!(reporter.bar.lock().unwrap().is_none());
    }
}
