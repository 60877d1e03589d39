//! Progress notification port
//!
//! Defines the interface for reporting progress while a round is judged.

use arena_domain::ParticipantId;

/// Callback for progress updates during judging
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bar, plain lines, nothing).
pub trait JudgingProgress: Send + Sync {
    /// Called once before the first participant is scored
    fn on_judging_start(&self, total: usize);

    /// Called when a participant's score has been agreed
    fn on_participant_scored(&self, participant: &ParticipantId, score: u32);

    /// Called when scoring a participant failed; judging stops after this
    fn on_participant_failed(&self, participant: &ParticipantId, error: &str);

    /// Called when judging finishes, successfully or not
    fn on_judging_complete(&self, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl JudgingProgress for NoProgress {
    fn on_judging_start(&self, _total: usize) {}
    fn on_participant_scored(&self, _participant: &ParticipantId, _score: u32) {}
    fn on_participant_failed(&self, _participant: &ParticipantId, _error: &str) {}
    fn on_judging_complete(&self, _success: bool) {}
}
