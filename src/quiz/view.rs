//! The display boundary the quiz core reports to.

use derive_new::new;

use super::card::Direction;
use super::gesture::Visual;
use super::presenter::{CardHandle, Feedback};
use super::session::Summary;

/// Score and card counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, new)]
pub struct Progress {
    /// Points so far.
    pub score: u32,
    /// Cards answered so far.
    pub answered: usize,
    /// Cards in the session.
    pub total: usize,
}

/// Receives display updates from the quiz.
///
/// The quiz never reads anything back from the view; everything a front end
/// needs to draw arrives through these calls.
pub trait QuizView {
    /// A new card is on top of the table. Clears any previous feedback.
    fn render_card(&mut self, card: &CardHandle);

    /// The current card moved under the pointer (or returned to rest).
    fn show_drag(&mut self, visual: &Visual);

    /// The current card was answered and starts leaving toward `direction`.
    fn show_exit(&mut self, direction: Direction);

    /// Feedback for the answer just given.
    fn show_feedback(&mut self, feedback: &Feedback);

    /// Updated counters.
    fn show_progress(&mut self, progress: Progress);

    /// The session is over.
    fn show_summary(&mut self, summary: &Summary);
}
