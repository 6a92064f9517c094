//! Application state and logic.

use std::time::Instant;

use rand_chacha::ChaCha8Rng;
use swipe_quiz::{
    CardFace, CardHandle, DeckError, DeckLoader, Direction, Feedback, Progress, QuizConfig,
    QuizGame, QuizInput, QuizView, Strings, Summary, Tick, Visual,
};
use tracing::{debug, info, instrument};

use super::ui::{CardPlacement, Regions};

/// Everything the quiz has told the terminal to show.
#[derive(Debug, Default)]
pub struct TerminalView {
    card: Option<CardFace>,
    answer: Option<Direction>,
    revealed: bool,
    visual: Visual,
    feedback: Option<Feedback>,
    progress: Progress,
    summary: Option<Summary>,
}

impl TerminalView {
    /// The card on the table, if any.
    pub fn card(&self) -> Option<&CardFace> {
        self.card.as_ref()
    }

    /// The card's answer, once it has been committed.
    pub fn revealed_answer(&self) -> Option<Direction> {
        self.answer.filter(|_| self.revealed)
    }

    /// Latest feedback.
    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    /// Current counters.
    pub fn progress(&self) -> Progress {
        self.progress
    }

    /// Session summary, once finished.
    pub fn summary(&self) -> Option<&Summary> {
        self.summary.as_ref()
    }
}

impl QuizView for TerminalView {
    fn render_card(&mut self, card: &CardHandle) {
        self.card = Some(card.face().clone());
        self.answer = Some(*card.answer());
        self.revealed = false;
        self.visual = Visual::default();
        self.feedback = None;
    }

    fn show_drag(&mut self, visual: &Visual) {
        self.visual = *visual;
    }

    fn show_exit(&mut self, direction: Direction) {
        self.visual.lean = Some(direction);
        self.revealed = true;
    }

    fn show_feedback(&mut self, feedback: &Feedback) {
        self.feedback = Some(feedback.clone());
    }

    fn show_progress(&mut self, progress: Progress) {
        self.progress = progress;
    }

    fn show_summary(&mut self, summary: &Summary) {
        self.card = None;
        self.summary = Some(*summary);
    }
}

/// Main application state.
pub struct App {
    config: QuizConfig,
    loader: DeckLoader,
    rng: ChaCha8Rng,
    game: QuizGame,
    view: TerminalView,
    regions: Regions,
}

impl App {
    /// Loads the first deck and starts a session.
    ///
    /// A load failure aborts start-up; nothing is shown until the deck is in.
    #[instrument(skip_all, fields(source = %loader.source()))]
    pub async fn load(
        config: QuizConfig,
        loader: DeckLoader,
        mut rng: ChaCha8Rng,
    ) -> Result<Self, DeckError> {
        let deck = loader.load(&mut rng).await?;
        let mut view = TerminalView::default();
        let game = QuizGame::start(deck, config.presenter(), config.timing(), &mut view);
        Ok(Self {
            config,
            loader,
            rng,
            game,
            view,
            regions: Regions::default(),
        })
    }

    /// The view state to draw.
    pub fn view(&self) -> &TerminalView {
        &self.view
    }

    /// Active configuration.
    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    /// Locale strings of the running game.
    pub fn strings(&self) -> &'static Strings {
        self.game.presenter().presentation().locale.strings()
    }

    /// Screen regions from the last layout.
    pub fn regions(&self) -> &Regions {
        &self.regions
    }

    /// Re-lays out the screen for a new terminal size.
    pub fn resize(&mut self, area: ratatui::layout::Rect) {
        self.regions = Regions::compute(area);
    }

    /// Returns true once the summary is showing.
    pub fn is_finished(&self) -> bool {
        self.game.is_finished()
    }

    /// Where to draw the card this frame.
    pub fn placement(&self, now: Instant) -> CardPlacement {
        let scale = *self.config.pointer();
        match self.game.exit_progress(now) {
            Some(exit) => CardPlacement::leaving(
                exit.handle.gesture().visual(),
                exit.direction,
                exit.progress,
                self.regions.table.width,
                scale,
            ),
            None => CardPlacement::resting(self.view.visual, scale),
        }
    }

    /// Feeds one quiz input to the game. Refused input is logged and dropped.
    #[instrument(skip(self))]
    pub fn apply(&mut self, input: QuizInput, now: Instant) {
        match self.game.handle_input(input, now, &mut self.view) {
            Ok(outcome) => debug!(?outcome, "Input applied"),
            Err(e) => debug!(error = %e, "Input refused"),
        }
    }

    /// Advances pending exits.
    pub fn tick(&mut self, now: Instant) -> Tick {
        self.game.tick(now, &mut self.view)
    }

    /// Throws the whole session away and deals a new one from the source.
    #[instrument(skip(self))]
    pub async fn replay(self) -> Result<Self, DeckError> {
        info!("Replaying with a fresh deck");
        let Self {
            config,
            loader,
            mut rng,
            game,
            regions,
            ..
        } = self;
        let mut view = TerminalView::default();
        let game = game.restart(&loader, &mut rng, &mut view).await?;
        Ok(Self {
            config,
            loader,
            rng,
            game,
            view,
            regions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swipe_quiz::{Card, CardPresenter, GestureConfig, Presentation, Statement};

    #[test]
    fn test_answer_revealed_only_after_exit() {
        let presenter = CardPresenter::new(Presentation::default(), GestureConfig::default());
        let card = Card::new(Statement::Text("Rust is memory safe".to_string()), true);
        let mut view = TerminalView::default();

        view.render_card(&presenter.present(0, &card));
        assert_eq!(view.revealed_answer(), None);

        view.show_exit(Direction::Left);
        assert_eq!(view.revealed_answer(), Some(Direction::Right));

        view.render_card(&presenter.present(1, &card));
        assert_eq!(view.revealed_answer(), None);
    }
}
