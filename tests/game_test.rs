//! Tests for the event-driven quiz loop.

use std::time::{Duration, Instant};

use swipe_quiz::{
    Card, CardHandle, CardPresenter, Deck, Direction, Feedback, GameTiming, GestureConfig,
    InputError, InputOutcome, Locale, Point, Presentation, Progress, QuizGame, QuizInput, QuizView,
    Statement, Summary, Tick, Visual,
};

/// Everything the game reported, in order.
#[derive(Debug, Default)]
struct RecordingView {
    cards: Vec<String>,
    drags: Vec<Visual>,
    exits: Vec<Direction>,
    feedback: Vec<Feedback>,
    progress: Vec<Progress>,
    summary: Option<Summary>,
}

impl QuizView for RecordingView {
    fn render_card(&mut self, card: &CardHandle) {
        self.cards.push(card.face().statement().clone());
    }

    fn show_drag(&mut self, visual: &Visual) {
        self.drags.push(*visual);
    }

    fn show_exit(&mut self, direction: Direction) {
        self.exits.push(direction);
    }

    fn show_feedback(&mut self, feedback: &Feedback) {
        self.feedback.push(feedback.clone());
    }

    fn show_progress(&mut self, progress: Progress) {
        self.progress.push(progress);
    }

    fn show_summary(&mut self, summary: &Summary) {
        self.summary = Some(*summary);
    }
}

fn deck(truths: &[bool]) -> Deck {
    Deck::from_ordered(
        truths
            .iter()
            .enumerate()
            .map(|(i, t)| Card::new(Statement::Text(format!("card {}", i)), *t))
            .collect(),
    )
}

fn start(truths: &[bool], view: &mut RecordingView) -> QuizGame {
    let presenter = CardPresenter::new(Presentation::default(), GestureConfig::default());
    QuizGame::start(deck(truths), presenter, GameTiming::default(), view)
}

fn swipe(game: &mut QuizGame, dx: f32, now: Instant, view: &mut RecordingView) -> InputOutcome {
    game.handle_input(QuizInput::PointerDown(Point::new(300.0, 200.0)), now, view)
        .expect("Card open");
    game.handle_input(QuizInput::PointerMove(Point::new(300.0 + dx, 200.0)), now, view)
        .expect("Card open");
    game.handle_input(QuizInput::PointerUp, now, view)
        .expect("Card open")
}

#[test]
fn test_start_presents_first_card() {
    let mut view = RecordingView::default();
    let game = start(&[true, false], &mut view);

    assert_eq!(view.cards, vec!["card 0".to_string()]);
    assert_eq!(view.progress, vec![Progress::new(0, 0, 2)]);
    assert_eq!(game.deck_len(), 2);
    assert!(game.current_card().is_some());
}

#[test]
fn test_button_and_drag_judge_the_same() {
    let t0 = Instant::now();

    let mut button_view = RecordingView::default();
    let mut by_button = start(&[true], &mut button_view);
    let button = by_button
        .handle_input(QuizInput::Affirm, t0, &mut button_view)
        .expect("Card open");

    let mut drag_view = RecordingView::default();
    let mut by_drag = start(&[true], &mut drag_view);
    let dragged = swipe(&mut by_drag, 150.0, t0, &mut drag_view);

    assert_eq!(button, dragged);
    assert!(matches!(button, InputOutcome::Judged(o) if *o.correct()));
    assert_eq!(button_view.feedback, drag_view.feedback);
    assert_eq!(button_view.exits, vec![Direction::Right]);
}

#[test]
fn test_commit_reports_feedback_progress_and_exit() {
    let t0 = Instant::now();
    let mut view = RecordingView::default();
    let mut game = start(&[false, true], &mut view);

    game.handle_input(QuizInput::Affirm, t0, &mut view)
        .expect("Card open");

    assert_eq!(view.feedback.len(), 1);
    assert_eq!(view.progress.last(), Some(&Progress::new(0, 1, 2)));
    assert_eq!(view.exits, vec![Direction::Right]);
    assert!(game.current_card().is_none());
}

#[test]
fn test_short_drag_snaps_back_without_judging() {
    let t0 = Instant::now();
    let mut view = RecordingView::default();
    let mut game = start(&[true], &mut view);

    let outcome = swipe(&mut game, 60.0, t0, &mut view);
    assert_eq!(outcome, InputOutcome::SnappedBack);
    assert_eq!(view.drags.last(), Some(&Visual::default()));
    assert!(view.feedback.is_empty());
    assert_eq!(*game.state().score(), 0);
    assert!(game.current_card().is_some());
}

#[test]
fn test_next_card_waits_for_exit_delay() {
    let t0 = Instant::now();
    let mut view = RecordingView::default();
    let mut game = start(&[true, true], &mut view);

    game.handle_input(QuizInput::Affirm, t0, &mut view)
        .expect("Card open");

    assert_eq!(game.tick(t0 + Duration::from_millis(100), &mut view), Tick::Waiting);
    assert_eq!(view.cards.len(), 1);

    let exit = game
        .exit_progress(t0 + Duration::from_millis(140))
        .expect("Card exiting");
    assert_eq!(exit.direction, Direction::Right);
    assert!((exit.progress - 0.5).abs() < 1e-3);

    assert_eq!(game.tick(t0 + Duration::from_millis(280), &mut view), Tick::NextCard);
    assert_eq!(view.cards, vec!["card 0".to_string(), "card 1".to_string()]);
    assert_eq!(game.tick(t0 + Duration::from_millis(300), &mut view), Tick::Idle);
}

#[test]
fn test_input_refused_while_exiting() {
    let t0 = Instant::now();
    let mut view = RecordingView::default();
    let mut game = start(&[true, true], &mut view);

    game.handle_input(QuizInput::Reject, t0, &mut view)
        .expect("Card open");
    let second = game.handle_input(QuizInput::Affirm, t0, &mut view);

    assert_eq!(second, Err(InputError::CardExiting));
    assert_eq!(view.feedback.len(), 1);
    assert_eq!(*game.state().score(), 0);
}

#[test]
fn test_full_session_reaches_summary() {
    let mut now = Instant::now();
    let mut view = RecordingView::default();
    let mut game = start(&[true, false, true], &mut view);

    for input in [QuizInput::Affirm, QuizInput::Affirm, QuizInput::Reject] {
        game.handle_input(input, now, &mut view)
            .expect("Card open");
        now += Duration::from_millis(300);
        game.tick(now, &mut view);
    }

    assert!(game.is_finished());
    let summary = view.summary.expect("Summary shown");
    assert_eq!(*summary.score(), 1);
    assert_eq!(*summary.accuracy(), 33);
    assert_eq!(*summary.best_streak(), 1);
    assert_eq!(game.summary(), Some(summary));
    assert_eq!(
        game.handle_input(QuizInput::Affirm, now, &mut view),
        Err(InputError::SessionFinished)
    );
}

#[test]
fn test_empty_deck_goes_straight_to_summary() {
    let mut view = RecordingView::default();
    let game = start(&[], &mut view);

    assert!(game.is_finished());
    assert!(view.cards.is_empty());
    let summary = view.summary.expect("Summary shown");
    assert_eq!(*summary.total(), 0);
    assert_eq!(*summary.accuracy(), 0);
}

#[test]
fn test_wrong_answer_feedback_carries_hint() {
    let t0 = Instant::now();
    let mut view = RecordingView::default();
    let presenter = CardPresenter::new(Presentation::default(), GestureConfig::default());
    let deck = Deck::from_ordered(vec![
        Card::new(Statement::Text("0.1 + 0.2 = 0.3 in floats".to_string()), false)
            .with_hint("binary fractions round"),
    ]);
    let mut game = QuizGame::start(deck, presenter, GameTiming::default(), &mut view);

    game.handle_input(QuizInput::Reject, t0, &mut view)
        .expect("Card open");
    let feedback = view.feedback.last().expect("Feedback shown");
    assert_eq!(
        feedback.hint().as_deref(),
        Some("Hint: binary fractions round")
    );
}

#[test]
fn test_game_keeps_its_presentation() {
    let mut view = RecordingView::default();
    let presentation = Presentation {
        locale: Locale::Tr,
        ..Presentation::default()
    };
    let presenter = CardPresenter::new(presentation, GestureConfig::default());
    let game = QuizGame::start(deck(&[true]), presenter, GameTiming::default(), &mut view);

    assert_eq!(game.presenter().presentation(), &presentation);
    assert_eq!(game.presenter().presentation().locale.strings().default_rule, "Genel");
}
