//! Tests for judging and the typestate session.

use swipe_quiz::{
    Card, CardPresenter, Deck, Direction, GestureConfig, Outcome, Presentation, STREAK_BADGE_MIN,
    SessionFinished, SessionState, SessionStep, Statement, Summary, judge,
};

fn card(text: &str, is_true: bool) -> Card {
    Card::new(Statement::Text(text.to_string()), is_true)
}

/// Answers every card in order and returns the finished session.
fn play(truths: &[bool], answers: &[Direction]) -> SessionFinished {
    let deck = Deck::from_ordered(
        truths
            .iter()
            .enumerate()
            .map(|(i, t)| card(&format!("card {}", i), *t))
            .collect(),
    );
    let presenter = CardPresenter::new(Presentation::default(), GestureConfig::default());

    let mut step = SessionStep::start(deck);
    for answer in answers {
        let session = match step {
            SessionStep::Presenting(s) => s,
            SessionStep::Finished(_) => panic!("Session finished early"),
        };
        let handle = presenter.present(*session.state().cursor(), session.current_card());
        let (_, judged) = session.judge(&handle, *answer);
        step = judged.advance();
    }
    match step {
        SessionStep::Finished(finished) => finished,
        SessionStep::Presenting(_) => panic!("Session should be finished"),
    }
}

#[test]
fn test_three_card_session() {
    use Direction::*;
    let finished = play(&[true, false, true], &[Right, Right, Left]);
    let summary = finished.summary(STREAK_BADGE_MIN);

    assert_eq!(*summary.score(), 1);
    assert_eq!(*summary.total(), 3);
    assert_eq!(*summary.best_streak(), 1);
    assert_eq!(*summary.accuracy(), 33);
    assert!(!summary.streak_badge());
}

#[test]
fn test_perfect_session_earns_badge() {
    use Direction::*;
    let finished = play(&[true, false, true, false], &[Right, Left, Right, Left]);
    let summary = finished.summary(STREAK_BADGE_MIN);
    assert_eq!(*summary.score(), 4);
    assert_eq!(*summary.accuracy(), 100);
    assert_eq!(*summary.best_streak(), 4);
    assert!(*summary.streak_badge());
}

#[test]
fn test_miss_resets_current_streak_but_not_best() {
    let right = Outcome::compare(Direction::Right, Direction::Right);
    let wrong = Outcome::compare(Direction::Left, Direction::Right);

    let state = SessionState::new()
        .record(right)
        .record(right)
        .record(wrong)
        .record(right);
    assert_eq!(*state.score(), 3);
    assert_eq!(*state.current_streak(), 1);
    assert_eq!(*state.best_streak(), 2);
    assert!(state.best_streak() >= state.current_streak());
}

#[test]
fn test_judge_compares_against_card_truth() {
    let presenter = CardPresenter::new(Presentation::default(), GestureConfig::default());
    let handle = presenter.present(0, &card("2 + 2 = 5", false));

    let (outcome, state) = judge(&handle, Direction::Left, SessionState::new());
    assert!(*outcome.correct());
    assert_eq!(*outcome.committed(), Direction::Left);
    assert_eq!(*state.score(), 1);

    let (outcome, state) = judge(&handle, Direction::Right, SessionState::new());
    assert!(!outcome.correct());
    assert_eq!(*state.score(), 0);
    assert_eq!(*state.current_streak(), 0);
}

#[test]
fn test_cursor_advances_once_per_card() {
    let deck = Deck::from_ordered(vec![card("a", true), card("b", true)]);
    let presenter = CardPresenter::new(Presentation::default(), GestureConfig::default());

    let SessionStep::Presenting(session) = SessionStep::start(deck) else {
        panic!("Expected a card");
    };
    assert_eq!(*session.state().cursor(), 0);

    let handle = presenter.present(0, session.current_card());
    let (_, judged) = session.judge(&handle, Direction::Right);
    // Cursor moves on advance, not on judge.
    assert_eq!(*judged.state().cursor(), 0);

    let SessionStep::Presenting(session) = judged.advance() else {
        panic!("Expected a second card");
    };
    assert_eq!(*session.state().cursor(), 1);
    assert_eq!(session.current_card().statement().content(), "b");
}

#[test]
fn test_empty_deck_finishes_immediately() {
    let step = SessionStep::start(Deck::from_ordered(Vec::new()));
    let SessionStep::Finished(finished) = step else {
        panic!("Empty deck should finish");
    };
    let summary = finished.summary(STREAK_BADGE_MIN);
    assert_eq!(*summary.total(), 0);
    assert_eq!(*summary.accuracy(), 0);
}

#[test]
fn test_summary_accuracy_rounds() {
    assert_eq!(*Summary::new(2, 3, 2, 3).accuracy(), 67);
    assert_eq!(*Summary::new(1, 8, 1, 3).accuracy(), 13);
    assert!(*Summary::new(3, 10, 3, 3).streak_badge());
    assert!(!Summary::new(3, 10, 2, 3).streak_badge());
}
