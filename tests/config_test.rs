//! Tests for TOML configuration.

use std::io::Write;
use std::time::Duration;

use tempfile::NamedTempFile;

use swipe_quiz::{
    Direction, FeedbackStyle, GestureEvent, GestureInterpreter, Locale, Point, QuizConfig,
    SESSION_SIZE,
};

#[test]
fn test_empty_config_uses_defaults() {
    let config = QuizConfig::from_toml("").expect("Empty config is valid");
    assert_eq!(*config.session_size(), SESSION_SIZE);
    assert_eq!(config.gesture().commit_threshold, 120.0);
    assert_eq!(config.gesture().lean_threshold, 30.0);
    assert_eq!(config.timing().exit_delay, Duration::from_millis(280));
    assert_eq!(config.timing().streak_badge_min, 3);
    assert_eq!(config.presentation().locale, Locale::En);
    assert!(config.presentation().math);
    assert_eq!(config.presentation().feedback, FeedbackStyle::Direction);
}

#[test]
fn test_partial_overrides() {
    let config = QuizConfig::from_toml(
        r#"
        session_size = 5
        exit_delay_ms = 100

        [gesture]
        commit_threshold = 80.0

        [presentation]
        locale = "tr"
        feedback = "correctness"
        "#,
    )
    .expect("Valid config");

    assert_eq!(*config.session_size(), 5);
    assert_eq!(config.timing().exit_delay, Duration::from_millis(100));
    assert_eq!(config.gesture().commit_threshold, 80.0);
    assert_eq!(config.gesture().lean_threshold, 30.0);
    assert_eq!(config.presentation().locale, Locale::Tr);
    assert_eq!(config.presentation().feedback, FeedbackStyle::Correctness);
    assert!(config.presentation().math);
}

#[test]
fn test_invalid_values_rejected() {
    assert!(QuizConfig::from_toml("session_size = 0").is_err());
    assert!(QuizConfig::from_toml("[gesture]\nrotation_divisor = 0.0").is_err());
    assert!(QuizConfig::from_toml("[gesture]\ncommit_threshold = -1.0").is_err());
    assert!(QuizConfig::from_toml("[pointer]\ncell_width = 0.0").is_err());
    assert!(QuizConfig::from_toml("[presentation]\nlocale = \"fr\"").is_err());
}

#[test]
fn test_non_finite_values_rejected() {
    for toml in [
        "[gesture]\ncommit_threshold = nan",
        "[gesture]\ncommit_threshold = inf",
        "[gesture]\nlean_threshold = nan",
        "[gesture]\nrotation_divisor = nan",
        "[gesture]\nrotation_divisor = -inf",
        "[pointer]\ncell_width = nan",
        "[pointer]\ncell_height = inf",
    ] {
        let result = QuizConfig::from_toml(toml);
        assert!(result.is_err(), "accepted {:?}", toml);
    }
}

#[test]
fn test_validated_threshold_still_commits() {
    let config = QuizConfig::from_toml("[gesture]\ncommit_threshold = 50.0").expect("Valid config");
    let mut gesture = GestureInterpreter::new(*config.gesture());
    gesture.pointer_down(Point::new(0.0, 0.0)).expect("Open card");
    gesture.pointer_move(Point::new(1000.0, 0.0)).expect("Open card");
    assert_eq!(
        gesture.pointer_up(),
        Ok(GestureEvent::Committed(Direction::Right))
    );
}

#[test]
fn test_from_file() {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "session_size = 7").expect("Failed to write config");
    let config = QuizConfig::from_file(file.path()).expect("Valid config file");
    assert_eq!(*config.session_size(), 7);
}

#[test]
fn test_missing_file_errors() {
    let err = QuizConfig::from_file("/nonexistent/swipe_quiz.toml").unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_pointer_scale_converts_cells() {
    let config = QuizConfig::default();
    let scale = *config.pointer();
    let point = scale.to_point(10, 2);
    assert_eq!(point.x, 80.0);
    assert_eq!(point.y, 32.0);
    assert_eq!(scale.to_columns(-124.0), -16);
}
