//! Quiz configuration loaded from TOML.

use std::path::Path;
use std::time::Duration;

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::{
    CardPresenter, GameTiming, GestureConfig, Point, Presentation, SESSION_SIZE, STREAK_BADGE_MIN,
};

/// Size of one terminal cell in pointer pixels.
///
/// Gesture thresholds are expressed in pixels; mouse positions arrive in
/// cells and are scaled by this before reaching the gesture interpreter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointerScale {
    /// Width of one column.
    pub cell_width: f32,
    /// Height of one row.
    pub cell_height: f32,
}

impl Default for PointerScale {
    fn default() -> Self {
        Self {
            cell_width: 8.0,
            cell_height: 16.0,
        }
    }
}

impl PointerScale {
    /// Converts a cell position to a pointer position.
    pub fn to_point(self, column: u16, row: u16) -> Point {
        Point::new(
            f32::from(column) * self.cell_width,
            f32::from(row) * self.cell_height,
        )
    }

    /// Converts a horizontal pixel offset to whole columns.
    pub fn to_columns(self, offset: f32) -> i32 {
        (offset / self.cell_width).round() as i32
    }
}

/// Configuration for a quiz session.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    /// Cards dealt per session.
    session_size: usize,

    /// Drag thresholds.
    gesture: GestureConfig,

    /// Milliseconds an answered card takes to leave the table.
    exit_delay_ms: u64,

    /// Best streak needed for the summary badge.
    streak_badge_min: u32,

    /// Terminal cell size in pointer pixels.
    pointer: PointerScale,

    /// Language, math rendering and feedback style.
    presentation: Presentation,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            session_size: SESSION_SIZE,
            gesture: GestureConfig::default(),
            exit_delay_ms: 280,
            streak_badge_min: STREAK_BADGE_MIN,
            pointer: PointerScale::default(),
            presentation: Presentation::default(),
        }
    }
}

impl QuizConfig {
    /// Loads configuration from a TOML file. Missing keys take their defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            session_size = config.session_size,
            locale = %config.presentation.locale,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Replaces the presentation settings.
    pub fn with_presentation(mut self, presentation: Presentation) -> Self {
        self.presentation = presentation;
        self
    }

    /// Replaces the session size.
    pub fn with_session_size(mut self, session_size: usize) -> Self {
        self.session_size = session_size;
        self
    }

    /// Exit timing for [`QuizGame`](crate::QuizGame).
    pub fn timing(&self) -> GameTiming {
        GameTiming {
            exit_delay: Duration::from_millis(self.exit_delay_ms),
            streak_badge_min: self.streak_badge_min,
        }
    }

    /// Builds a card presenter from these settings.
    pub fn presenter(&self) -> CardPresenter {
        CardPresenter::new(self.presentation, self.gesture)
    }

    #[instrument(skip(self))]
    fn validate(&self) -> Result<(), ConfigError> {
        if self.session_size == 0 {
            return Err(ConfigError::new("session_size must be at least 1".to_string()));
        }
        let gesture = &self.gesture;
        if !gesture.rotation_divisor.is_finite() || gesture.rotation_divisor == 0.0 {
            return Err(ConfigError::new(
                "gesture.rotation_divisor must be finite and non-zero".to_string(),
            ));
        }
        for (name, value) in [
            ("commit_threshold", gesture.commit_threshold),
            ("lean_threshold", gesture.lean_threshold),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::new(format!(
                    "gesture.{} must be finite and non-negative",
                    name
                )));
            }
        }
        for (name, value) in [
            ("cell_width", self.pointer.cell_width),
            ("cell_height", self.pointer.cell_height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::new(format!(
                    "pointer.{} must be finite and positive",
                    name
                )));
            }
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
