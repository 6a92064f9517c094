//! Maps terminal events to quiz actions.

use crossterm::event::{Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::layout::{Position, Rect};
use swipe_quiz::{PointerScale, QuizInput};

use super::ui::Regions;

/// What a terminal event asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppAction {
    /// Forward to the quiz.
    Quiz(QuizInput),
    /// Start over with a fresh deck.
    Replay,
    /// Leave the app.
    Quit,
    /// Nothing to do.
    None,
}

/// Translates one terminal event.
///
/// Mouse presses on the card start a drag, presses on a button answer
/// directly. Arrow keys and letters stand in for the buttons.
pub fn map_event(event: &Event, regions: &Regions, scale: PointerScale, finished: bool) -> AppAction {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => AppAction::Quit,
            KeyCode::Char('r') if finished => AppAction::Replay,
            _ if finished => AppAction::None,
            KeyCode::Left | KeyCode::Char('f') | KeyCode::Char('h') => {
                AppAction::Quiz(QuizInput::Reject)
            }
            KeyCode::Right | KeyCode::Char('t') | KeyCode::Char('l') => {
                AppAction::Quiz(QuizInput::Affirm)
            }
            _ => AppAction::None,
        },
        Event::Mouse(mouse) if !finished => {
            let at = Position::new(mouse.column, mouse.row);
            let point = scale.to_point(mouse.column, mouse.row);
            match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) if hit(regions.reject_button, at) => {
                    AppAction::Quiz(QuizInput::Reject)
                }
                MouseEventKind::Down(MouseButton::Left) if hit(regions.affirm_button, at) => {
                    AppAction::Quiz(QuizInput::Affirm)
                }
                MouseEventKind::Down(MouseButton::Left) if hit(regions.card, at) => {
                    AppAction::Quiz(QuizInput::PointerDown(point))
                }
                MouseEventKind::Drag(MouseButton::Left) => {
                    AppAction::Quiz(QuizInput::PointerMove(point))
                }
                MouseEventKind::Up(MouseButton::Left) => AppAction::Quiz(QuizInput::PointerUp),
                _ => AppAction::None,
            }
        }
        _ => AppAction::None,
    }
}

fn hit(area: Rect, at: Position) -> bool {
    area.contains(at)
}
