//! Stateless UI rendering for the quiz.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use swipe_quiz::{CardFace, Direction, PointerScale, Strings, Summary, Tone, Visual};

use super::app::TerminalView;

/// Card width in columns.
const CARD_WIDTH: u16 = 46;
/// Card height in rows.
const CARD_HEIGHT: u16 = 11;

/// Screen regions, shared by drawing and mouse hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Regions {
    /// Title and counters.
    pub header: Rect,
    /// Area the card moves within.
    pub table: Rect,
    /// The card at rest.
    pub card: Rect,
    /// Feedback and hint lines.
    pub feedback: Rect,
    /// "False" button.
    pub reject_button: Rect,
    /// "True" button.
    pub affirm_button: Rect,
    /// Key help.
    pub help: Rect,
}

impl Regions {
    /// Lays out the screen for a terminal of size `area`.
    pub fn compute(area: Rect) -> Self {
        let [header, table, feedback, buttons, help] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(CARD_HEIGHT),
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(area);

        let [_, reject_button, _, affirm_button, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(16),
            Constraint::Length(4),
            Constraint::Length(16),
            Constraint::Fill(1),
        ])
        .areas(buttons);

        Self {
            header,
            table,
            card: center_rect(table, CARD_WIDTH, CARD_HEIGHT),
            feedback,
            reject_button,
            affirm_button,
            help,
        }
    }
}

/// Where the card is drawn this frame.
#[derive(Debug, Clone, Copy)]
pub struct CardPlacement {
    /// Horizontal shift in columns.
    pub dx: i32,
    /// Vertical shift in rows.
    pub dy: i32,
    /// Visual state driving lean colour and tilt label.
    pub visual: Visual,
    /// Exit progress in `[0, 1]` while the card is leaving.
    pub exiting: Option<f32>,
}

impl CardPlacement {
    /// Placement for a card under the pointer.
    pub fn resting(visual: Visual, scale: PointerScale) -> Self {
        Self {
            dx: scale.to_columns(visual.offset_x),
            dy: (visual.offset_y / scale.cell_height).round() as i32,
            visual,
            exiting: None,
        }
    }

    /// Placement for a card leaving toward `direction`.
    pub fn leaving(
        visual: Visual,
        direction: Direction,
        progress: f32,
        table_width: u16,
        scale: PointerScale,
    ) -> Self {
        let start = Self::resting(visual, scale);
        let travel = (direction.sign() * progress * f32::from(table_width)).round() as i32;
        Self {
            dx: start.dx + travel,
            exiting: Some(progress),
            ..start
        }
    }
}

/// Renders the whole screen.
pub fn draw(
    frame: &mut Frame,
    regions: &Regions,
    view: &TerminalView,
    placement: CardPlacement,
    strings: &Strings,
) {
    draw_header(frame, regions.header, view, strings);

    if let Some(summary) = view.summary() {
        draw_summary(frame, regions.table, summary, strings);
        draw_help(frame, regions.help, strings.replay);
        return;
    }

    if let Some(face) = view.card() {
        let badge = answer_badge(view.revealed_answer(), strings);
        draw_card(frame, regions, face, badge, placement, strings);
    }
    draw_feedback(frame, regions.feedback, view);
    draw_buttons(frame, regions, strings);
    draw_help(frame, regions.help, strings.help);
}

fn draw_header(frame: &mut Frame, area: Rect, view: &TerminalView, strings: &Strings) {
    let progress = view.progress();
    let line = Line::from(vec![
        Span::styled(
            strings.title,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("    "),
        Span::styled(
            format!("{}: {}", strings.score, progress.score),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw("    "),
        Span::styled(
            format!("{}: {}/{}", strings.card, progress.answered, progress.total),
            Style::default().fg(Color::Gray),
        ),
    ]);
    let header = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn draw_card(
    frame: &mut Frame,
    regions: &Regions,
    face: &CardFace,
    badge: Option<&str>,
    placement: CardPlacement,
    strings: &Strings,
) {
    let Some(area) = shifted(regions.card, placement.dx, placement.dy, regions.table) else {
        return;
    };

    let border = match (placement.exiting, placement.visual.lean) {
        (Some(progress), _) if progress > 0.5 => Style::default().fg(Color::DarkGray),
        (_, Some(Direction::Right)) => Style::default().fg(Color::Green),
        (_, Some(Direction::Left)) => Style::default().fg(Color::Red),
        (_, None) => Style::default().fg(Color::White),
    };
    let tilt = if placement.visual.rotation.abs() >= 0.5 {
        format!(" {:+.0}° ", placement.visual.rotation)
    } else {
        String::new()
    };

    let mut lines = vec![
        Line::from(Span::styled(
            face.statement().as_str(),
            border.add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
    ];
    if let Some(example) = face.example() {
        lines.push(Line::from(Span::styled(
            format!("{} {}", strings.example_prefix, example),
            Style::default().fg(Color::Gray),
        )));
    }

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(format!(" {} ", face.rule()))
        .title_bottom(Line::from(tilt).right_aligned());
    if let Some(badge) = badge {
        block = block.title(
            Line::from(Span::styled(
                format!(" {} ", badge),
                border.add_modifier(Modifier::REVERSED),
            ))
            .right_aligned(),
        );
    }
    let card = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(Clear, area);
    frame.render_widget(card, area);
}

fn draw_feedback(frame: &mut Frame, area: Rect, view: &TerminalView) {
    let lines = match view.feedback() {
        Some(feedback) => {
            let color = match feedback.tone() {
                Tone::Good => Color::Green,
                Tone::Bad => Color::Red,
            };
            let mut lines = vec![Line::from(Span::styled(
                feedback.label().as_str(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))];
            if let Some(hint) = feedback.hint() {
                lines.push(Line::from(Span::styled(
                    hint.as_str(),
                    Style::default().fg(Color::Yellow),
                )));
            }
            lines
        }
        None => Vec::new(),
    };
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn draw_buttons(frame: &mut Frame, regions: &Regions, strings: &Strings) {
    let reject = Paragraph::new(strings.reject_button)
        .style(Style::default().fg(Color::Red))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(reject, regions.reject_button);

    let affirm = Paragraph::new(strings.affirm_button)
        .style(Style::default().fg(Color::Green))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(affirm, regions.affirm_button);
}

fn draw_summary(frame: &mut Frame, area: Rect, summary: &Summary, strings: &Strings) {
    let mut lines = vec![
        Line::from(Span::styled(
            strings.summary_title,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::from(format!(
            "{}: {} / {}",
            strings.final_score,
            summary.score(),
            summary.total()
        )),
        Line::from(format!("{}: {}%", strings.accuracy, summary.accuracy())),
    ];
    if *summary.streak_badge() {
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            format!("{} {}", strings.best_streak, summary.best_streak()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
    }
    let panel = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(panel, center_rect(area, CARD_WIDTH, CARD_HEIGHT));
}

fn draw_help(frame: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, area);
}

/// Badge text for a card whose answer has been revealed.
fn answer_badge(answer: Option<Direction>, strings: &Strings) -> Option<&'static str> {
    answer.map(|direction| match direction {
        Direction::Right => strings.true_badge,
        Direction::Left => strings.false_badge,
    })
}

/// Moves `rect` by whole cells, clipped to `bounds`. `None` once fully outside.
fn shifted(rect: Rect, dx: i32, dy: i32, bounds: Rect) -> Option<Rect> {
    let left = i32::from(rect.x) + dx;
    let top = i32::from(rect.y) + dy;
    let right = left + i32::from(rect.width);
    let bottom = top + i32::from(rect.height);

    let clip_left = left.max(i32::from(bounds.x));
    let clip_top = top.max(i32::from(bounds.y));
    let clip_right = right.min(i32::from(bounds.right()));
    let clip_bottom = bottom.min(i32::from(bounds.bottom()));

    if clip_right <= clip_left || clip_bottom <= clip_top {
        return None;
    }
    Some(Rect::new(
        u16::try_from(clip_left).ok()?,
        u16::try_from(clip_top).ok()?,
        u16::try_from(clip_right - clip_left).ok()?,
        u16::try_from(clip_bottom - clip_top).ok()?,
    ))
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regions_card_inside_table() {
        let regions = Regions::compute(Rect::new(0, 0, 100, 40));
        assert_eq!(regions.card.width, CARD_WIDTH);
        assert!(regions.card.x >= regions.table.x);
        assert!(regions.card.right() <= regions.table.right());
        assert!(regions.reject_button.right() <= regions.affirm_button.x);
    }

    #[test]
    fn test_shifted_clips_to_bounds() {
        let bounds = Rect::new(0, 0, 50, 20);
        let rect = Rect::new(10, 5, 20, 10);
        assert_eq!(shifted(rect, 5, 0, bounds), Some(Rect::new(15, 5, 20, 10)));
        assert_eq!(shifted(rect, 25, 0, bounds), Some(Rect::new(35, 5, 15, 10)));
        assert_eq!(shifted(rect, -40, 0, bounds), None);
    }

    #[test]
    fn test_answer_badge_follows_locale() {
        let en = swipe_quiz::Locale::En.strings();
        let tr = swipe_quiz::Locale::Tr.strings();
        assert_eq!(answer_badge(None, en), None);
        assert_eq!(answer_badge(Some(Direction::Right), en), Some("TRUE"));
        assert_eq!(answer_badge(Some(Direction::Left), en), Some("FALSE"));
        assert_eq!(answer_badge(Some(Direction::Left), tr), Some("YANLIŞ"));
    }

    #[test]
    fn test_leaving_card_travels_toward_direction() {
        let scale = PointerScale::default();
        let right = CardPlacement::leaving(Visual::default(), Direction::Right, 0.5, 80, scale);
        let left = CardPlacement::leaving(Visual::default(), Direction::Left, 0.5, 80, scale);
        assert_eq!(right.dx, 40);
        assert_eq!(left.dx, -40);
    }
}
