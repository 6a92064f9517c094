//! Terminal UI for Swipe Quiz

mod app;
mod input;
mod ui;

use std::io;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand_chacha::ChaCha8Rng;
use ratatui::{Terminal, backend::CrosstermBackend};
use swipe_quiz::{DeckLoader, QuizConfig, Tick};
use tracing::{debug, error, info, instrument};

use app::App;
use input::{AppAction, map_event};

/// Frame interval for drag and exit animation.
const FRAME: Duration = Duration::from_millis(16);

/// Runs the quiz in the terminal until the user quits.
///
/// The deck is loaded before the terminal is touched, so a bad source
/// fails cleanly without a half-drawn screen.
pub async fn run_tui(loader: DeckLoader, config: QuizConfig, rng: ChaCha8Rng) -> Result<()> {
    info!("Starting Swipe Quiz TUI");

    let app = App::load(config, loader, rng)
        .await
        .context("Failed to load deck")?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Quiz loop error");
    }
    res
}

#[instrument(skip_all)]
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
) -> Result<()> {
    loop {
        let size = terminal.size()?;
        app.resize(ratatui::layout::Rect::new(0, 0, size.width, size.height));

        let placement = app.placement(Instant::now());
        terminal.draw(|frame| {
            ui::draw(frame, app.regions(), app.view(), placement, app.strings())
        })?;

        if event::poll(FRAME)? {
            let event = event::read()?;
            if let Event::Resize(width, height) = event {
                debug!(width, height, "Terminal resized");
            }
            let action = map_event(
                &event,
                app.regions(),
                *app.config().pointer(),
                app.is_finished(),
            );
            match action {
                AppAction::Quit => {
                    info!("User quit");
                    return Ok(());
                }
                AppAction::Replay => {
                    app = app.replay().await.context("Failed to reload deck")?;
                }
                AppAction::Quiz(input) => app.apply(input, Instant::now()),
                AppAction::None => {}
            }
        }

        if app.tick(Instant::now()) == Tick::Finished {
            info!("Session finished");
        }
    }
}
