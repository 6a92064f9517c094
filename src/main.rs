//! Swipe Quiz - Unified CLI
//!
//! Plays a quiz session in the terminal or checks a deck file.

#![warn(missing_docs)]

mod cli;
mod tui;

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use swipe_quiz::{DeckLoader, DeckSource, QuizConfig, SESSION_SIZE};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            deck,
            config,
            seed,
            cards,
            locale,
            feedback,
            raw_math,
            log_file,
        } => {
            init_file_logging(&log_file)?;
            let mut quiz_config = load_config(&config)?;
            let mut presentation = *quiz_config.presentation();
            if let Some(locale) = locale {
                presentation.locale = locale;
            }
            if let Some(feedback) = feedback {
                presentation.feedback = feedback;
            }
            if raw_math {
                presentation.math = false;
            }
            quiz_config = quiz_config.with_presentation(presentation);
            if let Some(cards) = cards {
                quiz_config = quiz_config.with_session_size(cards as usize);
            }

            let seed = seed.unwrap_or_else(rand::random);
            info!(seed, deck = %deck, "Starting play");
            let rng = ChaCha8Rng::seed_from_u64(seed);
            let loader = DeckLoader::new(DeckSource::parse(&deck), *quiz_config.session_size());
            tui::run_tui(loader, quiz_config, rng).await
        }
        Command::Check { deck } => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
                )
                .with_writer(std::io::stderr)
                .init();
            run_check(&deck).await
        }
    }
}

/// Sends logs to a file so they do not interfere with the TUI.
fn init_file_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

/// Loads the config file if it exists, defaults otherwise.
#[instrument]
fn load_config(path: &Path) -> Result<QuizConfig> {
    if path.exists() {
        QuizConfig::from_file(path).context("Failed to load config")
    } else {
        warn!(path = %path.display(), "Config file not found, using defaults");
        Ok(QuizConfig::default())
    }
}

/// Prints a breakdown of a deck without shuffling or playing it.
#[instrument]
async fn run_check(deck: &str) -> Result<()> {
    let loader = DeckLoader::new(DeckSource::parse(deck), SESSION_SIZE);
    let cards = loader
        .fetch_cards()
        .await
        .with_context(|| format!("Failed to load deck from {}", deck))?;

    let true_count = cards.iter().filter(|c| *c.is_true()).count();
    let with_hint = cards.iter().filter(|c| c.hint().is_some()).count();
    let mut rules: BTreeMap<&str, usize> = BTreeMap::new();
    for card in &cards {
        let rule = card.rule().as_deref().unwrap_or("(none)");
        *rules.entry(rule).or_default() += 1;
    }

    println!("Deck: {}", deck);
    println!("Cards: {}", cards.len());
    println!("True / False: {} / {}", true_count, cards.len() - true_count);
    println!("With hint: {}", with_hint);
    println!("Per session: {}", cards.len().min(SESSION_SIZE));
    println!("Rules:");
    for (rule, count) in rules {
        println!("  {:<24} {}", rule, count);
    }
    Ok(())
}
