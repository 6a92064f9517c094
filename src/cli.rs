//! Command-line interface for swipe_quiz.

use clap::{Parser, Subcommand};
use swipe_quiz::{FeedbackStyle, Locale};

/// Swipe Quiz - answer true/false flashcards by swiping
#[derive(Parser, Debug)]
#[command(name = "swipe_quiz")]
#[command(about = "Swipe-to-answer true/false flashcard quiz", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a session in the terminal
    Play {
        /// Deck location: a JSON file path or an http(s) URL
        #[arg(short, long, default_value = "cards.json")]
        deck: String,

        /// Path to a TOML config file (defaults apply when absent)
        #[arg(short, long, default_value = "swipe_quiz.toml")]
        config: std::path::PathBuf,

        /// Seed for a reproducible shuffle
        #[arg(long)]
        seed: Option<u64>,

        /// Cards per session (overrides config)
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        cards: Option<u64>,

        /// Display language: en or tr (overrides config)
        #[arg(long)]
        locale: Option<Locale>,

        /// Feedback style: direction or correctness (overrides config)
        #[arg(long)]
        feedback: Option<FeedbackStyle>,

        /// Show math markup as written instead of rendering it
        #[arg(long)]
        raw_math: bool,

        /// Log file path
        #[arg(long, default_value = "swipe_quiz.log")]
        log_file: std::path::PathBuf,
    },

    /// Load a deck and print a summary of its cards without playing
    Check {
        /// Deck location: a JSON file path or an http(s) URL
        #[arg(short, long, default_value = "cards.json")]
        deck: String,
    },
}
