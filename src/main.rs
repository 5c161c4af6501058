//! seismo-deck CLI
//!
//! Present a slide deck in the terminal, or inspect it from the
//! command line without entering the TUI.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use seismo_deck::deck::{builtin_deck, lint, load_deck};
use seismo_deck::outline::format_outline;
use seismo_deck::tui;
use seismo_deck::types::{Deck, OutputFormat};

#[derive(Parser)]
#[command(name = "seismo-deck")]
#[command(about = "Terminal slide-deck presenter with quizzes and charts")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the presentation (built-in ground-motion deck by default)
    Present {
        /// Path to a deck JSON file
        deck: Option<PathBuf>,
    },

    /// Print the table of contents without presenting
    Toc {
        /// Path to a deck JSON file
        deck: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },

    /// Validate a deck and report authoring issues
    Check {
        /// Path to a deck JSON file
        deck: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Present { deck } => cmd_present(deck),
        Commands::Toc { deck, format } => cmd_toc(deck, format.into()),
        Commands::Check { deck } => cmd_check(deck),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// DECK RESOLUTION
// ============================================================================

/// Resolve a deck: load the given file, or fall back to the built-in
/// lecture.
fn resolve_deck(path: Option<PathBuf>) -> Result<Deck, String> {
    match path {
        Some(p) => load_deck(&p).map_err(|e| e.to_string()),
        None => Ok(builtin_deck()),
    }
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_present(path: Option<PathBuf>) -> Result<(), String> {
    let deck = resolve_deck(path)?;
    tui::run::run(deck).map_err(|e| e.to_string())
}

fn cmd_toc(path: Option<PathBuf>, format: OutputFormat) -> Result<(), String> {
    let deck = resolve_deck(path)?;
    print!("{}", format_outline(&deck, format));
    Ok(())
}

fn cmd_check(path: Option<PathBuf>) -> Result<(), String> {
    let deck = resolve_deck(path)?;

    let warnings = lint(&deck);
    for warning in &warnings {
        println!("Warning: {}", warning);
    }

    let quiz_count = deck.all_quizzes().len();
    let chart_count: usize = (0..deck.total_slides())
        .map(|i| deck.charts_on(i).len())
        .sum();

    if warnings.is_empty() {
        println!(
            "Deck OK: {} slides, {} quizzes, {} charts.",
            deck.total_slides(),
            quiz_count,
            chart_count
        );
    } else {
        println!(
            "Deck loads with {} warning{}.",
            warnings.len(),
            if warnings.len() == 1 { "" } else { "s" }
        );
    }

    Ok(())
}
