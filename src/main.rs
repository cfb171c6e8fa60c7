//! # wordgrid CLI
//!
//! The `wordgrid` binary harvests word lists from web pages and generates
//! word-search puzzles from them.
//!
//! ## Usage
//!
//! ```bash
//! wordgrid [--config ./wordgrid.toml] <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `wordgrid harvest <url>` | Fetch a page and write its unique lowercase words to a JSON file |
//! | `wordgrid puzzle` | Generate a word-search puzzle from a harvested word list |
//!
//! ## Examples
//!
//! ```bash
//! # Harvest a page into the default output.json
//! wordgrid harvest https://en.wikipedia.org/wiki/Rust
//!
//! # Harvest into a named list, keeping original casing
//! wordgrid harvest https://example.com -o animals.json --case-sensitive
//!
//! # A reproducible 12x12 puzzle with diagonals
//! wordgrid puzzle -i animals.json --width 12 --height 12 --diagonals --seed 42
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use wordgrid::config;
use wordgrid::harvest::{self, HarvestOptions};
use wordgrid::puzzle::{self, PuzzleArgs};

/// wordgrid — harvest word lists from web pages and generate word-search
/// puzzles.
///
/// All commands accept a `--config` flag pointing to a TOML configuration
/// file; every setting has a default, so the file is optional.
#[derive(Parser)]
#[command(
    name = "wordgrid",
    about = "Harvest word lists from web pages and generate word-search puzzles",
    version,
    long_about = "wordgrid fetches a web page, strips its markup down to visible text, and \
    keeps the unique whitespace-delimited tokens made entirely of lowercase ASCII letters as \
    a JSON word list. The puzzle command loads such a list and places a random selection of \
    words onto a letter grid, reproducibly when given a seed."
)]
struct Cli {
    /// Path to configuration file (TOML).
    ///
    /// Defaults to `./wordgrid.toml`. Missing file means built-in defaults;
    /// command-line flags override config values.
    #[arg(long, global = true, default_value = "./wordgrid.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Harvest unique words from a web page into a JSON word list.
    ///
    /// Fetches the page, extracts its visible text (tags, scripts, and
    /// styles excluded), splits on whitespace, and keeps the tokens made
    /// entirely of lowercase ASCII letters. Tokens touching punctuation or
    /// digits are rejected whole, never trimmed. The output file is written
    /// atomically and overwrites any previous list.
    Harvest {
        /// Page URL to fetch (http or https).
        url: String,

        /// Output path for the JSON word list.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Keep original casing: reject tokens containing uppercase letters
        /// instead of lowercasing them first.
        #[arg(long)]
        case_sensitive: bool,

        /// Request timeout in seconds (overrides `fetch.timeout_secs`).
        #[arg(long)]
        timeout_secs: Option<u64>,
    },

    /// Generate a word-search puzzle from a JSON word list.
    ///
    /// Loads the list, draws words at random within the length bounds, and
    /// places them on the grid. Words that fit nowhere are skipped. The
    /// seed printed under the board reproduces the puzzle exactly.
    Puzzle {
        /// Input word list (JSON array of strings). Defaults to the
        /// harvest output path.
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Number of words to draw.
        #[arg(long)]
        words: Option<usize>,

        /// Grid width.
        #[arg(long)]
        width: Option<usize>,

        /// Grid height.
        #[arg(long)]
        height: Option<usize>,

        /// Shortest word to consider.
        #[arg(long)]
        min_length: Option<usize>,

        /// Longest word to consider.
        #[arg(long)]
        max_length: Option<usize>,

        /// Allow words to run right-to-left / bottom-to-top.
        #[arg(long)]
        backwards: bool,

        /// Allow diagonal placement.
        #[arg(long)]
        diagonals: bool,

        /// Seed for a reproducible puzzle (0 picks one at random).
        #[arg(long)]
        seed: Option<u64>,

        /// Highlight the letters of placed words.
        #[arg(long)]
        cheat: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_config(&cli.config)?;

    match cli.command {
        Commands::Harvest {
            url,
            output,
            case_sensitive,
            timeout_secs,
        } => {
            harvest::run_harvest(
                &cfg,
                &HarvestOptions {
                    url,
                    output,
                    case_sensitive,
                    timeout_secs,
                },
            )?;
        }
        Commands::Puzzle {
            input,
            words,
            width,
            height,
            min_length,
            max_length,
            backwards,
            diagonals,
            seed,
            cheat,
        } => {
            puzzle::run_puzzle(
                &cfg,
                &PuzzleArgs {
                    input,
                    words,
                    width,
                    height,
                    min_length,
                    max_length,
                    backwards,
                    diagonals,
                    seed,
                    cheat,
                },
            )?;
        }
    }

    Ok(())
}
