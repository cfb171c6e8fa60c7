//! Word-search puzzle generation.
//!
//! Picks words at random from a pool and places them on a letter grid —
//! horizontally, vertically, or diagonally, optionally reversed — allowing
//! overlaps where letters agree, then fills the remaining cells with random
//! letters. Identical options, word list, and seed reproduce the identical
//! puzzle.

use anyhow::{bail, Result};
use colored::Colorize;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;

use crate::config::Config;
use crate::wordlist;

/// Columns used when listing the placed words.
const WORD_COLUMNS: usize = 4;

/// Direction a placed word runs in. Placement always advances toward the
/// bottom-right; backwards words are reversed before placement instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Horizontal,
    Vertical,
    Diagonal,
}

impl Direction {
    fn step(self) -> (usize, usize) {
        match self {
            Direction::Horizontal => (1, 0),
            Direction::Vertical => (0, 1),
            Direction::Diagonal => (1, 1),
        }
    }
}

/// Board configuration for one puzzle.
#[derive(Debug, Clone)]
pub struct PuzzleOptions {
    pub word_count: usize,
    pub width: usize,
    pub height: usize,
    pub min_word_length: usize,
    pub max_word_length: usize,
    pub allow_backwards: bool,
    pub allow_diagonals: bool,
    /// 0 means "derive from entropy"; the effective seed is always reported.
    pub seed: u64,
    pub cheat: bool,
}

#[derive(Debug, Clone, Copy, Default)]
struct Cell {
    /// Letter byte, 0 while the cell is still empty.
    letter: u8,
    /// Whether the letter belongs to a placed word.
    placed: bool,
}

/// A generated puzzle: the filled grid plus the words that were placed.
#[derive(Debug)]
pub struct Puzzle {
    grid: Vec<Vec<Cell>>,
    words: Vec<String>,
    seed: u64,
    cheat: bool,
    max_word_length: usize,
}

/// Generate a puzzle from `word_pool` using `options`.
///
/// Each of `word_count` draws consumes one candidate; a drawn word that fits
/// nowhere is skipped, never partially written. Candidates are the pool
/// entries within the length bounds that are entirely lowercase ASCII.
pub fn generate(word_pool: &[String], mut options: PuzzleOptions) -> Result<Puzzle> {
    validate(&options)?;

    if options.seed == 0 {
        options.seed = rand::rng().random();
    }
    let mut rng = StdRng::seed_from_u64(options.seed);

    let mut candidates: Vec<&str> = word_pool
        .iter()
        .map(String::as_str)
        .filter(|w| (options.min_word_length..=options.max_word_length).contains(&w.len()))
        .filter(|w| w.chars().all(|c| c.is_ascii_lowercase()))
        .collect();

    if candidates.is_empty() {
        bail!(
            "no usable words between {} and {} letters in the list",
            options.min_word_length,
            options.max_word_length
        );
    }

    let mut grid = vec![vec![Cell::default(); options.width]; options.height];
    let mut placed = Vec::new();

    for _ in 0..options.word_count {
        if candidates.is_empty() {
            break;
        }

        let word = candidates.swap_remove(rng.random_range(0..candidates.len()));

        let board_word: String = if options.allow_backwards && rng.random_bool(0.5) {
            word.chars().rev().collect()
        } else {
            word.to_string()
        };

        let spots = open_spots(&grid, &options, board_word.as_bytes());
        if spots.is_empty() {
            continue;
        }

        let (x, y, direction) = spots[rng.random_range(0..spots.len())];
        place(&mut grid, board_word.as_bytes(), x, y, direction);
        placed.push(word.to_string());
    }

    for row in grid.iter_mut() {
        for cell in row.iter_mut() {
            if cell.letter == 0 {
                cell.letter = rng.random_range(b'a'..=b'z');
            }
        }
    }

    placed.sort();

    Ok(Puzzle {
        grid,
        words: placed,
        seed: options.seed,
        cheat: options.cheat,
        max_word_length: options.max_word_length,
    })
}

fn validate(options: &PuzzleOptions) -> Result<()> {
    if options.width < 1 || options.height < 1 {
        bail!("invalid board dimensions: {}x{}", options.width, options.height);
    }
    if options.word_count < 1 {
        bail!("word count must be at least 1");
    }
    if options.min_word_length > options.max_word_length {
        bail!(
            "min word length {} exceeds max word length {}",
            options.min_word_length,
            options.max_word_length
        );
    }
    if options.max_word_length > options.width && options.max_word_length > options.height {
        bail!(
            "max word length {} does not fit a {}x{} board",
            options.max_word_length,
            options.width,
            options.height
        );
    }
    Ok(())
}

/// Every position and direction where `word` fits: each stepped-over cell is
/// either empty or already holds the matching letter.
fn open_spots(
    grid: &[Vec<Cell>],
    options: &PuzzleOptions,
    word: &[u8],
) -> Vec<(usize, usize, Direction)> {
    let mut directions = vec![Direction::Horizontal, Direction::Vertical];
    if options.allow_diagonals {
        directions.push(Direction::Diagonal);
    }

    let mut spots = Vec::new();
    for direction in directions {
        let (dx, dy) = direction.step();
        let span_x = if dx == 1 { word.len() } else { 1 };
        let span_y = if dy == 1 { word.len() } else { 1 };
        if span_x > options.width || span_y > options.height {
            continue;
        }

        for x in 0..=options.width - span_x {
            for y in 0..=options.height - span_y {
                let fits = word.iter().enumerate().all(|(i, &ch)| {
                    let cell = grid[y + i * dy][x + i * dx];
                    cell.letter == 0 || cell.letter == ch
                });
                if fits {
                    spots.push((x, y, direction));
                }
            }
        }
    }
    spots
}

fn place(grid: &mut [Vec<Cell>], word: &[u8], x: usize, y: usize, direction: Direction) {
    let (dx, dy) = direction.step();
    for (i, &ch) in word.iter().enumerate() {
        grid[y + i * dy][x + i * dx] = Cell {
            letter: ch,
            placed: true,
        };
    }
}

impl Puzzle {
    /// Seed that reproduces this puzzle.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Placed words, sorted.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Grid rows as plain strings, top to bottom.
    pub fn rows(&self) -> Vec<String> {
        self.grid
            .iter()
            .map(|row| row.iter().map(|c| c.letter as char).collect())
            .collect()
    }

    /// Print the board. In cheat mode, letters belonging to placed words are
    /// highlighted.
    pub fn print(&self) {
        for row in &self.grid {
            for cell in row {
                let s = format!("{} ", cell.letter as char);
                if self.cheat && cell.placed {
                    print!("{}", s.yellow());
                } else {
                    print!("{}", s);
                }
            }
            println!();
        }
    }

    /// Print the placed words in padded columns, followed by the seed.
    pub fn print_words(&self, columns: usize) {
        let col_width = self.max_word_length + 1;
        println!();
        println!("{}", format!("{} Words", self.words.len()).underline());
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 && i % columns == 0 {
                println!();
            }
            print!("{:<width$}", word, width = col_width);
        }
        println!();
        println!("{}", format!("Seed: {}", self.seed).yellow());
    }
}

/// Options for one puzzle run, resolved from CLI arguments. `None` fields
/// fall back to configuration.
#[derive(Debug, Clone, Default)]
pub struct PuzzleArgs {
    pub input: Option<PathBuf>,
    pub words: Option<usize>,
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub backwards: bool,
    pub diagonals: bool,
    pub seed: Option<u64>,
    pub cheat: bool,
}

pub fn run_puzzle(config: &Config, args: &PuzzleArgs) -> Result<()> {
    let input = args
        .input
        .clone()
        .unwrap_or_else(|| config.output.path.clone());
    let pool = wordlist::load_words(&input)?;

    let options = PuzzleOptions {
        word_count: args.words.unwrap_or(config.puzzle.words),
        width: args.width.unwrap_or(config.puzzle.width),
        height: args.height.unwrap_or(config.puzzle.height),
        min_word_length: args.min_length.unwrap_or(config.puzzle.min_length),
        max_word_length: args.max_length.unwrap_or(config.puzzle.max_length),
        allow_backwards: args.backwards || config.puzzle.backwards,
        allow_diagonals: args.diagonals || config.puzzle.diagonals,
        seed: args.seed.unwrap_or(0),
        cheat: args.cheat,
    };

    let puzzle = generate(&pool, options)?;
    puzzle.print();
    puzzle.print_words(WORD_COLUMNS);
    Ok(())
}
