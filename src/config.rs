use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub filter: FilterConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub puzzle: PuzzleConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FetchConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            max_redirects: default_max_redirects(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}
fn default_max_redirects() -> usize {
    10
}
fn default_user_agent() -> String {
    format!("wordgrid/{}", env!("CARGO_PKG_VERSION"))
}

#[derive(Debug, Deserialize, Clone)]
pub struct FilterConfig {
    #[serde(default = "default_case_insensitive")]
    pub case_insensitive: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            case_insensitive: default_case_insensitive(),
        }
    }
}

fn default_case_insensitive() -> bool {
    true
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

fn default_output_path() -> PathBuf {
    PathBuf::from("output.json")
}

#[derive(Debug, Deserialize, Clone)]
pub struct PuzzleConfig {
    #[serde(default = "default_word_count")]
    pub words: usize,
    #[serde(default = "default_dimension")]
    pub width: usize,
    #[serde(default = "default_dimension")]
    pub height: usize,
    #[serde(default = "default_min_length")]
    pub min_length: usize,
    #[serde(default = "default_max_length")]
    pub max_length: usize,
    #[serde(default)]
    pub backwards: bool,
    #[serde(default)]
    pub diagonals: bool,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            words: default_word_count(),
            width: default_dimension(),
            height: default_dimension(),
            min_length: default_min_length(),
            max_length: default_max_length(),
            backwards: false,
            diagonals: false,
        }
    }
}

fn default_word_count() -> usize {
    5
}
fn default_dimension() -> usize {
    10
}
fn default_min_length() -> usize {
    3
}
fn default_max_length() -> usize {
    7
}

/// Load configuration from a TOML file. A missing file is not an error:
/// every setting has a default, so the tool works without any config.
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    // Validate fetch
    if config.fetch.timeout_secs == 0 {
        anyhow::bail!("fetch.timeout_secs must be > 0");
    }

    // Validate puzzle
    if config.puzzle.width == 0 || config.puzzle.height == 0 {
        anyhow::bail!("puzzle.width and puzzle.height must be > 0");
    }

    if config.puzzle.words == 0 {
        anyhow::bail!("puzzle.words must be > 0");
    }

    if config.puzzle.min_length > config.puzzle.max_length {
        anyhow::bail!("puzzle.min_length must be <= puzzle.max_length");
    }

    Ok(config)
}
