//! Harvest pipeline orchestration.
//!
//! Coordinates the full flow: fetch → visible text → word filter → atomic
//! write. One-shot and linear; any failure aborts the run with the output
//! file untouched.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::config::Config;
use crate::fetch;
use crate::html;
use crate::wordlist;
use crate::words;

/// Options for one harvest run, resolved from CLI arguments. `None` fields
/// fall back to configuration.
#[derive(Debug, Clone)]
pub struct HarvestOptions {
    pub url: String,
    pub output: Option<PathBuf>,
    pub case_sensitive: bool,
    pub timeout_secs: Option<u64>,
}

pub fn run_harvest(config: &Config, options: &HarvestOptions) -> Result<()> {
    let mut fetch_config = config.fetch.clone();
    if let Some(secs) = options.timeout_secs {
        fetch_config.timeout_secs = secs;
    }

    let case_insensitive = effective_case_insensitive(config, options);

    let output = options
        .output
        .clone()
        .unwrap_or_else(|| config.output.path.clone());

    let body = fetch::fetch_page(&options.url, &fetch_config)
        .with_context(|| format!("failed to fetch {}", options.url))?;

    let text = html::visible_text(&body);
    let found = words::collect_words(&text, case_insensitive);

    wordlist::save_words(&output, &found)?;

    println!("harvest {}", options.url);
    println!("  bytes fetched: {}", body.len());
    println!("  unique words: {}", found.len());
    println!("  wrote: {}", output.display());
    println!("ok");

    Ok(())
}

/// The stricter setting wins: either the `--case-sensitive` flag or the
/// config file can switch the filter to case-sensitive, and neither can
/// re-enable folding the other disabled.
fn effective_case_insensitive(config: &Config, options: &HarvestOptions) -> bool {
    config.filter.case_insensitive && !options.case_sensitive
}
