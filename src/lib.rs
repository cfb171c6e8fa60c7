//! # wordgrid
//!
//! A word-search puzzle toolkit: harvest word lists from web pages and
//! generate puzzles from them.
//!
//! The harvest side fetches a page, strips its markup down to visible text,
//! and keeps the unique whitespace-delimited tokens made entirely of
//! lowercase ASCII letters, written out as a JSON array. The puzzle side
//! loads such a list and places a random selection of the words onto a
//! letter grid, with reproducible seeding.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────┐   ┌──────────────┐   ┌────────────┐   ┌────────────┐
//! │  fetch   │──▶│ visible text │──▶│ word filter │──▶│ words.json │
//! │ (HTTP)   │   │  (html)      │   │  (words)    │   │ (wordlist) │
//! └─────────┘   └──────────────┘   └────────────┘   └─────┬──────┘
//!                                                         │
//!                                                         ▼
//!                                                   ┌────────────┐
//!                                                   │   puzzle    │
//!                                                   │ (grid gen)  │
//!                                                   └────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! wordgrid harvest https://example.com/article     # write output.json
//! wordgrid puzzle --seed 42 --diagonals            # puzzle from output.json
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`fetch`] | Blocking HTTP page fetcher |
//! | [`html`] | HTML-to-visible-text extraction |
//! | [`words`] | Tokenization and the lowercase-word filter |
//! | [`wordlist`] | JSON word-list persistence |
//! | [`harvest`] | Harvest pipeline orchestration |
//! | [`puzzle`] | Word-search puzzle generation |

pub mod config;
pub mod fetch;
pub mod harvest;
pub mod html;
pub mod puzzle;
pub mod wordlist;
pub mod words;
