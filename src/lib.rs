//! Wordlist - builds a Scrabble word list from scrabblewordfinder.org.
//!
//! This library provides functionality for:
//! - Scraping the site's category pages into a sorted, deduplicated word list
//! - Looking up words that can be spelled from a set of letters
//! - Serving those lookups over TCP with protobuf messages

pub mod builder;
pub mod config;
pub mod console;
pub mod error;
pub mod extract;
pub mod server;
pub mod solver;
pub mod source;

// Re-export commonly used types
pub use builder::{BASE_URL, OUTPUT_FILE, WordCollection, WordListBuilder};
pub use config::Config;
pub use console::Console;
pub use error::{ConfigError, ScraperError, WordListError};
pub use server::{Server, SolverKind, WordRequest, WordsReply};
pub use solver::{SolveMode, Solver};
pub use source::{HttpSource, PageSource};
