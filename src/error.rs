//! Error types for the word list builder.
//!
//! Uses `thiserror` for structured error definitions that provide
//! clear context about what went wrong.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for fetching and parsing pages.
#[derive(Error, Debug)]
pub enum ScraperError {
    /// HTTP request failed or returned a non-success status
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The server answered 404 for this URL
    #[error("Not found: {0}")]
    NotFound(String),

    /// URL parsing or validation failed
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// A category block on the index page has no `<h3>` heading
    #[error("Category block #{block} has no heading")]
    MissingHeading { block: usize },

    /// A link inside a category block has no `href` attribute
    #[error("Link in category block #{block} has no href")]
    MissingHref { block: usize },
}

/// Error type for reading and writing word list files.
#[derive(Error, Debug)]
pub enum WordListError {
    /// Failed to write the output file
    #[error("Failed to write word list to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read a word list file
    #[error("Failed to read word list from {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error type for configuration operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse config file
    #[error("Failed to parse config: {0}")]
    ParseError(String),

    /// Invalid configuration value
    #[error("Invalid config value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Config directory not found
    #[error("Could not determine config directory")]
    NoConfigDir,
}

/// Result type alias using anyhow for application-level error handling.
pub type Result<T> = anyhow::Result<T>;
