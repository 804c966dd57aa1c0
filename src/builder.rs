//! The word list pipeline.
//!
//! Fetch the index, collect category links, fetch every category page,
//! merge the words, write them sorted. Any failure aborts the whole run
//! before the output file is touched.

use crate::console::Console;
use crate::error::{ScraperError, WordListError};
use crate::extract::{Selectors, extract_category_links, extract_words};
use crate::source::PageSource;
use scraper::Html;
use std::collections::BTreeSet;
use std::path::Path;

/// Site the words are scraped from.
pub const BASE_URL: &str = "https://scrabblewordfinder.org";

/// Path of the index page, relative to [`BASE_URL`].
pub const INDEX_PATH: &str = "word-list";

/// File the word list is written to, in the working directory.
pub const OUTPUT_FILE: &str = "wordlist.txt";

/// Every unique word gathered during a run, kept in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCollection {
    words: BTreeSet<String>,
}

impl WordCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the words found on one page.
    pub fn merge(&mut self, words: BTreeSet<String>) {
        self.words.extend(words);
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Words in ascending byte order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// One word per line, sorted. The last line has no terminator.
    pub fn render(&self) -> String {
        self.iter().collect::<Vec<_>>().join("\n")
    }

    /// Writes the rendered list to `path`, replacing any existing file.
    pub async fn write_to(&self, path: &Path) -> Result<(), WordListError> {
        tokio::fs::write(path, self.render())
            .await
            .map_err(|source| WordListError::Write {
                path: path.to_path_buf(),
                source,
            })
    }
}

impl FromIterator<String> for WordCollection {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}

/// Scrapes the word-list site into a [`WordCollection`].
pub struct WordListBuilder<S> {
    source: S,
    console: Console,
    selectors: Selectors,
    base_url: String,
}

impl<S: PageSource> WordListBuilder<S> {
    /// Creates a builder for the public site.
    pub fn new(source: S, console: Console) -> Self {
        Self::with_base_url(source, console, BASE_URL)
    }

    fn with_base_url(source: S, console: Console, base_url: &str) -> Self {
        Self {
            source,
            console,
            selectors: Selectors::new(),
            base_url: base_url.to_string(),
        }
    }

    /// Absolute URL of the index page.
    pub fn index_url(&self) -> String {
        format!("{}/{}", self.base_url, INDEX_PATH)
    }

    /// Fetches the index page and returns the category page URLs on it.
    pub async fn category_links(&self) -> Result<Vec<String>, ScraperError> {
        let text = self.source.fetch(&self.index_url()).await?;
        let doc = Html::parse_document(&text);
        extract_category_links(&doc, &self.selectors, &self.base_url)
    }

    /// Fetches one category page and returns the unique words on it.
    pub async fn words_from_page(&self, url: &str) -> Result<BTreeSet<String>, ScraperError> {
        let text = self.source.fetch(url).await?;
        let doc = Html::parse_document(&text);
        Ok(extract_words(&doc, &self.selectors))
    }

    /// Gathers the words of every category page, one page at a time.
    pub async fn collect(&self) -> Result<WordCollection, ScraperError> {
        let links = self.category_links().await?;
        let mut collection = WordCollection::new();

        for link in &links {
            self.console.line(&format!("Gathering from {}", link));
            collection.merge(self.words_from_page(link).await?);
        }

        Ok(collection)
    }

    /// Collects every word and writes the sorted list to `path`.
    ///
    /// The file is only created once collection succeeded.
    pub async fn run(&self, path: &Path) -> crate::error::Result<WordCollection> {
        let collection = self.collect().await?;
        collection.write_to(path).await?;
        Ok(collection)
    }
}
