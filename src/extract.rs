//! Markup extraction for the word-list site.
//!
//! The index page groups category links into `.result` blocks, each
//! headed by an `<h3>`. Category pages wrap every word in a
//! `.wordWrapper` element.

use crate::error::ScraperError;
use scraper::{Html, Selector};
use std::collections::BTreeSet;

/// Heading of the first category that is never scraped. Everything from it on is skipped.
const OTHERS_HEADING: &str = "others";

/// CSS selectors used for parsing.
pub struct Selectors {
    /// Category block on the index page.
    result: Selector,
    /// Category heading inside a block.
    heading: Selector,
    /// Category page link inside a block.
    link: Selector,
    /// Word element on a category page.
    word: Selector,
}

impl Selectors {
    pub fn new() -> Self {
        Self {
            result: Selector::parse(".result").unwrap(),
            heading: Selector::parse("h3").unwrap(),
            link: Selector::parse("a").unwrap(),
            word: Selector::parse(".wordWrapper").unwrap(),
        }
    }
}

impl Default for Selectors {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves a category href against the site's base URL.
///
/// Hrefs that already start with `base` are returned unchanged, anything
/// else is appended to `base` after a single `/`.
pub fn resolve_link(base: &str, href: &str) -> String {
    if href.starts_with(base) {
        href.to_string()
    } else {
        format!("{}/{}", base, href)
    }
}

/// Collects the category page links from the index page, in document order.
///
/// Stops at the first block headed "others" (case-insensitive) and ignores
/// every block after it. A block without a heading, or a link without an
/// `href`, aborts extraction.
pub fn extract_category_links(
    doc: &Html,
    selectors: &Selectors,
    base: &str,
) -> Result<Vec<String>, ScraperError> {
    let mut links = Vec::new();

    for (block, result) in doc.select(&selectors.result).enumerate() {
        let heading = result
            .select(&selectors.heading)
            .next()
            .ok_or(ScraperError::MissingHeading { block })?;

        let title = heading.text().collect::<String>();
        if title.trim().to_lowercase() == OTHERS_HEADING {
            break;
        }

        for anchor in result.select(&selectors.link) {
            let href = anchor
                .value()
                .attr("href")
                .ok_or(ScraperError::MissingHref { block })?;
            links.push(resolve_link(base, href));
        }
    }

    Ok(links)
}

/// Collects the trimmed text of every word element on a category page.
pub fn extract_words(doc: &Html, selectors: &Selectors) -> BTreeSet<String> {
    doc.select(&selectors.word)
        .map(|elem| elem.text().collect::<String>().trim().to_string())
        .collect()
}
