//! Live lookups against the Wiktionary raw-wikitext endpoint.

use reqwest::blocking::Client;

use super::ContentSource;
use crate::config::{raw_url, DEFAULT_MAX_RESPONSE_SIZE, WIKTIONARY_RAW_URL};
use crate::english::english_content;
use crate::error::Result;
use crate::http::{create_client, download_text};

/// Fetches one entry per lookup and filters it to its English section.
///
/// Network failures degrade to "no entry": the decomposer then keeps the
/// word whole instead of failing. Transient failures are retried inside
/// the HTTP layer before giving up.
pub struct WiktionaryContentSource {
    client: Client,
    base_url: String,
    max_size: u64,
}

impl WiktionaryContentSource {
    /// Create a source pointing at en.wiktionary.org.
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: create_client()?,
            base_url: WIKTIONARY_RAW_URL.to_string(),
            max_size: DEFAULT_MAX_RESPONSE_SIZE,
        })
    }

    /// Point at a different MediaWiki `index.php` endpoint.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the maximum accepted response size in bytes.
    #[must_use]
    pub fn with_max_size(mut self, max_size: u64) -> Self {
        self.max_size = max_size;
        self
    }

    /// Fetch the full, unfiltered wikitext of an entry.
    ///
    /// # Returns
    /// * `Ok(None)` if the page does not exist
    /// * `Err` on network errors after retries
    pub fn fetch_entry(&self, word: &str) -> Result<Option<String>> {
        let url = raw_url(&self.base_url, word)?;
        tracing::debug!(word, url = %url, "Fetching entry");
        download_text(&self.client, &url, self.max_size)
    }
}

impl ContentSource for WiktionaryContentSource {
    fn name(&self) -> &str {
        "wiktionary"
    }

    fn lookup(&self, word: &str) -> Result<Option<String>> {
        match self.fetch_entry(word) {
            Ok(Some(entry)) => english_content(&entry),
            Ok(None) => {
                tracing::debug!(word, "No entry");
                Ok(None)
            }
            Err(e) => {
                tracing::warn!(word, error = %e, "Fetch failed, treating word as absent");
                Ok(None)
            }
        }
    }
}
