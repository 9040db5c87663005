//! http.rs - Remote dictionaries over HTTP(S).
//!
//! License: MIT OR Apache-2.0

use std::time::Duration;

use anyhow::{Context, Result};
use log::debug;

use wordshield_automata::Entry;

use super::{parse_entries, DictFormat, DictSource};
use crate::errors::WordshieldError;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Downloads a dictionary from a URL. The body format follows the
/// extension of the URL path, defaulting to a plain word list; any
/// non-success status is an error.
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    timeout: Duration,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sets the request timeout, consuming and returning the source.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The URL this source downloads from.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl DictSource for HttpSource {
    fn load(&self) -> Result<Vec<Entry>> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .context("failed to build HTTP client")?;
        let response = client
            .get(&self.url)
            .send()
            .with_context(|| format!("failed to fetch dictionary from {}", self.url))?;
        if !response.status().is_success() {
            return Err(WordshieldError::HttpStatus {
                url: self.url.clone(),
                status: response.status().as_u16(),
            }
            .into());
        }
        let body = response
            .text()
            .with_context(|| format!("failed to read dictionary body from {}", self.url))?;

        // The format is decided by the URL path, not the query string.
        let path_part = self.url.split(['?', '#']).next().unwrap_or(&self.url);
        let format = DictFormat::from_extension(path_part);
        let entries = parse_entries(&body, format, &self.url)?;
        debug!("loaded {} entries from {}", entries.len(), self.url);
        Ok(entries)
    }
}
