//! Link service
//!
//! Shorten/resolve logic shared by the HTTP handlers. Owns nothing but
//! handles: the index is shared with the server, the response prefix is
//! normalized once when the configuration is loaded.

use std::sync::Arc;

use bytes::Bytes;
use tracing::{debug, info, warn};

use crate::errors::{Result, ShortenerError};
use crate::services::alias::AliasGenerator;
use crate::storage::{IndexWriter, UrlIndex};
use crate::utils::ALIAS_LENGTH;

/// Default number of alias candidates tried before giving up
pub const DEFAULT_MAX_ALIAS_ATTEMPTS: usize = 16;

/// Result of a shorten call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenOutcome {
    pub alias: String,
    /// `<response-prefix>/<alias>`
    pub short_url: String,
    /// `false` when an existing alias was reused
    pub created: bool,
}

pub struct LinkService {
    index: Arc<UrlIndex>,
    generator: Arc<dyn AliasGenerator>,
    response_prefix: String,
    max_alias_attempts: usize,
}

impl LinkService {
    pub fn new(
        index: Arc<UrlIndex>,
        generator: Arc<dyn AliasGenerator>,
        response_prefix: impl Into<String>,
    ) -> Self {
        Self {
            index,
            generator,
            response_prefix: response_prefix.into(),
            max_alias_attempts: DEFAULT_MAX_ALIAS_ATTEMPTS,
        }
    }

    /// Override how many candidates are tried on collision (minimum 1)
    pub fn with_max_alias_attempts(mut self, attempts: usize) -> Self {
        self.max_alias_attempts = attempts.max(1);
        self
    }

    pub fn index(&self) -> &Arc<UrlIndex> {
        &self.index
    }

    pub fn response_prefix(&self) -> &str {
        &self.response_prefix
    }

    /// Compose the public short URL for `alias`
    pub fn short_url(&self, alias: &str) -> String {
        format!("{}/{}", self.response_prefix, alias)
    }

    /// Shorten `url`, reusing the existing alias when there is one.
    ///
    /// The URL is opaque: any byte sequence is stored and handed back as-is.
    pub fn shorten(&self, url: impl Into<Bytes>) -> Result<ShortenOutcome> {
        let url = url.into();

        // 快速路径：只读锁
        if let Some(alias) = self.index.lookup_alias(&url) {
            debug!(
                "Reusing alias '{}' for '{}'",
                alias,
                String::from_utf8_lossy(&url)
            );
            return Ok(self.outcome(alias, false));
        }

        let mut writer = self.index.write();

        // Another request may have inserted the URL between the two locks
        if let Some(alias) = writer.lookup_alias(&url) {
            debug!("Alias '{}' was created concurrently", alias);
            return Ok(self.outcome(alias, false));
        }

        let alias = self.allocate_alias(&writer)?;
        writer.insert(alias.clone(), url.clone());
        drop(writer);

        info!(
            "Created alias '{}' -> '{}'",
            alias,
            String::from_utf8_lossy(&url)
        );
        Ok(self.outcome(alias, true))
    }

    /// Forward lookup for the redirect handler
    pub fn resolve(&self, alias: &str) -> Option<Bytes> {
        self.index.lookup_url(alias)
    }

    /// Pick the first candidate not present in the forward map
    fn allocate_alias(&self, writer: &IndexWriter<'_>) -> Result<String> {
        for attempt in 1..=self.max_alias_attempts {
            let candidate = self.generator.generate(ALIAS_LENGTH);
            if !writer.contains_alias(&candidate) {
                return Ok(candidate);
            }
            warn!(
                "Alias collision on '{}' (attempt {}/{})",
                candidate, attempt, self.max_alias_attempts
            );
        }

        Err(ShortenerError::alias_space_exhausted(format!(
            "No free alias found after {} attempts",
            self.max_alias_attempts
        )))
    }

    fn outcome(&self, alias: String, created: bool) -> ShortenOutcome {
        ShortenOutcome {
            short_url: self.short_url(&alias),
            alias,
            created,
        }
    }
}
