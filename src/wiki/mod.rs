use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod client;

pub use client::MediaWikiClient;

/// A fully resolved article.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub content: String,
    pub url: String,
}

impl Article {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        url: impl Into<String>,
    ) -> Article {
        Article {
            title: title.into(),
            content: content.into(),
            url: url.into(),
        }
    }
}

/// Outcome of fetching a page by title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageLookup {
    Found(Article),
    /// The title names a disambiguation page; holds the candidate titles in the order
    /// the page lists them.
    Disambiguation(Vec<String>),
    NotFound,
}

/// The encyclopedia backend the handlers talk to.
///
/// Ambiguous and missing pages are ordinary [`PageLookup`] values; `Err` is
/// reserved for transport and protocol failures.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Titles matching `query`, best match first, at most `limit` of them.
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<String>>;

    async fn page(&self, title: &str) -> Result<PageLookup>;

    async fn random_title(&self) -> Result<String>;
}

#[derive(Debug, Error)]
pub enum WikiError {
    #[error("request to MediaWiki API failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("MediaWiki API returned error {code}: {info}")]
    Api { code: String, info: String },

    #[error("malformed MediaWiki response: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for WikiError {
    fn from(error: serde_json::Error) -> Self {
        WikiError::Malformed(error.to_string())
    }
}
