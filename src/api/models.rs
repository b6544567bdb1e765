use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_SENTENCES;
use crate::reducer::char_len;
use crate::wiki::Article;

#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub title: String,
    #[serde(default = "default_sentences")]
    pub sentences: i64,
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: String,
    #[serde(default = "default_sentences")]
    pub sentences: i64,
}

fn default_sentences() -> i64 {
    DEFAULT_SENTENCES
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SummarizeResponse {
    pub success: bool,
    pub summary: String,
    pub original_length: usize,
    pub summary_length: usize,
    pub sentences_count: i64,
    pub service_used: &'static str,
    pub cost: &'static str,
}

/// Summary of an article pulled from the article source.
#[derive(Debug, Serialize)]
pub struct SummaryResult {
    pub success: bool,
    pub title: String,
    pub summary: String,
    pub url: String,
    /// Only the random endpoint echoes the full text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub original_length: usize,
    pub summary_length: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disambiguation_resolved: Option<bool>,
}

impl SummaryResult {
    pub fn new(article: &Article, summary: String) -> SummaryResult {
        SummaryResult {
            success: true,
            title: article.title.clone(),
            url: article.url.clone(),
            content: None,
            original_length: char_len(&article.content),
            summary_length: char_len(&summary),
            summary,
            disambiguation_resolved: None,
        }
    }

    pub fn with_content(mut self, content: String) -> SummaryResult {
        self.content = Some(content);
        self
    }

    pub fn resolved_from_disambiguation(mut self) -> SummaryResult {
        self.disambiguation_resolved = Some(true);
        self
    }
}

/// Body of every failed request, whatever its status code.
#[derive(Debug, Serialize)]
pub struct FailureResponse {
    pub error: String,
    pub summary: String,
}

impl FailureResponse {
    pub fn new(error: impl Into<String>, summary: impl Into<String>) -> FailureResponse {
        FailureResponse {
            error: error.into(),
            summary: summary.into(),
        }
    }
}
