use std::collections::HashMap;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use scraper::{Html, Selector};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::config::Config;

use super::{Article, ArticleSource, PageLookup, WikiError};

/// [`ArticleSource`] backed by the MediaWiki Action API.
#[derive(Debug, Clone)]
pub struct MediaWikiClient {
    http: reqwest::Client,
    api_url: String,
}

impl MediaWikiClient {
    pub fn new(api_url: &str, user_agent: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            api_url: api_url.to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            &config.api_url(),
            &config.wiki_user_agent,
            config.wiki_timeout,
        )
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    async fn get(&self, action: &str, params: &[(&str, &str)]) -> Result<String, WikiError> {
        let res = self
            .http
            .get(&self.api_url)
            .query(&[("action", action), ("format", "json"), ("formatversion", "2")])
            .query(params)
            .send()
            .await?
            .error_for_status()?;
        Ok(res.text().await?)
    }

    async fn query<T: DeserializeOwned>(&self, params: &[(&str, &str)]) -> Result<T, WikiError> {
        let body = self.get("query", params).await?;
        parse_query(&body)
    }

    /// Candidate titles of a disambiguation page, in the order the page lists them.
    async fn disambiguation_options(&self, title: &str) -> Result<Vec<String>, WikiError> {
        let body = self
            .get(
                "parse",
                &[("prop", "text"), ("redirects", "1"), ("page", title)],
            )
            .await?;
        let html = parse_rendered_text(&body)?;
        candidate_titles(&html)
    }
}

#[async_trait]
impl ArticleSource for MediaWikiClient {
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<String>> {
        let limit = limit.to_string();
        let found: SearchQuery = self
            .query(&[
                ("list", "search"),
                ("srprop", ""),
                ("srlimit", limit.as_str()),
                ("srsearch", query),
            ])
            .await
            .with_context(|| format!("searching for '{query}'"))?;

        log::debug!("search '{query}' returned {} titles", found.search.len());
        Ok(found.search.into_iter().map(|e| e.title).collect())
    }

    async fn page(&self, title: &str) -> Result<PageLookup> {
        let pages: PagesQuery = self
            .query(&[
                ("prop", "extracts|info|pageprops"),
                ("explaintext", "1"),
                ("inprop", "url"),
                ("ppprop", "disambiguation"),
                ("redirects", "1"),
                ("titles", title),
            ])
            .await
            .with_context(|| format!("fetching page '{title}'"))?;

        let Some(entry) = pages.pages.into_iter().next() else {
            return Ok(PageLookup::NotFound);
        };

        match classify(entry) {
            Resolved::Missing => Ok(PageLookup::NotFound),
            Resolved::Article(article) => Ok(PageLookup::Found(article)),
            Resolved::Disambiguation(resolved_title) => {
                log::info!("'{title}' is a disambiguation page, listing options");
                let options = self
                    .disambiguation_options(&resolved_title)
                    .await
                    .with_context(|| format!("listing options of '{resolved_title}'"))?;
                Ok(PageLookup::Disambiguation(options))
            }
        }
    }

    async fn random_title(&self) -> Result<String> {
        let random: RandomQuery = self
            .query(&[("list", "random"), ("rnnamespace", "0"), ("rnlimit", "1")])
            .await
            .context("fetching a random title")?;

        random
            .random
            .into_iter()
            .next()
            .map(|e| e.title)
            .ok_or_else(|| WikiError::Malformed("random list is empty".to_string()).into())
    }
}

// =============================================================================
// Wire types (formatversion=2)
// =============================================================================

#[derive(Deserialize, Debug)]
struct Envelope<T> {
    error: Option<ApiErrorBody>,
    query: Option<T>,
}

#[derive(Deserialize, Debug)]
struct ApiErrorBody {
    code: String,
    #[serde(default)]
    info: String,
}

#[derive(Deserialize, Debug)]
struct TitleEntry {
    title: String,
}

#[derive(Deserialize, Debug)]
struct SearchQuery {
    #[serde(default)]
    search: Vec<TitleEntry>,
}

#[derive(Deserialize, Debug)]
struct RandomQuery {
    #[serde(default)]
    random: Vec<TitleEntry>,
}

#[derive(Deserialize, Debug)]
struct PagesQuery {
    #[serde(default)]
    pages: Vec<PageEntry>,
}

#[derive(Deserialize, Debug)]
struct PageEntry {
    #[serde(default)]
    title: String,
    #[serde(default)]
    missing: bool,
    #[serde(default)]
    invalid: bool,
    extract: Option<String>,
    fullurl: Option<String>,
    #[serde(default)]
    pageprops: HashMap<String, serde_json::Value>,
}

#[derive(Deserialize, Debug)]
struct ParseEnvelope {
    error: Option<ApiErrorBody>,
    parse: Option<ParsedPage>,
}

#[derive(Deserialize, Debug)]
struct ParsedPage {
    #[serde(default)]
    text: String,
}

#[derive(Debug, PartialEq)]
enum Resolved {
    Missing,
    Disambiguation(String),
    Article(Article),
}

fn parse_query<T: DeserializeOwned>(body: &str) -> Result<T, WikiError> {
    let envelope: Envelope<T> = serde_json::from_str(body)?;
    if let Some(err) = envelope.error {
        return Err(WikiError::Api {
            code: err.code,
            info: err.info,
        });
    }
    envelope
        .query
        .ok_or_else(|| WikiError::Malformed("response has no query object".to_string()))
}

fn parse_rendered_text(body: &str) -> Result<String, WikiError> {
    let envelope: ParseEnvelope = serde_json::from_str(body)?;
    if let Some(err) = envelope.error {
        return Err(WikiError::Api {
            code: err.code,
            info: err.info,
        });
    }
    envelope
        .parse
        .map(|p| p.text)
        .ok_or_else(|| WikiError::Malformed("response has no parse object".to_string()))
}

/// First link of every list item, skipping table-of-contents entries and links to
/// pages that do not exist.
fn candidate_titles(html: &str) -> Result<Vec<String>, WikiError> {
    let li_selector = Selector::parse("li").map_err(|e| WikiError::Malformed(e.to_string()))?;
    let a_selector = Selector::parse("a").map_err(|e| WikiError::Malformed(e.to_string()))?;
    let document = Html::parse_fragment(html);

    let mut titles = Vec::new();
    for li in document.select(&li_selector) {
        if li.value().classes().any(|c| c.contains("tocsection")) {
            continue;
        }
        let Some(link) = li.select(&a_selector).next() else {
            continue;
        };
        if link.value().classes().any(|c| c == "new") {
            continue;
        }
        let title = match link.value().attr("title") {
            Some(title) => title.trim().to_string(),
            None => link.text().collect::<String>().trim().to_string(),
        };
        if !title.is_empty() {
            titles.push(title);
        }
    }
    Ok(titles)
}

fn classify(entry: PageEntry) -> Resolved {
    if entry.missing || entry.invalid {
        return Resolved::Missing;
    }
    if entry.pageprops.contains_key("disambiguation") {
        return Resolved::Disambiguation(entry.title);
    }
    Resolved::Article(Article {
        content: entry.extract.unwrap_or_default(),
        url: entry.fullurl.unwrap_or_default(),
        title: entry.title,
    })
}
