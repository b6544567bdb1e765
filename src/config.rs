use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;
use std::time::Duration;

/// Sentence count used when a request does not ask for one.
pub const DEFAULT_SENTENCES: i64 = 4;

/// How many search hits are requested from the article source.
pub const SEARCH_LIMIT: usize = 5;

pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    dotenv().ok(); // Load .env file if present
    Config {
        bind_addr: get_env_or_default("BIND_ADDR", "0.0.0.0:5001"),
        wiki_lang: get_env_or_default("WIKI_LANG", "tr"),
        wiki_api_url: get_env_opt("WIKI_API_URL"),
        wiki_user_agent: get_env_or_default(
            "WIKI_USER_AGENT",
            concat!("wiki-digest/", env!("CARGO_PKG_VERSION")),
        ),
        wiki_timeout: get_env_opt("WIKI_TIMEOUT_SECS").and_then(|secs| parse_timeout(&secs)),
    }
});

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub wiki_lang: String,
    pub wiki_api_url: Option<String>,
    pub wiki_user_agent: String,
    /// No timeout at all when unset.
    pub wiki_timeout: Option<Duration>,
}

impl Config {
    /// MediaWiki Action API endpoint, either configured explicitly or derived from the language.
    pub fn api_url(&self) -> String {
        match &self.wiki_api_url {
            Some(url) => url.clone(),
            None => format!("https://{}.wikipedia.org/w/api.php", self.wiki_lang),
        }
    }
}

fn get_env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_timeout(secs: &str) -> Option<Duration> {
    match secs.trim().parse::<u64>() {
        Ok(secs) => Some(Duration::from_secs(secs)),
        Err(e) => {
            log::warn!("ignoring WIKI_TIMEOUT_SECS={secs:?}, not a whole number of seconds: {e}");
            None
        }
    }
}

fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
