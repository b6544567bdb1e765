use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use wiki_digest::api::create_router;
use wiki_digest::config::CONFIG;
use wiki_digest::wiki::MediaWikiClient;

#[derive(Debug, Parser)]
#[command(version, about = "Serves short summaries of Wikipedia articles")]
struct Args {
    /// Address to listen on, overrides BIND_ADDR
    #[arg(long)]
    bind: Option<String>,

    /// Wikipedia language edition, overrides WIKI_LANG
    #[arg(long)]
    lang: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber (handles both tracing and log crate)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let args = Args::parse();
    let mut config = CONFIG.clone();
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if let Some(lang) = args.lang {
        config.wiki_lang = lang;
    }

    let client = MediaWikiClient::from_config(&config)?;
    tracing::info!("using MediaWiki API at {}", client.api_url());

    let app = create_router(Arc::new(client));
    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;

    tracing::info!("Wikipedia summary service listening on {}", config.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
