use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::config::SEARCH_LIMIT;
use crate::reducer::{self, char_len};
use crate::wiki::{ArticleSource, PageLookup};

use super::error::ApiError;
use super::models::{
    FailureResponse, HealthResponse, SearchRequest, SummarizeRequest, SummarizeResponse,
    SummaryResult,
};

/// Sentence count of `/random-summary`, which takes no parameters.
const RANDOM_SENTENCES: i64 = 4;

pub type AppState = Arc<dyn ArticleSource>;

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        message: "Wikipedia summary service is running",
    })
}

pub async fn summarize_handler(
    payload: Result<Json<SummarizeRequest>, JsonRejection>,
) -> Result<Json<SummarizeResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| {
        tracing::warn!("rejected summarize body: {e}");
        ApiError::validation("No JSON data found", "Could not create a summary.")
    })?;

    tracing::info!(
        title = %request.title,
        content_length = char_len(&request.content),
        sentences = request.sentences,
        "summary requested"
    );

    if request.content.is_empty() {
        return Err(ApiError::validation(
            "Article content not found",
            "Article content is empty or invalid.",
        ));
    }

    let summary = reducer::reduce(&request.content, request.sentences);
    tracing::info!("summary created: {} characters", char_len(&summary));

    Ok(Json(SummarizeResponse {
        success: true,
        original_length: char_len(&request.content),
        summary_length: char_len(&summary),
        summary,
        sentences_count: request.sentences,
        service_used: "Sentence truncation",
        cost: "free",
    }))
}

pub async fn search_and_summarize_handler(
    State(source): State<AppState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = payload.map_err(|e| {
        tracing::warn!("rejected search body: {e}");
        ApiError::validation("No JSON data found", "Could not create a summary.")
    })?;

    let query = request.query;
    if query.is_empty() {
        return Err(ApiError::validation(
            "Search query not found",
            "Could not create a summary.",
        ));
    }

    tracing::info!("search requested: '{query}'");
    let search_failed = |e| {
        ApiError::unexpected(
            "Error while searching and summarizing",
            "An error occurred during the search. Please try again.",
            e,
        )
    };

    let titles = source
        .search(&query, SEARCH_LIMIT)
        .await
        .map_err(search_failed)?;

    let Some(page_title) = titles.into_iter().next() else {
        return Ok(soft_failure(
            format!("No results found for '{query}'"),
            format!("No information found about '{query}'."),
        ));
    };

    let lookup = source.page(&page_title).await.map_err(search_failed)?;

    match lookup {
        PageLookup::Found(article) => {
            let summary = reducer::reduce(&article.content, request.sentences);
            tracing::info!("page found and summarized: '{page_title}'");
            Ok(Json(SummaryResult::new(&article, summary)).into_response())
        }
        PageLookup::Disambiguation(options) => {
            resolve_disambiguation(source.as_ref(), &query, &options, request.sentences).await
        }
        PageLookup::NotFound => Ok(soft_failure(
            format!("Page for '{query}' not found"),
            format!("No page found about '{query}'."),
        )),
    }
}

/// Retries once with the first candidate of a disambiguation page.
async fn resolve_disambiguation(
    source: &dyn ArticleSource,
    query: &str,
    options: &[String],
    sentences: i64,
) -> Result<Response, ApiError> {
    let unresolved = |reason: String| -> Result<Response, ApiError> {
        tracing::error!("disambiguation could not be resolved: {reason}");
        Ok(soft_failure(
            format!("Could not resolve ambiguity: {reason}"),
            format!("No clear information found about '{query}'."),
        ))
    };

    let Some(first) = options.first() else {
        return unresolved("no candidate pages".to_string());
    };

    match source.page(first).await {
        Ok(PageLookup::Found(article)) => {
            let summary = reducer::reduce(&article.content, sentences);
            tracing::info!("ambiguity resolved, page found: '{}'", article.title);
            let result = SummaryResult::new(&article, summary).resolved_from_disambiguation();
            Ok(Json(result).into_response())
        }
        Ok(PageLookup::Disambiguation(_)) => {
            unresolved(format!("'{first}' is itself a disambiguation page"))
        }
        Ok(PageLookup::NotFound) => unresolved(format!("page '{first}' not found")),
        Err(e) => unresolved(format!("{e:#}")),
    }
}

pub async fn random_summary_handler(
    State(source): State<AppState>,
) -> Result<Json<SummaryResult>, ApiError> {
    let random_failed = |e| {
        ApiError::unexpected(
            "Error summarizing a random article",
            "An error occurred while fetching a random article.",
            e,
        )
    };

    let title = source.random_title().await.map_err(random_failed)?;
    let article = match source.page(&title).await.map_err(random_failed)? {
        PageLookup::Found(article) => article,
        PageLookup::Disambiguation(options) => {
            return Err(random_failed(anyhow::anyhow!(
                "'{title}' is a disambiguation page with {} options",
                options.len()
            )));
        }
        PageLookup::NotFound => {
            return Err(random_failed(anyhow::anyhow!("page '{title}' not found")));
        }
    };

    let summary = reducer::reduce(&article.content, RANDOM_SENTENCES);
    tracing::info!("random article summarized: '{}'", article.title);

    let content = article.content.clone();
    Ok(Json(SummaryResult::new(&article, summary).with_content(content)))
}

/// A failure reported with `200 OK`, kept for compatibility with existing clients.
fn soft_failure(error: String, summary: String) -> Response {
    tracing::info!("soft failure: {error}");
    Json(FailureResponse::new(error, summary)).into_response()
}
