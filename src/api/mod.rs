use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use std::any::Any;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{self, CorsLayer},
    trace::TraceLayer,
};

pub mod error;
pub mod handlers;
pub mod models;

pub use handlers::AppState;

use models::FailureResponse;

pub fn create_router(source: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(cors::Any)
        .allow_methods(cors::Any)
        .allow_headers(cors::Any);

    Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/summarize", post(handlers::summarize_handler))
        .route(
            "/search-and-summarize",
            post(handlers::search_and_summarize_handler),
        )
        .route("/random-summary", get(handlers::random_summary_handler))
        .with_state(source)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    tracing::error!("handler panicked: {detail}");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(FailureResponse::new(
            format!("Internal error: {detail}"),
            "This summary is not available right now. Please try again later.",
        )),
    )
        .into_response()
}
