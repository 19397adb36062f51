use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use log::error;
use thiserror::Error;

use crate::views::layout;

/// Errors that can occur while talking to the recipe API
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// Transport failure or timeout
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("Unexpected status: {0}")]
    Status(reqwest::StatusCode),

    /// The body was not the JSON shape we expected
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured base URL cannot be joined with an endpoint
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Errors surfaced by the application itself
#[derive(Error, Debug)]
pub enum AppError {
    /// Failure talking to the recipe API outside the search flow
    #[error("Upstream error: {0}")]
    Upstream(#[from] UpstreamError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// No API key in config or environment
    #[error("SPOONACULAR_API_KEY not found in config or environment")]
    MissingApiKey,

    /// Binding or serving failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!("{self}");

        let body = layout::page(
            "Application error",
            r#"<div class="error-boundary">
  <h1>Application error</h1>
  <p>Something went wrong while loading this page.</p>
  <a class="button" href="/">Back to search</a>
</div>"#,
        );

        (StatusCode::INTERNAL_SERVER_ERROR, Html(body)).into_response()
    }
}
