use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use log::{error, info};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal;

use crate::cache::CachedUpstream;
use crate::config::ServerConfig;
use crate::error::AppError;
use crate::upstream::{SpoonacularClient, Upstream};
use crate::views::{detail, results, SearchForm, SearchParams};

/// State shared by all handlers
#[derive(Clone)]
pub struct AppState {
    upstream: Arc<dyn Upstream>,
}

impl AppState {
    pub fn new(upstream: impl Upstream + 'static) -> Self {
        Self {
            upstream: Arc::new(upstream),
        }
    }

    /// Spoonacular client behind the response cache, as configured
    pub fn from_config(config: &ServerConfig) -> Result<Self, AppError> {
        let api_key = config.resolve_api_key()?;
        let client = SpoonacularClient::from_config(config, api_key)?;
        let ttl = Duration::from_secs(config.cache_ttl);

        Ok(Self::new(CachedUpstream::new(client, ttl)))
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(search_page))
        .route("/search", post(submit_search))
        .route("/recipes", get(results_page))
        .route("/recipes/:id", get(detail_page))
        .with_state(state)
}

async fn search_page() -> Html<String> {
    Html(SearchForm::new().render())
}

async fn submit_search(Form(fields): Form<Vec<(String, String)>>) -> Response {
    let form = SearchForm::from_submission(fields);

    match form.submit() {
        Some(target) => Redirect::to(&target).into_response(),
        None => Html(form.render()).into_response(),
    }
}

async fn results_page(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Html<String> {
    let params = SearchParams::from_pairs(pairs);
    let outcome = results::search(state.upstream.as_ref(), &params).await;
    Html(results::render(&outcome))
}

async fn detail_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let recipe = detail::load(state.upstream.as_ref(), &id).await?;
    Ok(Html(detail::render(&recipe)))
}

/// Bind and serve until Ctrl+C or SIGTERM
pub async fn serve(config: &ServerConfig) -> Result<(), AppError> {
    let state = AppState::from_config(config)?;
    let app = router(state);

    info!("Binding to {}", config.bind_address);
    let listener = TcpListener::bind(&config.bind_address).await?;
    info!("Server running on {}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
