//! # API REST
//!
//! REST API implementation for precis.
//!
//! Handles:
//! - The browser form (`GET /`, `POST /summarize`) with HTML result pages
//! - A JSON summarisation endpoint for programmatic use
//! - Serving rendered charts from the static directory
//! - OpenAPI/Swagger documentation, CORS and request tracing
//!
//! Summarisation itself lives in `precis-core`; chart images in `precis-charts`.

#![warn(rust_2018_idioms)]

pub mod error;
mod handlers;
pub mod pages;

pub use error::ApiError;

use axum::{
    routing::{get, post},
    Router,
};
use precis_charts::{ChartRenderer, ChartStore};
use precis_core::{CoreConfig, Summariser};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// URL prefix the chart store root is served under.
pub const CHARTS_URL: &str = "/static/charts";

/// Application state shared across REST handlers
///
/// Everything here is resolved once at startup. The chart store is the only component with
/// interior mutability.
#[derive(Clone)]
pub struct AppState {
    cfg: Arc<CoreConfig>,
    summariser: Arc<Summariser>,
    renderer: Arc<dyn ChartRenderer>,
    store: Arc<ChartStore>,
}

impl AppState {
    /// Builds the state, opening the chart store under the configured static directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the chart directory cannot be created or cleaned.
    pub fn new(cfg: Arc<CoreConfig>, renderer: Arc<dyn ChartRenderer>) -> anyhow::Result<Self> {
        let store = ChartStore::open(&cfg.charts_dir(), cfg.chart_retention())?;
        let summariser = Summariser::for_language(cfg.stopword_language());

        Ok(Self {
            cfg,
            summariser: Arc::new(summariser),
            renderer,
            store: Arc::new(store),
        })
    }

    pub fn config(&self) -> &CoreConfig {
        &self.cfg
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::index,
        handlers::summarize_form,
        handlers::summarize_json,
        handlers::health,
    ),
    components(schemas(
        handlers::SummariseForm,
        handlers::SummariseReq,
        handlers::SummariseRes,
        handlers::SentenceRes,
        handlers::WordRes,
        handlers::HealthRes,
    ))
)]
pub struct ApiDoc;

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    let static_dir = state.cfg.static_dir().to_path_buf();

    Router::new()
        .route("/", get(handlers::index))
        .route("/summarize", post(handlers::summarize_form))
        .route("/api/summarize", post(handlers::summarize_json))
        .route("/health", get(handlers::health))
        .nest_service("/static", ServeDir::new(static_dir))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
