use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{AppState, router};
use precis_charts::PngChartRenderer;
use precis_core::config::config_from_env_values;

/// Main entry point for the precis web application
///
/// Resolves configuration once, opens the chart store and serves the REST API and browser form.
///
/// # Environment Variables
/// - `PRECIS_REST_ADDR`: server address (default: "0.0.0.0:3000")
/// - `PRECIS_STATIC_DIR`: directory served under `/static`, charts go in `charts/` (default: "static")
/// - `PRECIS_SUMMARY_SENTENCES`: default summary length (default: 3)
/// - `PRECIS_TOP_WORDS`: words drawn in each chart (default: 10)
/// - `PRECIS_STOPWORD_LANGUAGE`: stop-word list (default: "en")
/// - `PRECIS_CHART_RETENTION`: request chart directories kept on disk (default: 32)
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - any configuration value is invalid,
/// - the chart directory cannot be prepared, or
/// - the server address cannot be bound or the server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("precis=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr: SocketAddr = std::env::var("PRECIS_REST_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:3000".into())
        .parse()?;

    let cfg = Arc::new(config_from_env_values(
        std::env::var("PRECIS_STATIC_DIR").ok(),
        std::env::var("PRECIS_SUMMARY_SENTENCES").ok(),
        std::env::var("PRECIS_TOP_WORDS").ok(),
        std::env::var("PRECIS_STOPWORD_LANGUAGE").ok(),
        std::env::var("PRECIS_CHART_RETENTION").ok(),
    )?);

    tracing::info!(
        "++ Starting precis on {} (static dir {}, {} sentences, stop words {:?})",
        addr,
        cfg.static_dir().display(),
        cfg.summary_sentences(),
        cfg.stopword_language()
    );

    let state = AppState::new(cfg, Arc::new(PngChartRenderer::new()))?;
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
