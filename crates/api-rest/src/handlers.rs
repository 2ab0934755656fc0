//! Route handlers.

use crate::pages::{self, ChartLinks};
use crate::{ApiError, AppState, CHARTS_URL};
use axum::{
    extract::{rejection::FormRejection, rejection::JsonRejection, State},
    response::{Html, Json},
    Form,
};
use precis_charts::{ChartKind, ChartSlot};
use precis_core::validation::{parse_sentence_count, require_field, validate_sentence_count};
use precis_core::{analyse, Analysis};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Fields posted by the HTML form.
///
/// Both are optional at the type level so a missing `text` becomes a 400 from our own
/// validation rather than an extractor rejection.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SummariseForm {
    /// Document to summarise (required)
    pub text: Option<String>,
    /// Requested number of summary sentences, blank for the default
    pub sentences: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SummariseReq {
    /// Document to summarise (required)
    pub text: Option<String>,
    /// Requested number of summary sentences
    pub sentences: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SentenceRes {
    pub text: String,
    pub position: usize,
    pub score: f64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WordRes {
    pub word: String,
    pub score: f64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SummariseRes {
    /// Selected sentences joined with single spaces, in rank order
    pub summary: String,
    pub sentences: Vec<SentenceRes>,
    /// Most frequent words of the summary, normalised so the top word scores 1.0
    pub top_words: Vec<WordRes>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

impl From<&Analysis> for SummariseRes {
    fn from(analysis: &Analysis) -> Self {
        Self {
            summary: analysis.summary.text(),
            sentences: analysis
                .summary
                .sentences()
                .iter()
                .map(|s| SentenceRes {
                    text: s.text.clone(),
                    position: s.position,
                    score: s.score,
                })
                .collect(),
            top_words: analysis
                .top_words
                .iter()
                .map(|w| WordRes {
                    word: w.word.clone(),
                    score: w.score,
                })
                .collect(),
        }
    }
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Input form", content_type = "text/html", body = String)
    )
)]
/// Serves the input form.
#[axum::debug_handler]
pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(pages::index_page(state.cfg.summary_sentences()))
}

#[utoipa::path(
    post,
    path = "/summarize",
    request_body(content = SummariseForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Result page with summary and charts", content_type = "text/html", body = String),
        (status = 400, description = "Missing text field or invalid sentence count"),
        (status = 500, description = "Internal server error")
    )
)]
/// Summarises the posted text and renders its charts
///
/// Charts are written to a fresh directory per request. When the summary has no words left to
/// chart (empty or stop-word-only input) rendering is skipped and the page says so.
///
/// # Errors
/// Returns `400 Bad Request` if:
/// - the form cannot be parsed,
/// - the `text` field is absent, or
/// - `sentences` is not a number in range.
///
/// Returns `500 Internal Server Error` if chart rendering fails.
#[axum::debug_handler]
pub async fn summarize_form(
    State(state): State<AppState>,
    form: Result<Form<SummariseForm>, FormRejection>,
) -> Result<Html<String>, ApiError> {
    let Form(form) = form.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let text = require_field("text", form.text)?;
    let sentences = parse_sentence_count(form.sentences.as_deref(), state.cfg.summary_sentences())?;

    let worker = state.clone();
    let (text, analysis, slot) =
        tokio::task::spawn_blocking(move || render_charts(&worker, text, sentences)).await??;

    let links = slot.map(|slot| ChartLinks {
        urls: ChartKind::ALL
            .iter()
            .map(|kind| (*kind, slot.url(CHARTS_URL, *kind)))
            .collect(),
    });

    Ok(Html(pages::result_page(
        &text,
        &analysis.summary.text(),
        links.as_ref(),
    )))
}

type Rendered = (String, Analysis, Option<ChartSlot>);

fn render_charts(state: &AppState, text: String, sentences: usize) -> Result<Rendered, ApiError> {
    let analysis = analyse(&state.summariser, &text, sentences, state.cfg.top_words());

    if analysis.is_degenerate() {
        tracing::info!("nothing to chart, skipping rendering");
        return Ok((text, analysis, None));
    }

    let slot = state.store.allocate()?;
    state.renderer.render(&analysis.top_words, slot.dir())?;
    tracing::info!(
        slot = slot.id(),
        sentences = analysis.summary.len(),
        words = analysis.top_words.len(),
        "rendered summary charts"
    );

    Ok((text, analysis, Some(slot)))
}

#[utoipa::path(
    post,
    path = "/api/summarize",
    request_body = SummariseReq,
    responses(
        (status = 200, description = "Summary and word frequencies", body = SummariseRes),
        (status = 400, description = "Missing text field or invalid sentence count")
    )
)]
/// Summarises text and returns the result as JSON, without rendering charts.
#[axum::debug_handler]
pub async fn summarize_json(
    State(state): State<AppState>,
    req: Result<Json<SummariseReq>, JsonRejection>,
) -> Result<Json<SummariseRes>, ApiError> {
    let Json(req) = req.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let text = require_field("text", req.text)?;
    let sentences = req.sentences.unwrap_or(state.cfg.summary_sentences());
    validate_sentence_count(sentences)?;

    let analysis = analyse(&state.summariser, &text, sentences, state.cfg.top_words());
    Ok(Json(SummariseRes::from(&analysis)))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for monitoring and load balancers.
#[axum::debug_handler]
pub async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthRes {
        ok: true,
        message: "precis is alive".into(),
    })
}
