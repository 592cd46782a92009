use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use na_core::report::audio_file_name;
use na_core::{Error, LoggingObserver, Report, PRESET_COMPANIES};
use na_news::{Language, ReportOutcome, ReportRequest};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;

use crate::AppState;

/// Maps pipeline errors onto HTTP statuses.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(e: Error) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            Error::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Error::Fetch(_) | Error::Http(_) => StatusCode::BAD_GATEWAY,
            Error::Synthesis(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            warn!("⚠️ {}", self.0);
        }
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ReportQuery {
    pub count: Option<usize>,
    pub use_cache: Option<bool>,
    pub language: Option<Language>,
}

impl ReportQuery {
    fn request(&self, company: String, language: Language) -> ReportRequest {
        let mut request = ReportRequest::new(company).with_language(language);
        if let Some(count) = self.count {
            request = request.with_count(count);
        }
        if let Some(use_cache) = self.use_cache {
            request = request.with_cache(use_cache);
        }
        request
    }
}

#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub report: Report,
    pub overall_summary: String,
    pub hindi_summary: Option<String>,
    pub article_translations: Vec<String>,
    pub translation_failed: bool,
    pub audio_available: bool,
    pub from_cache: bool,
    pub cached_at: Option<DateTime<Utc>>,
}

impl From<ReportOutcome> for ReportResponse {
    fn from(outcome: ReportOutcome) -> Self {
        Self {
            audio_available: outcome.audio.is_some(),
            report: outcome.report,
            overall_summary: outcome.overall_summary,
            hindi_summary: outcome.hindi_summary,
            article_translations: outcome.article_translations,
            translation_failed: outcome.translation_failed,
            from_cache: outcome.from_cache,
            cached_at: outcome.cached_at,
        }
    }
}

pub async fn list_companies() -> impl IntoResponse {
    Json(PRESET_COMPANIES)
}

pub async fn get_report(
    State(state): State<Arc<AppState>>,
    Path(company): Path<String>,
    Query(query): Query<ReportQuery>,
) -> Result<Json<ReportResponse>, ApiError> {
    let request = query.request(company, query.language.unwrap_or_default());
    let manager = state.manager.lock().await;
    let outcome = manager.generate(&request, &LoggingObserver).await?;
    Ok(Json(outcome.into()))
}

pub async fn get_audio(
    State(state): State<Arc<AppState>>,
    Path(company): Path<String>,
    Query(query): Query<ReportQuery>,
) -> Result<Response, ApiError> {
    let request = query.request(company, Language::Hindi);
    let manager = state.manager.lock().await;
    let outcome = manager.generate(&request, &LoggingObserver).await?;

    let audio = outcome
        .audio
        .ok_or_else(|| Error::Synthesis(format!("no audio available for {}", outcome.company)))?;
    let file_name = audio_file_name(&outcome.company, &outcome.audio_extension);
    Ok((
        [
            (header::CONTENT_TYPE, "audio/mpeg".to_string()),
            (header::CONTENT_DISPOSITION, format!("attachment; filename=\"{}\"", file_name)),
        ],
        audio,
    )
        .into_response())
}

pub async fn clear_cache(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, ApiError> {
    let manager = state.manager.lock().await;
    let removed = manager.clear_cache().await?;
    Ok(Json(json!({ "removed": removed })))
}
