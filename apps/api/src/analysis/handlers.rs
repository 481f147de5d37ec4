//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::export::{render_record, ExportSection};
use crate::analysis::scoring::{ScoreBand, SkillConfidence};
use crate::analysis::validation::{validate_jd, JdWarning};
use crate::errors::AppError;
use crate::models::analysis::AnalysisRecord;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub jd_text: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// A stored record plus derived, non-persisted fields.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisView {
    #[serde(flatten)]
    pub record: AnalysisRecord,
    pub score_band: ScoreBand,
}

impl From<AnalysisRecord> for AnalysisView {
    fn from(record: AnalysisRecord) -> Self {
        let score_band = ScoreBand::from_score(record.readiness_score);
        Self { record, score_band }
    }
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis: AnalysisView,
    pub warnings: Vec<JdWarning>,
}

#[derive(Debug, Deserialize)]
pub struct SkillToggleRequest {
    pub skill: String,
    pub confidence: SkillConfidence,
}

#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    #[serde(default)]
    pub section: ExportSection,
}

/// Runs a synchronous store call on the blocking pool.
async fn blocking<T, F>(f: F) -> Result<T, AppError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| AppError::Internal(e.into()))
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Analysis {id} not found"))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyses
///
/// Analyzes a JD and saves the result to history.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let warnings = validate_jd(&request.jd_text)?;

    let record = state.analyzer.analyze(
        &request.jd_text,
        request.company.as_deref(),
        request.role.as_deref(),
    );

    let store = state.store.clone();
    let to_save = record.clone();
    if !blocking(move || store.save(&to_save)).await? {
        return Err(AppError::Storage(format!(
            "analysis {} was not saved",
            record.id
        )));
    }

    Ok(Json(AnalyzeResponse {
        analysis: record.into(),
        warnings,
    }))
}

/// GET /api/v1/analyses
///
/// Returns history, most recent first.
pub async fn handle_list(State(state): State<AppState>) -> Result<Json<Vec<AnalysisView>>, AppError> {
    let store = state.store.clone();
    let history = blocking(move || store.list()).await?;
    Ok(Json(history.into_iter().map(AnalysisView::from).collect()))
}

/// GET /api/v1/analyses/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AnalysisView>, AppError> {
    let store = state.store.clone();
    let record = blocking(move || store.get_by_id(id))
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(record.into()))
}

/// PATCH /api/v1/analyses/:id/skills
///
/// Marks one detected skill as known / needs practice and returns the re-scored record.
pub async fn handle_toggle_skill(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SkillToggleRequest>,
) -> Result<Json<AnalysisView>, AppError> {
    let store = state.store.clone();
    let analyzer = state.analyzer.clone();

    let updated = blocking(move || {
        let record = store.get_by_id(id).ok_or_else(|| not_found(id))?;
        if !record
            .extracted_skills
            .flattened()
            .any(|s| s == request.skill)
        {
            return Err(AppError::Validation(format!(
                "'{}' is not a detected skill of this analysis",
                request.skill
            )));
        }
        analyzer
            .set_skill_confidence(&store, id, &request.skill, request.confidence)
            .ok_or_else(|| AppError::Storage(format!("analysis {id} was not updated")))
    })
    .await??;

    Ok(Json(updated.into()))
}

/// GET /api/v1/analyses/:id/export?section=plan|rounds|questions|all
pub async fn handle_export(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<ExportQuery>,
) -> Result<impl IntoResponse, AppError> {
    let store = state.store.clone();
    let record = blocking(move || store.get_by_id(id))
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        render_record(&record, query.section),
    ))
}
