//! Axum route handlers for the four screening actions.
//!
//! Each action re-runs its model calls from scratch against the session's
//! current résumés and the job description in the request body.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::screening::batch::{evaluate_all, evaluate_with};
use crate::screening::prompts::PromptVariant;
use crate::screening::render::{
    render_analysis, render_best_candidate, render_match_percentages, render_statistics,
    RenderedOutput,
};
use crate::screening::selection::{pick_best_candidate, score_all, ResumeScore};
use crate::screening::statistics::{compute_statistics, MatchStatistics};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ActionRequest {
    #[serde(default)]
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct ResumeAnalysis {
    pub name: String,
    pub analysis: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub output: RenderedOutput,
    pub analyses: Vec<ResumeAnalysis>,
}

#[derive(Debug, Serialize)]
pub struct MatchPercentagesResponse {
    pub output: RenderedOutput,
    pub scores: Vec<ResumeScore>,
}

#[derive(Debug, Serialize)]
pub struct PickBestResponse {
    pub output: RenderedOutput,
    pub best: Option<ResumeScore>,
}

#[derive(Debug, Serialize)]
pub struct StatisticsResponse {
    pub output: RenderedOutput,
    pub statistics: MatchStatistics,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions/:id/analyze
///
/// Qualitative write-up per résumé using the general-fit prompt.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ActionRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let resumes = state.sessions.uploaded_resumes(id).await?;
    let analyses = evaluate_with(
        state.evaluator.as_ref(),
        &resumes,
        &request.job_description,
        PromptVariant::GeneralFit,
    )
    .await?;

    Ok(Json(AnalyzeResponse {
        output: render_analysis(&analyses),
        analyses: analyses
            .iter()
            .map(|(name, analysis)| ResumeAnalysis {
                name: name.to_string(),
                analysis: analysis.to_string(),
            })
            .collect(),
    }))
}

/// POST /api/v1/sessions/:id/match-percentages
pub async fn handle_match_percentages(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ActionRequest>,
) -> Result<Json<MatchPercentagesResponse>, AppError> {
    let resumes = state.sessions.uploaded_resumes(id).await?;
    let results = evaluate_all(state.evaluator.as_ref(), &resumes, &request.job_description).await?;

    let scores = score_all(&results);
    Ok(Json(MatchPercentagesResponse {
        output: render_match_percentages(&scores),
        scores,
    }))
}

/// POST /api/v1/sessions/:id/pick-best
pub async fn handle_pick_best(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ActionRequest>,
) -> Result<Json<PickBestResponse>, AppError> {
    let resumes = state.sessions.uploaded_resumes(id).await?;
    let results = evaluate_all(state.evaluator.as_ref(), &resumes, &request.job_description).await?;

    let (candidate, percentage) = pick_best_candidate(&results);
    let best = candidate.map(|name| ResumeScore { name, percentage });
    Ok(Json(PickBestResponse {
        output: render_best_candidate(best.as_ref()),
        best,
    }))
}

/// POST /api/v1/sessions/:id/statistics
pub async fn handle_statistics(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ActionRequest>,
) -> Result<Json<StatisticsResponse>, AppError> {
    let resumes = state.sessions.uploaded_resumes(id).await?;
    let results = evaluate_all(state.evaluator.as_ref(), &resumes, &request.job_description).await?;

    let statistics = compute_statistics(&results);
    Ok(Json(StatisticsResponse {
        output: render_statistics(&statistics),
        statistics,
    }))
}
