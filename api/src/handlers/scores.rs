//! Score handlers
//!
//! Compute scores on demand and trigger persisted score updates.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::app::BatchUpdateSummary;
use crate::domain::entities::{AccountId, InvestmentScores};
use crate::domain::ports::AccountRepository;
use crate::error::AppError;
use crate::AppState;

/// Query/body params selecting target industry categories
#[derive(Debug, Default, Deserialize)]
pub struct ScoreParams {
    /// Comma-separated category labels
    pub industry_categories: Option<String>,
}

impl ScoreParams {
    /// Non-empty trimmed category labels
    pub fn targets(&self) -> Vec<String> {
        self.industry_categories
            .as_deref()
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Scores of one account
#[derive(Debug, Serialize)]
pub struct ScoresResponse {
    pub account_id: AccountId,
    pub handle: String,
    #[serde(flatten)]
    pub scores: InvestmentScores,
}

async fn resolve_account(state: &AppState, id: Uuid) -> Result<(AccountId, String), AppError> {
    let account = state
        .account_repo
        .find_by_id(&AccountId(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Account {} not found", id)))?;

    Ok((account.id, account.handle))
}

/// GET /accounts/:id/scores
///
/// Compute fresh scores without storing them.
pub async fn get_scores(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<ScoreParams>,
) -> Result<Json<ScoresResponse>, AppError> {
    let (account_id, handle) = resolve_account(&state, id).await?;

    let scores = state
        .scoring_service
        .calculate_overall_score(&account_id, &params.targets())
        .await?;

    Ok(Json(ScoresResponse {
        account_id,
        handle,
        scores,
    }))
}

/// POST /accounts/:id/scores
///
/// Compute and persist scores for one account. Requires the admin key.
pub async fn update_scores(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<ScoreParams>,
) -> Result<Json<ScoresResponse>, AppError> {
    let (account_id, handle) = resolve_account(&state, id).await?;

    let scores = state
        .scoring_service
        .update_influencer_scores(&account_id, &params.targets())
        .await?;

    Ok(Json(ScoresResponse {
        account_id,
        handle,
        scores,
    }))
}

/// POST /scores/batch
///
/// Recompute and persist scores for every account. Requires the admin key.
pub async fn batch_update_scores(
    State(state): State<AppState>,
    Query(params): Query<ScoreParams>,
) -> Result<Json<BatchUpdateSummary>, AppError> {
    let summary = state
        .scoring_service
        .batch_update_scores(&params.targets())
        .await?;

    if summary.updated < summary.total {
        tracing::warn!(
            updated = summary.updated,
            total = summary.total,
            "Batch update left some accounts unscored"
        );
    }

    Ok(Json(summary))
}
