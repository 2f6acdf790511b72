//! Account handlers
//!
//! Read-only listing and lookup of tracked accounts.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::entities::{Account, AccountId, AccountQuery, ScoreMetric, SortOrder};
use crate::domain::ports::AccountRepository;
use crate::error::AppError;
use crate::AppState;

/// Upper bound on page size
const MAX_LIMIT: u64 = 1000;

/// Query params for GET /accounts
#[derive(Debug, Default, Deserialize)]
pub struct ListAccountsParams {
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub min_score: Option<f64>,
    pub category: Option<String>,
    #[serde(default)]
    pub skip: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 {
    100
}

impl ListAccountsParams {
    /// Validate into a repository query
    pub fn into_query(self) -> Result<AccountQuery, AppError> {
        let sort_by = match self.sort_by.as_deref() {
            Some(name) => name.parse::<ScoreMetric>().map_err(AppError::BadRequest)?,
            None => ScoreMetric::OverallInvestmentScore,
        };
        let order = match self.sort_order.as_deref() {
            Some(order) => order.parse::<SortOrder>().map_err(AppError::BadRequest)?,
            None => SortOrder::Desc,
        };
        if self.limit == 0 {
            return Err(AppError::BadRequest("limit must be positive".to_string()));
        }
        if let Some(min) = self.min_score {
            if !min.is_finite() {
                return Err(AppError::BadRequest("min_score must be a number".to_string()));
            }
        }

        Ok(AccountQuery {
            sort_by,
            order,
            min_score: self.min_score,
            min_growth: None,
            category: self.category.filter(|c| !c.is_empty()),
            offset: self.skip,
            limit: self.limit.min(MAX_LIMIT),
        })
    }
}

/// GET /accounts
///
/// List accounts with filtering, sorting and pagination.
pub async fn list_accounts(
    State(state): State<AppState>,
    Query(params): Query<ListAccountsParams>,
) -> Result<Json<Vec<Account>>, AppError> {
    let query = params.into_query()?;
    let accounts = state.account_repo.list(&query).await?;
    Ok(Json(accounts))
}

/// GET /accounts/:id
pub async fn get_account(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Account>, AppError> {
    let account = state
        .account_repo
        .find_by_id(&AccountId(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Account {} not found", id)))?;

    Ok(Json(account))
}

/// GET /accounts/by-handle/:handle
pub async fn get_account_by_handle(
    State(state): State<AppState>,
    Path(handle): Path<String>,
) -> Result<Json<Account>, AppError> {
    let account = state
        .account_repo
        .find_by_handle(&handle)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Account with handle {} not found", handle)))?;

    Ok(Json(account))
}
