//! Analytics handlers
//!
//! Rankings and aggregate views over stored scores and audiences.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::app::{
    AccountDemographics, AudienceDemographics, CategorySummary, GrowthTrends, Opportunity,
    OpportunityCriteria, RankedAccount, ScoreBucket,
};
use crate::domain::entities::{AccountId, ScoreMetric};
use crate::error::AppError;
use crate::AppState;

const MAX_LIMIT: u64 = 100;

/// Query params for GET /analytics/top
#[derive(Debug, Deserialize)]
pub struct TopParams {
    #[serde(default = "default_top_limit")]
    pub limit: u64,
    pub metric: Option<String>,
    pub category: Option<String>,
}

fn default_top_limit() -> u64 {
    10
}

/// Query params for GET /analytics/opportunities
#[derive(Debug, Default, Deserialize)]
pub struct OpportunityParams {
    pub min_score: Option<f64>,
    pub min_growth_rate: Option<f64>,
    pub limit: Option<u64>,
}

impl From<OpportunityParams> for OpportunityCriteria {
    fn from(params: OpportunityParams) -> Self {
        let defaults = OpportunityCriteria::default();
        Self {
            min_score: params.min_score.unwrap_or(defaults.min_score),
            min_growth: params.min_growth_rate.unwrap_or(defaults.min_growth),
            limit: params.limit.unwrap_or(defaults.limit).min(MAX_LIMIT),
        }
    }
}

/// Query params for GET /analytics/categories
#[derive(Debug, Deserialize)]
pub struct CategoryParams {
    pub min_score: Option<f64>,
}

/// Query params for GET /analytics/growth-trends
#[derive(Debug, Deserialize)]
pub struct GrowthTrendParams {
    #[serde(default = "default_trend_days")]
    pub days: i64,
    pub account_id: Option<Uuid>,
}

fn default_trend_days() -> i64 {
    90
}

/// Query params for GET /analytics/audience
#[derive(Debug, Deserialize)]
pub struct DemographicsParams {
    pub account_id: Option<Uuid>,
}

/// One account's audience, or the average over all accounts
#[derive(Serialize)]
#[serde(untagged)]
pub enum DemographicsResponse {
    Account(AccountDemographics),
    Aggregate(AudienceDemographics),
}

#[derive(Serialize)]
pub struct OpportunitiesResponse {
    pub opportunities: Vec<Opportunity>,
}

#[derive(Serialize)]
pub struct DistributionResponse {
    pub distribution: Vec<ScoreBucket>,
}

#[derive(Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<CategorySummary>,
}

/// GET /analytics/top
pub async fn top_accounts(
    State(state): State<AppState>,
    Query(params): Query<TopParams>,
) -> Result<Json<Vec<RankedAccount>>, AppError> {
    let metric = match params.metric.as_deref() {
        Some(name) => name.parse::<ScoreMetric>().map_err(AppError::BadRequest)?,
        None => ScoreMetric::OverallInvestmentScore,
    };

    let ranked = state
        .analytics_service
        .top_accounts(metric, params.limit.min(MAX_LIMIT), params.category)
        .await?;

    Ok(Json(ranked))
}

/// GET /analytics/opportunities
pub async fn investment_opportunities(
    State(state): State<AppState>,
    Query(params): Query<OpportunityParams>,
) -> Result<Json<OpportunitiesResponse>, AppError> {
    let opportunities = state
        .analytics_service
        .investment_opportunities(params.into())
        .await?;

    Ok(Json(OpportunitiesResponse { opportunities }))
}

/// GET /analytics/score-distribution
pub async fn score_distribution(
    State(state): State<AppState>,
) -> Result<Json<DistributionResponse>, AppError> {
    let distribution = state.analytics_service.score_distribution().await?;
    Ok(Json(DistributionResponse { distribution }))
}

/// GET /analytics/categories
pub async fn category_distribution(
    State(state): State<AppState>,
    Query(params): Query<CategoryParams>,
) -> Result<Json<CategoriesResponse>, AppError> {
    let categories = state
        .analytics_service
        .category_distribution(params.min_score)
        .await?;

    Ok(Json(CategoriesResponse { categories }))
}

/// GET /analytics/growth-trends
///
/// Daily follower averages, for one account when `account_id` is given.
pub async fn growth_trends(
    State(state): State<AppState>,
    Query(params): Query<GrowthTrendParams>,
) -> Result<Json<GrowthTrends>, AppError> {
    let trends = state
        .analytics_service
        .growth_trends(params.days, params.account_id.map(AccountId))
        .await?;

    Ok(Json(trends))
}

/// GET /analytics/audience
pub async fn audience_demographics(
    State(state): State<AppState>,
    Query(params): Query<DemographicsParams>,
) -> Result<Json<DemographicsResponse>, AppError> {
    let response = match params.account_id {
        Some(id) => DemographicsResponse::Account(
            state
                .analytics_service
                .account_demographics(&AccountId(id))
                .await?,
        ),
        None => DemographicsResponse::Aggregate(
            state.analytics_service.audience_demographics().await?,
        ),
    };

    Ok(Json(response))
}
