//! Account domain entity
//!
//! Represents a tracked social-media account and its derived investment scores.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(pub Uuid);

impl AccountId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for AccountId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The five sub-scores plus the weighted overall score.
///
/// Every field lies in [0, 1] when produced by the scoring service.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InvestmentScores {
    pub overall_investment_score: f64,
    pub engagement_rate: f64,
    pub growth_rate: f64,
    pub content_quality_score: f64,
    pub audience_quality_score: f64,
    pub brand_alignment_score: f64,
}

/// A tracked account
#[derive(Debug, Clone, Serialize)]
pub struct Account {
    pub id: AccountId,
    /// Unique public handle
    pub handle: String,
    pub full_name: Option<String>,
    pub follower_count: i64,
    pub following_count: i64,
    pub post_count: i64,
    pub is_private: bool,
    pub is_verified: bool,
    pub category: Option<String>,
    #[serde(flatten)]
    pub scores: InvestmentScores,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_scraped_at: Option<DateTime<Utc>>,
}

impl Account {
    /// Value of a rankable metric on this account
    pub fn metric(&self, metric: ScoreMetric) -> f64 {
        metric.value(self)
    }
}

/// Closed set of account metrics that listings may be sorted or filtered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreMetric {
    OverallInvestmentScore,
    EngagementRate,
    GrowthRate,
    ContentQualityScore,
    AudienceQualityScore,
    BrandAlignmentScore,
    FollowerCount,
}

impl ScoreMetric {
    pub const ALL: [ScoreMetric; 7] = [
        ScoreMetric::OverallInvestmentScore,
        ScoreMetric::EngagementRate,
        ScoreMetric::GrowthRate,
        ScoreMetric::ContentQualityScore,
        ScoreMetric::AudienceQualityScore,
        ScoreMetric::BrandAlignmentScore,
        ScoreMetric::FollowerCount,
    ];

    /// Read this metric from an account
    pub fn value(self, account: &Account) -> f64 {
        let accessor: fn(&Account) -> f64 = match self {
            ScoreMetric::OverallInvestmentScore => |a| a.scores.overall_investment_score,
            ScoreMetric::EngagementRate => |a| a.scores.engagement_rate,
            ScoreMetric::GrowthRate => |a| a.scores.growth_rate,
            ScoreMetric::ContentQualityScore => |a| a.scores.content_quality_score,
            ScoreMetric::AudienceQualityScore => |a| a.scores.audience_quality_score,
            ScoreMetric::BrandAlignmentScore => |a| a.scores.brand_alignment_score,
            ScoreMetric::FollowerCount => |a| a.follower_count as f64,
        };
        accessor(account)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ScoreMetric::OverallInvestmentScore => "overall_investment_score",
            ScoreMetric::EngagementRate => "engagement_rate",
            ScoreMetric::GrowthRate => "growth_rate",
            ScoreMetric::ContentQualityScore => "content_quality_score",
            ScoreMetric::AudienceQualityScore => "audience_quality_score",
            ScoreMetric::BrandAlignmentScore => "brand_alignment_score",
            ScoreMetric::FollowerCount => "follower_count",
        }
    }
}

impl std::fmt::Display for ScoreMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ScoreMetric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ScoreMetric::ALL
            .into_iter()
            .find(|m| m.as_str() == wanted)
            .ok_or_else(|| {
                let valid: Vec<&str> = ScoreMetric::ALL.iter().map(|m| m.as_str()).collect();
                format!(
                    "Unknown metric: {}. Must be one of: {}",
                    s,
                    valid.join(", ")
                )
            })
    }
}

/// Sort direction for account listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(format!("Unknown sort order: {}", s)),
        }
    }
}

/// Filter, sort and pagination options for listing accounts
#[derive(Debug, Clone)]
pub struct AccountQuery {
    pub sort_by: ScoreMetric,
    pub order: SortOrder,
    /// Minimum overall investment score
    pub min_score: Option<f64>,
    /// Minimum growth rate
    pub min_growth: Option<f64>,
    pub category: Option<String>,
    pub offset: u64,
    pub limit: u64,
}

impl Default for AccountQuery {
    fn default() -> Self {
        Self {
            sort_by: ScoreMetric::OverallInvestmentScore,
            order: SortOrder::Desc,
            min_score: None,
            min_growth: None,
            category: None,
            offset: 0,
            limit: 100,
        }
    }
}

impl AccountQuery {
    /// Whether an account passes the filters of this query
    pub fn matches(&self, account: &Account) -> bool {
        if let Some(min) = self.min_score {
            if account.scores.overall_investment_score < min {
                return false;
            }
        }
        if let Some(min) = self.min_growth {
            if account.scores.growth_rate < min {
                return false;
            }
        }
        match &self.category {
            Some(category) => account.category.as_deref() == Some(category.as_str()),
            None => true,
        }
    }
}
