//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, the score calculators and
//! repository ports.

pub mod analytics_service;
pub mod calculators;
pub mod scoring_config;
pub mod scoring_service;

pub use analytics_service::{
    AccountDemographics, AnalyticsService, AudienceDemographics, CategorySummary, GrowthTrends,
    Opportunity, OpportunityCriteria, RankedAccount, ScoreBucket,
};
pub use scoring_config::ScoringWeights;
pub use scoring_service::{BatchUpdateSummary, ScoringService};
