//! Scoring configuration constants
//!
//! Windows, thresholds and sub-factor weights used by the score calculators,
//! plus the configurable weights that combine the five sub-scores.

use serde::{Deserialize, Serialize};

/// Days of posts considered for the engagement rate
pub const ENGAGEMENT_WINDOW_DAYS: i64 = 30;

/// Days of metric snapshots considered for growth
pub const GROWTH_WINDOW_DAYS: i64 = 90;

/// Number of recent posts inspected for content quality
pub const CONTENT_SAMPLE_SIZE: u64 = 20;

/// Follower count above which the logarithmic correction applies
pub const LARGE_ACCOUNT_THRESHOLD: i64 = 100_000;

/// Divisor inside the logarithmic correction: `log10(followers / base)`
pub const LARGE_ACCOUNT_LOG_BASE: f64 = 10_000.0;

/// Percentage growth over the window that maps to a score of 1.0
pub const GROWTH_CEILING_PERCENT: f64 = 100.0;

/// Neutral score for missing audience data
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Brand alignment when targets were given but none matched
pub const NO_MATCH_ALIGNMENT: f64 = 0.3;

// Content quality sub-factor weights
pub const POSTING_CONSISTENCY_WEIGHT: f64 = 0.25;
pub const ENGAGEMENT_CONSISTENCY_WEIGHT: f64 = 0.35;
pub const MEDIA_DIVERSITY_WEIGHT: f64 = 0.15;
pub const CAPTION_QUALITY_WEIGHT: f64 = 0.25;

/// Posting consistency with fewer than two posts
pub const FEW_POSTS_CONSISTENCY: f64 = 0.3;

/// Consistency when exactly one gap or rate is available
pub const LIMITED_DATA_CONSISTENCY: f64 = 0.7;

/// Consistency when no gap or rate is available
pub const NO_DATA_CONSISTENCY: f64 = 0.5;

/// Variance divisor for posting gaps measured in days
pub const GAP_VARIANCE_DIVISOR: f64 = 10.0;

/// Variance multiplier for per-post engagement rates
pub const RATE_VARIANCE_MULTIPLIER: f64 = 100.0;

/// Caption score of a post without a caption
pub const MISSING_CAPTION_SCORE: f64 = 0.3;

// Audience quality weights
pub const AUTHENTICITY_WEIGHT: f64 = 0.3;
pub const AUDIENCE_ENGAGEMENT_WEIGHT: f64 = 0.2;
pub const LOYALTY_WEIGHT: f64 = 0.15;
pub const PURCHASING_POWER_WEIGHT: f64 = 0.25;
pub const INFLUENCE_WEIGHT: f64 = 0.1;

/// Weight for interest categories not listed in `DEFAULT_CATEGORY_WEIGHTS`
pub const UNKNOWN_CATEGORY_WEIGHT: f64 = 0.5;

/// Investor interest in each audience category when no targets are given
pub const DEFAULT_CATEGORY_WEIGHTS: &[(&str, f64)] = &[
    ("technology", 1.0),
    ("finance", 0.9),
    ("business", 0.9),
    ("entrepreneurship", 1.0),
    ("startups", 1.0),
    ("innovation", 0.9),
    ("lifestyle", 0.7),
    ("health", 0.8),
    ("fitness", 0.7),
    ("fashion", 0.6),
    ("beauty", 0.6),
    ("travel", 0.5),
    ("food", 0.5),
    ("entertainment", 0.4),
    ("gaming", 0.7),
    ("education", 0.8),
    ("science", 0.8),
];

/// Look up the default investor weight for a lowercase category label
pub fn default_category_weight(category: &str) -> f64 {
    DEFAULT_CATEGORY_WEIGHTS
        .iter()
        .find(|(name, _)| *name == category)
        .map_or(UNKNOWN_CATEGORY_WEIGHT, |(_, weight)| *weight)
}

/// Weights that combine the five sub-scores into the overall score.
///
/// They need not sum to exactly 1.0 but should by convention.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub engagement: f64,
    pub growth: f64,
    pub content_quality: f64,
    pub audience_quality: f64,
    pub brand_alignment: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            engagement: 0.30,
            growth: 0.20,
            content_quality: 0.15,
            audience_quality: 0.20,
            brand_alignment: 0.15,
        }
    }
}

impl ScoringWeights {
    pub fn total(&self) -> f64 {
        self.engagement
            + self.growth
            + self.content_quality
            + self.audience_quality
            + self.brand_alignment
    }
}
