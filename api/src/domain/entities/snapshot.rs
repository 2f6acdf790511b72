//! Snapshot domain entities
//!
//! Point-in-time records used to derive trends over time.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::AccountId;

/// Label to share-of-audience fraction
pub type Distribution = HashMap<String, f64>;

/// Follower/following/post counts at a point in time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricSnapshot {
    pub id: Uuid,
    pub account_id: AccountId,
    pub recorded_at: DateTime<Utc>,
    pub follower_count: i64,
    pub following_count: i64,
    pub post_count: i64,
}

/// Audience composition at a point in time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudienceSnapshot {
    pub id: Uuid,
    pub account_id: AccountId,
    pub recorded_at: DateTime<Utc>,
    pub authentic_followers_ratio: f64,
    pub bot_followers_ratio: f64,
    pub inactive_followers_ratio: f64,
    pub engagement_rate: f64,
    pub loyalty_score: f64,
    pub purchasing_power_score: f64,
    pub brand_affinity_score: f64,
    pub influence_multiplier: f64,
    /// Interest category to audience share; expected to sum to about 1
    pub interest_categories: Distribution,
    pub age_distribution: Option<Distribution>,
    pub gender_distribution: Option<Distribution>,
    pub location_distribution: Option<Distribution>,
}
