//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::domain::entities::{
    Account, AccountId, AudienceSnapshot, Distribution, InvestmentScores, MediaType,
    MetricSnapshot, Post, PostId,
};

/// Create a test account with default values
pub fn test_account() -> Account {
    let id = AccountId::new();
    Account {
        id,
        handle: format!("account-{}", &id.0.simple().to_string()[..8]),
        full_name: Some("Test Account".to_string()),
        follower_count: 10_000,
        following_count: 500,
        post_count: 120,
        is_private: false,
        is_verified: false,
        category: None,
        scores: InvestmentScores::default(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
        last_scraped_at: None,
    }
}

/// Create a test account with a specific follower count
pub fn test_account_with_followers(follower_count: i64) -> Account {
    Account {
        follower_count,
        ..test_account()
    }
}

/// Create a test account with stored scores and category
pub fn test_scored_account(
    overall: f64,
    growth: f64,
    category: Option<&str>,
) -> Account {
    let mut account = test_account();
    account.category = category.map(str::to_string);
    account.scores = InvestmentScores {
        overall_investment_score: overall,
        engagement_rate: 0.05,
        growth_rate: growth,
        content_quality_score: 0.6,
        audience_quality_score: 0.7,
        brand_alignment_score: 0.5,
    };
    account
}

/// Create a test post with default values.
///
/// Image post published now, 100 likes and 20 comments, a 60-character caption
/// and two hashtags.
pub fn test_post(account_id: AccountId) -> Post {
    Post {
        id: PostId::new(),
        account_id,
        external_id: Uuid::new_v4().simple().to_string(),
        posted_at: Some(Utc::now()),
        like_count: 100,
        comment_count: 20,
        media_type: MediaType::Image,
        caption: Some("a".repeat(60)),
        hashtags: Some(vec!["invest".to_string(), "growth".to_string()]),
        is_sponsored: false,
    }
}

/// Create a test post published at a specific time
pub fn test_post_at(account_id: AccountId, posted_at: DateTime<Utc>) -> Post {
    Post {
        posted_at: Some(posted_at),
        ..test_post(account_id)
    }
}

/// Create a test post from yesterday with specific engagement
pub fn test_post_with_engagement(account_id: AccountId, likes: i64, comments: i64) -> Post {
    Post {
        posted_at: Some(Utc::now() - Duration::days(1)),
        like_count: likes,
        comment_count: comments,
        ..test_post(account_id)
    }
}

/// Create a metric snapshot with a specific follower count
pub fn test_metric_snapshot(
    account_id: AccountId,
    recorded_at: DateTime<Utc>,
    follower_count: i64,
) -> MetricSnapshot {
    MetricSnapshot {
        id: Uuid::new_v4(),
        account_id,
        recorded_at,
        follower_count,
        following_count: 500,
        post_count: 120,
    }
}

/// Create an audience snapshot recorded now with mid-range quality metrics
pub fn test_audience_snapshot(account_id: AccountId) -> AudienceSnapshot {
    AudienceSnapshot {
        id: Uuid::new_v4(),
        account_id,
        recorded_at: Utc::now(),
        authentic_followers_ratio: 0.8,
        bot_followers_ratio: 0.1,
        inactive_followers_ratio: 0.1,
        engagement_rate: 0.05,
        loyalty_score: 0.6,
        purchasing_power_score: 0.7,
        brand_affinity_score: 0.5,
        influence_multiplier: 0.9,
        interest_categories: Distribution::from([
            ("technology".to_string(), 0.6),
            ("lifestyle".to_string(), 0.4),
        ]),
        age_distribution: Some(Distribution::from([
            ("18-24".to_string(), 0.4),
            ("25-34".to_string(), 0.6),
        ])),
        gender_distribution: Some(Distribution::from([
            ("female".to_string(), 0.55),
            ("male".to_string(), 0.45),
        ])),
        location_distribution: Some(Distribution::from([
            ("US".to_string(), 0.7),
            ("DE".to_string(), 0.3),
        ])),
    }
}
