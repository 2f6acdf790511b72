//! Engagement rate
//!
//! Mean interactions per recent post relative to follower count.

use super::unit_clamp;
use crate::app::scoring_config::{LARGE_ACCOUNT_LOG_BASE, LARGE_ACCOUNT_THRESHOLD};
use crate::domain::entities::Post;

/// Engagement rate of an account over the given (already windowed) posts.
///
/// Accounts above `LARGE_ACCOUNT_THRESHOLD` followers get their raw rate
/// multiplied by `log10(followers / 10_000)`, which is at least 1 there.
pub fn engagement_rate(follower_count: i64, posts: &[Post]) -> f64 {
    if posts.is_empty() || follower_count <= 0 {
        return 0.0;
    }

    let total: f64 = posts.iter().map(|p| p.interactions() as f64).sum();
    let average = total / posts.len() as f64;
    let mut rate = average / follower_count as f64;

    if follower_count > LARGE_ACCOUNT_THRESHOLD {
        rate *= (follower_count as f64 / LARGE_ACCOUNT_LOG_BASE).log10();
    }

    unit_clamp(rate)
}
