//! Follower growth
//!
//! Compares the oldest and newest metric snapshot in the growth window.

use serde::Serialize;

use super::unit_clamp;
use crate::app::scoring_config::GROWTH_CEILING_PERCENT;
use crate::domain::entities::MetricSnapshot;

/// Growth between the first and last snapshot of a window
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GrowthSummary {
    /// Whole days between the snapshots, at least 1
    pub elapsed_days: i64,
    pub follower_delta: i64,
    pub daily_growth: f64,
    /// Delta relative to the first count, in percent; 0 when the first count is 0
    pub percentage_growth: f64,
    /// Percentage growth normalized to [0, 1]
    pub score: f64,
}

/// Summarise growth across the snapshots, or `None` with fewer than two.
pub fn growth_summary(snapshots: &[MetricSnapshot]) -> Option<GrowthSummary> {
    if snapshots.len() < 2 {
        return None;
    }

    // Ties keep input order: earliest-first wins for `first`, latest-last for `last`
    let first = snapshots.iter().min_by_key(|s| s.recorded_at)?;
    let last = snapshots.iter().max_by_key(|s| s.recorded_at)?;

    let elapsed_days = (last.recorded_at - first.recorded_at).num_days().max(1);
    let follower_delta = last.follower_count - first.follower_count;
    let daily_growth = follower_delta as f64 / elapsed_days as f64;

    let (percentage_growth, score) = if first.follower_count > 0 {
        let pct = follower_delta as f64 / first.follower_count as f64 * 100.0;
        (pct, unit_clamp(pct / GROWTH_CEILING_PERCENT))
    } else {
        (0.0, 0.0)
    };

    Some(GrowthSummary {
        elapsed_days,
        follower_delta,
        daily_growth,
        percentage_growth,
        score,
    })
}
