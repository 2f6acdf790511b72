//! Content quality
//!
//! Combines posting regularity, engagement stability, media mix and caption
//! craft over an account's most recent posts.

use std::collections::HashSet;

use serde::Serialize;

use super::unit_clamp;
use crate::app::scoring_config::{
    CAPTION_QUALITY_WEIGHT, ENGAGEMENT_CONSISTENCY_WEIGHT, FEW_POSTS_CONSISTENCY,
    GAP_VARIANCE_DIVISOR, LIMITED_DATA_CONSISTENCY, MEDIA_DIVERSITY_WEIGHT,
    MISSING_CAPTION_SCORE, NO_DATA_CONSISTENCY, POSTING_CONSISTENCY_WEIGHT,
    RATE_VARIANCE_MULTIPLIER,
};
use crate::domain::entities::{MediaType, Post};

/// The four sub-factors and their weighted combination
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContentQualityBreakdown {
    pub posting_consistency: f64,
    pub engagement_consistency: f64,
    pub media_diversity: f64,
    pub caption_quality: f64,
    pub score: f64,
}

/// Content quality breakdown for the given recent posts, or `None` when empty.
pub fn content_quality(follower_count: i64, posts: &[Post]) -> Option<ContentQualityBreakdown> {
    if posts.is_empty() {
        return None;
    }

    let posting_consistency = posting_consistency(posts);
    let engagement_consistency = engagement_consistency(follower_count, posts);
    let media_diversity = media_diversity(posts);
    let caption_quality = caption_quality(posts);

    let score = posting_consistency * POSTING_CONSISTENCY_WEIGHT
        + engagement_consistency * ENGAGEMENT_CONSISTENCY_WEIGHT
        + media_diversity * MEDIA_DIVERSITY_WEIGHT
        + caption_quality * CAPTION_QUALITY_WEIGHT;

    Some(ContentQualityBreakdown {
        posting_consistency,
        engagement_consistency,
        media_diversity,
        caption_quality,
        score: unit_clamp(score),
    })
}

/// Population variance around the mean
fn variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n
}

/// Map a series to a consistency score: `1 / (1 + scale(variance))`.
fn series_consistency(values: &[f64], scale: impl Fn(f64) -> f64) -> f64 {
    match values.len() {
        0 => NO_DATA_CONSISTENCY,
        1 => LIMITED_DATA_CONSISTENCY,
        _ => 1.0 / (1.0 + scale(variance(values))),
    }
}

/// Regularity of the posting schedule from gaps in whole days
pub fn gap_consistency(gaps: &[f64]) -> f64 {
    series_consistency(gaps, |v| v / GAP_VARIANCE_DIVISOR)
}

fn posting_consistency(posts: &[Post]) -> f64 {
    if posts.len() < 2 {
        return FEW_POSTS_CONSISTENCY;
    }

    let mut dates: Vec<_> = posts.iter().filter_map(|p| p.posted_at).collect();
    dates.sort_unstable_by(|a, b| b.cmp(a));

    let gaps: Vec<f64> = dates
        .windows(2)
        .map(|pair| (pair[0] - pair[1]).num_days() as f64)
        .collect();

    gap_consistency(&gaps)
}

fn engagement_consistency(follower_count: i64, posts: &[Post]) -> f64 {
    let rates: Vec<f64> = if follower_count > 0 {
        posts
            .iter()
            .map(|p| p.interactions() as f64 / follower_count as f64)
            .collect()
    } else {
        Vec::new()
    };

    series_consistency(&rates, |v| v * RATE_VARIANCE_MULTIPLIER)
}

fn media_diversity(posts: &[Post]) -> f64 {
    let kinds: HashSet<MediaType> = posts.iter().map(|p| p.media_type).collect();
    (kinds.len() as f64 / MediaType::COUNT as f64).min(1.0)
}

fn caption_length_score(chars: usize) -> f64 {
    match chars {
        0..=9 => 0.3,
        10..=49 => 0.6,
        50..=299 => 1.0,
        300..=499 => 0.8,
        _ => 0.5,
    }
}

fn hashtag_score(count: usize) -> f64 {
    match count {
        0 => 0.4,
        1..=5 => 0.9,
        6..=15 => 0.7,
        _ => 0.3,
    }
}

/// Caption score of a single post
pub fn post_caption_score(post: &Post) -> f64 {
    match post.caption.as_deref() {
        None | Some("") => MISSING_CAPTION_SCORE,
        Some(caption) => {
            let length = caption_length_score(caption.chars().count());
            let hashtags = hashtag_score(post.hashtag_count());
            (length + hashtags) / 2.0
        }
    }
}

fn caption_quality(posts: &[Post]) -> f64 {
    if posts.is_empty() {
        return NO_DATA_CONSISTENCY;
    }
    posts.iter().map(post_caption_score).sum::<f64>() / posts.len() as f64
}
