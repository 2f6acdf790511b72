//! Brand alignment
//!
//! How well an account's audience interests line up with what an investor cares
//! about, either the default interest table or an explicit list of categories.

use std::collections::HashMap;

use super::unit_clamp;
use crate::app::scoring_config::{default_category_weight, NEUTRAL_SCORE, NO_MATCH_ALIGNMENT};
use crate::domain::entities::AudienceSnapshot;

/// Brand alignment of the latest audience snapshot against `targets`.
///
/// An empty `targets` slice means "no preference" and uses the default
/// category weights.
pub fn brand_alignment(snapshot: Option<&AudienceSnapshot>, targets: &[String]) -> f64 {
    let interests = match snapshot {
        Some(s) if !s.interest_categories.is_empty() => &s.interest_categories,
        _ => return NEUTRAL_SCORE,
    };

    // Labels differing only in case are the same category
    let mut shares: HashMap<String, f64> = HashMap::with_capacity(interests.len());
    for (category, share) in interests {
        *shares.entry(category.to_lowercase()).or_default() += share;
    }

    let score = if targets.is_empty() {
        default_alignment(&shares)
    } else {
        targeted_alignment(&shares, targets)
    };

    unit_clamp(score)
}

fn default_alignment(shares: &HashMap<String, f64>) -> f64 {
    let (weighted, total) = shares
        .iter()
        .fold((0.0_f64, 0.0_f64), |(weighted, total), (category, share)| {
            (
                weighted + *share * default_category_weight(category),
                total + *share,
            )
        });

    if total > 0.0 {
        weighted / total
    } else {
        NEUTRAL_SCORE
    }
}

fn targeted_alignment(shares: &HashMap<String, f64>, targets: &[String]) -> f64 {
    let matched: Vec<f64> = targets
        .iter()
        .filter_map(|target| shares.get(&target.trim().to_lowercase()).copied())
        .collect();

    if matched.is_empty() {
        NO_MATCH_ALIGNMENT
    } else {
        matched.iter().sum::<f64>() / matched.len() as f64
    }
}
