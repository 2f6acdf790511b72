use std::env;

use crate::app::ScoringWeights;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Key required by the score-writing routes; writes are refused when unset
    pub admin_api_key: Option<String>,
    /// Weights combining the five sub-scores into the overall score
    pub scoring_weights: ScoringWeights,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let config = Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            admin_api_key: env::var("ADMIN_API_KEY").ok().filter(|k| !k.is_empty()),
            scoring_weights: weights_from(|name| env::var(name).ok()),
        };

        let total = config.scoring_weights.total();
        if total < 1.0 - WEIGHT_SUM_TOLERANCE {
            tracing::warn!(total, "Scoring weights sum to less than 1.0");
        }
        if config.admin_api_key.is_none() {
            tracing::warn!("ADMIN_API_KEY not set, score updates are disabled");
        }

        config
    }
}

/// Slack allowed when comparing a weight sum against 1.0
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Build scoring weights from a variable lookup, keeping defaults for
/// anything missing or invalid.
///
/// A set summing to more than 1.0 could push the overall score past 1, so
/// it is replaced by the defaults as a whole.
fn weights_from(lookup: impl Fn(&str) -> Option<String>) -> ScoringWeights {
    let defaults = ScoringWeights::default();
    let weight = |name: &str, default: f64| parse_weight(name, lookup(name), default);

    let weights = ScoringWeights {
        engagement: weight("ENGAGEMENT_RATE_WEIGHT", defaults.engagement),
        growth: weight("FOLLOWER_GROWTH_WEIGHT", defaults.growth),
        content_quality: weight("CONTENT_QUALITY_WEIGHT", defaults.content_quality),
        audience_quality: weight("AUDIENCE_QUALITY_WEIGHT", defaults.audience_quality),
        brand_alignment: weight("BRAND_ALIGNMENT_WEIGHT", defaults.brand_alignment),
    };

    let total = weights.total();
    if total > 1.0 + WEIGHT_SUM_TOLERANCE {
        tracing::warn!(total, "Scoring weights sum to more than 1.0, using defaults");
        return defaults;
    }

    weights
}

fn parse_weight(name: &str, raw: Option<String>, default: f64) -> f64 {
    let Some(raw) = raw else {
        return default;
    };

    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => value,
        _ => {
            tracing::warn!(name, value = %raw, default, "Invalid scoring weight, using default");
            default
        }
    }
}
