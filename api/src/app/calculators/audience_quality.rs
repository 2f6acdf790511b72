use super::unit_clamp;
use crate::app::scoring_config::{
    AUDIENCE_ENGAGEMENT_WEIGHT, AUTHENTICITY_WEIGHT, INFLUENCE_WEIGHT, LOYALTY_WEIGHT,
    NEUTRAL_SCORE, PURCHASING_POWER_WEIGHT,
};
use crate::domain::entities::AudienceSnapshot;

/// Audience quality from the latest audience snapshot.
///
/// Without a snapshot the score is neutral (0.5), not zero: missing audience
/// data means "unknown" rather than "bad".
pub fn audience_quality(snapshot: Option<&AudienceSnapshot>) -> f64 {
    let Some(s) = snapshot else {
        return NEUTRAL_SCORE;
    };

    let score = s.authentic_followers_ratio * AUTHENTICITY_WEIGHT
        + s.engagement_rate * AUDIENCE_ENGAGEMENT_WEIGHT
        + s.loyalty_score * LOYALTY_WEIGHT
        + s.purchasing_power_score * PURCHASING_POWER_WEIGHT
        + s.influence_multiplier * INFLUENCE_WEIGHT;

    unit_clamp(score)
}
