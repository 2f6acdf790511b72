//! Sub-score calculators
//!
//! Pure functions turning already-fetched records into bounded [0, 1] scores.
//! Repository access lives in `ScoringService`; everything here is synchronous
//! and deterministic so it can be tested without fixtures for storage.

pub mod audience_quality;
pub mod brand_alignment;
pub mod content_quality;
pub mod engagement;
pub mod growth;

pub use audience_quality::audience_quality;
pub use brand_alignment::brand_alignment;
pub use content_quality::{content_quality, ContentQualityBreakdown};
pub use engagement::engagement_rate;
pub use growth::{growth_summary, GrowthSummary};

/// Clamp to [0, 1], mapping NaN to 0
pub(crate) fn unit_clamp(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
