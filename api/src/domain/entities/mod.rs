//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod account;
pub mod post;
pub mod snapshot;

pub use account::{Account, AccountId, AccountQuery, InvestmentScores, ScoreMetric, SortOrder};
pub use post::{MediaType, Post, PostId};
pub use snapshot::{AudienceSnapshot, Distribution, MetricSnapshot};
