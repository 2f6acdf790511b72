//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod accounts;
pub mod analytics;
pub mod scores;

pub use accounts::{get_account, get_account_by_handle, list_accounts};
pub use analytics::{
    audience_demographics, category_distribution, growth_trends, investment_opportunities,
    score_distribution, top_accounts,
};
pub use scores::{batch_update_scores, get_scores, update_scores};
