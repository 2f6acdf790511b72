//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use chrono::{DateTime, Utc};

use crate::domain::entities::{
    Account, AccountId, AccountQuery, AudienceSnapshot, InvestmentScores, MetricSnapshot, Post,
};
use crate::error::DomainError;

/// Repository for Account entities
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find an account by ID
    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, DomainError>;

    /// Find an account by its unique handle
    async fn find_by_handle(&self, handle: &str) -> Result<Option<Account>, DomainError>;

    /// Every tracked account
    async fn find_all(&self) -> Result<Vec<Account>, DomainError>;

    /// Filtered, sorted and paginated listing
    async fn list(&self, query: &AccountQuery) -> Result<Vec<Account>, DomainError>;

    /// Overwrite the five sub-scores and the overall score
    async fn update_scores(
        &self,
        id: &AccountId,
        scores: &InvestmentScores,
    ) -> Result<(), DomainError>;
}

/// Repository for Post entities
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Posts with a known timestamp at or after `since`, oldest first.
    /// With no `since`, every post with a known timestamp.
    async fn find_by_account_since(
        &self,
        account_id: &AccountId,
        since: Option<DateTime<Utc>>,
    ) -> Result<Vec<Post>, DomainError>;

    /// The `limit` most recent posts, newest first. Posts without a timestamp sort last.
    async fn find_recent_by_account(
        &self,
        account_id: &AccountId,
        limit: u64,
    ) -> Result<Vec<Post>, DomainError>;
}

/// Repository for MetricSnapshot entities
#[async_trait]
pub trait MetricSnapshotRepository: Send + Sync {
    /// Snapshots recorded at or after `since`, ordered by timestamp ascending
    async fn find_by_account_since(
        &self,
        account_id: &AccountId,
        since: Option<DateTime<Utc>>,
    ) -> Result<Vec<MetricSnapshot>, DomainError>;

    /// Snapshots of every account recorded at or after `since`, ordered by
    /// timestamp ascending
    async fn find_since(&self, since: DateTime<Utc>) -> Result<Vec<MetricSnapshot>, DomainError>;
}

/// Repository for AudienceSnapshot entities
#[async_trait]
pub trait AudienceSnapshotRepository: Send + Sync {
    /// Most recent snapshot for an account
    async fn find_latest(
        &self,
        account_id: &AccountId,
    ) -> Result<Option<AudienceSnapshot>, DomainError>;

    /// Most recent snapshot of every account that has one
    async fn find_latest_per_account(&self) -> Result<Vec<AudienceSnapshot>, DomainError>;
}
