//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::domain::entities::{
    Account, AccountId, AccountQuery, AudienceSnapshot, InvestmentScores, MetricSnapshot, Post,
    SortOrder,
};
use crate::domain::ports::{
    AccountRepository, AudienceSnapshotRepository, MetricSnapshotRepository, PostRepository,
};
use crate::error::DomainError;

fn simulated_failure(what: &str) -> DomainError {
    DomainError::Database(format!("simulated {} failure", what))
}

// ============================================================================
// In-Memory Account Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryAccountRepository {
    // Insertion order is kept so listings with tied scores are deterministic
    accounts: Arc<RwLock<Vec<Account>>>,
    failing_updates: Arc<RwLock<HashSet<AccountId>>>,
    score_writes: Arc<AtomicUsize>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with an account for testing
    pub fn with_account(self, account: Account) -> Self {
        self.accounts.write().unwrap().push(account);
        self
    }

    /// Pre-populate with several accounts
    pub fn with_accounts(self, accounts: impl IntoIterator<Item = Account>) -> Self {
        self.accounts.write().unwrap().extend(accounts);
        self
    }

    /// Make `update_scores` fail for this account
    pub fn with_failing_update(self, id: AccountId) -> Self {
        self.failing_updates.write().unwrap().insert(id);
        self
    }

    /// Number of successful score writes
    pub fn score_writes(&self) -> usize {
        self.score_writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().unwrap();
        Ok(accounts.iter().find(|a| a.id == *id).cloned())
    }

    async fn find_by_handle(&self, handle: &str) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().unwrap();
        Ok(accounts.iter().find(|a| a.handle == handle).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Account>, DomainError> {
        Ok(self.accounts.read().unwrap().clone())
    }

    async fn list(&self, query: &AccountQuery) -> Result<Vec<Account>, DomainError> {
        let accounts = self.accounts.read().unwrap();
        let mut matching: Vec<Account> =
            accounts.iter().filter(|a| query.matches(a)).cloned().collect();

        // Stable sort keeps insertion order among ties
        matching.sort_by(|a, b| {
            let ordering = a.metric(query.sort_by).total_cmp(&b.metric(query.sort_by));
            match query.order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });

        Ok(matching
            .into_iter()
            .skip(query.offset as usize)
            .take(query.limit as usize)
            .collect())
    }

    async fn update_scores(
        &self,
        id: &AccountId,
        scores: &InvestmentScores,
    ) -> Result<(), DomainError> {
        if self.failing_updates.read().unwrap().contains(id) {
            return Err(simulated_failure("score update"));
        }

        let mut accounts = self.accounts.write().unwrap();
        let account = accounts
            .iter_mut()
            .find(|a| a.id == *id)
            .ok_or_else(|| DomainError::NotFound(format!("Account {}", id)))?;
        account.scores = *scores;
        account.updated_at = Utc::now();
        self.score_writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// ============================================================================
// In-Memory Post Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryPostRepository {
    posts: Arc<RwLock<Vec<Post>>>,
    fail: bool,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_posts(self, posts: impl IntoIterator<Item = Post>) -> Self {
        self.posts.write().unwrap().extend(posts);
        self
    }

    /// Make every read fail with a database error
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_by_account_since(
        &self,
        account_id: &AccountId,
        since: Option<DateTime<Utc>>,
    ) -> Result<Vec<Post>, DomainError> {
        if self.fail {
            return Err(simulated_failure("post read"));
        }

        let posts = self.posts.read().unwrap();
        let mut result: Vec<Post> = posts
            .iter()
            .filter(|p| p.account_id == *account_id)
            .filter(|p| match (p.posted_at, since) {
                (Some(at), Some(since)) => at >= since,
                (Some(_), None) => true,
                (None, _) => false,
            })
            .cloned()
            .collect();
        result.sort_by_key(|p| p.posted_at);
        Ok(result)
    }

    async fn find_recent_by_account(
        &self,
        account_id: &AccountId,
        limit: u64,
    ) -> Result<Vec<Post>, DomainError> {
        if self.fail {
            return Err(simulated_failure("post read"));
        }

        let posts = self.posts.read().unwrap();
        let mut result: Vec<Post> = posts
            .iter()
            .filter(|p| p.account_id == *account_id)
            .cloned()
            .collect();
        // Newest first, undated last
        result.sort_by(|a, b| match (a.posted_at, b.posted_at) {
            (Some(x), Some(y)) => y.cmp(&x),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });
        result.truncate(limit as usize);
        Ok(result)
    }
}

// ============================================================================
// In-Memory Metric Snapshot Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryMetricSnapshotRepository {
    snapshots: Arc<RwLock<Vec<MetricSnapshot>>>,
}

impl InMemoryMetricSnapshotRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(self, snapshot: MetricSnapshot) -> Self {
        self.snapshots.write().unwrap().push(snapshot);
        self
    }

    pub fn with_snapshots(self, snapshots: impl IntoIterator<Item = MetricSnapshot>) -> Self {
        self.snapshots.write().unwrap().extend(snapshots);
        self
    }
}

#[async_trait]
impl MetricSnapshotRepository for InMemoryMetricSnapshotRepository {
    async fn find_by_account_since(
        &self,
        account_id: &AccountId,
        since: Option<DateTime<Utc>>,
    ) -> Result<Vec<MetricSnapshot>, DomainError> {
        let snapshots = self.snapshots.read().unwrap();
        let mut result: Vec<MetricSnapshot> = snapshots
            .iter()
            .filter(|s| s.account_id == *account_id)
            .filter(|s| since.map_or(true, |since| s.recorded_at >= since))
            .cloned()
            .collect();
        result.sort_by_key(|s| s.recorded_at);
        Ok(result)
    }

    async fn find_since(&self, since: DateTime<Utc>) -> Result<Vec<MetricSnapshot>, DomainError> {
        let snapshots = self.snapshots.read().unwrap();
        let mut result: Vec<MetricSnapshot> = snapshots
            .iter()
            .filter(|s| s.recorded_at >= since)
            .cloned()
            .collect();
        result.sort_by_key(|s| s.recorded_at);
        Ok(result)
    }
}

// ============================================================================
// In-Memory Audience Snapshot Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryAudienceSnapshotRepository {
    snapshots: Arc<RwLock<Vec<AudienceSnapshot>>>,
}

impl InMemoryAudienceSnapshotRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(self, snapshot: AudienceSnapshot) -> Self {
        self.snapshots.write().unwrap().push(snapshot);
        self
    }
}

#[async_trait]
impl AudienceSnapshotRepository for InMemoryAudienceSnapshotRepository {
    async fn find_latest(
        &self,
        account_id: &AccountId,
    ) -> Result<Option<AudienceSnapshot>, DomainError> {
        let snapshots = self.snapshots.read().unwrap();
        Ok(snapshots
            .iter()
            .filter(|s| s.account_id == *account_id)
            .max_by_key(|s| s.recorded_at)
            .cloned())
    }

    async fn find_latest_per_account(&self) -> Result<Vec<AudienceSnapshot>, DomainError> {
        let snapshots = self.snapshots.read().unwrap();
        let mut latest: HashMap<AccountId, &AudienceSnapshot> = HashMap::new();
        for snapshot in snapshots.iter() {
            latest
                .entry(snapshot.account_id)
                .and_modify(|current| {
                    if snapshot.recorded_at >= current.recorded_at {
                        *current = snapshot;
                    }
                })
                .or_insert(snapshot);
        }
        Ok(latest.into_values().cloned().collect())
    }
}
