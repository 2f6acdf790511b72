//! PostgreSQL adapter for MetricSnapshotRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::domain::entities::{AccountId, MetricSnapshot};
use crate::domain::ports::MetricSnapshotRepository;
use crate::entity::metric_snapshots;
use crate::error::DomainError;

/// PostgreSQL implementation of MetricSnapshotRepository
pub struct PostgresMetricSnapshotRepository {
    db: DatabaseConnection,
}

impl PostgresMetricSnapshotRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MetricSnapshotRepository for PostgresMetricSnapshotRepository {
    async fn find_by_account_since(
        &self,
        account_id: &AccountId,
        since: Option<DateTime<Utc>>,
    ) -> Result<Vec<MetricSnapshot>, DomainError> {
        let mut select = metric_snapshots::Entity::find()
            .filter(metric_snapshots::Column::AccountId.eq(account_id.0));

        if let Some(since) = since {
            select = select.filter(metric_snapshots::Column::RecordedAt.gte(since.fixed_offset()));
        }

        let results = select
            .order_by_asc(metric_snapshots::Column::RecordedAt)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_since(&self, since: DateTime<Utc>) -> Result<Vec<MetricSnapshot>, DomainError> {
        let results = metric_snapshots::Entity::find()
            .filter(metric_snapshots::Column::RecordedAt.gte(since.fixed_offset()))
            .order_by_asc(metric_snapshots::Column::RecordedAt)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }
}

impl From<metric_snapshots::Model> for MetricSnapshot {
    fn from(model: metric_snapshots::Model) -> Self {
        MetricSnapshot {
            id: model.id,
            account_id: AccountId(model.account_id),
            recorded_at: model.recorded_at.with_timezone(&Utc),
            follower_count: model.follower_count,
            following_count: model.following_count,
            post_count: model.post_count,
        }
    }
}
