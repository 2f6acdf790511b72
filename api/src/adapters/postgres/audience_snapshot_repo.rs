//! PostgreSQL adapter for AudienceSnapshotRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::domain::entities::{AccountId, AudienceSnapshot, Distribution};
use crate::domain::ports::AudienceSnapshotRepository;
use crate::entity::audience_snapshots;
use crate::error::DomainError;

/// PostgreSQL implementation of AudienceSnapshotRepository
pub struct PostgresAudienceSnapshotRepository {
    db: DatabaseConnection,
}

impl PostgresAudienceSnapshotRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AudienceSnapshotRepository for PostgresAudienceSnapshotRepository {
    async fn find_latest(
        &self,
        account_id: &AccountId,
    ) -> Result<Option<AudienceSnapshot>, DomainError> {
        let result = audience_snapshots::Entity::find()
            .filter(audience_snapshots::Column::AccountId.eq(account_id.0))
            .order_by_desc(audience_snapshots::Column::RecordedAt)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_latest_per_account(&self) -> Result<Vec<AudienceSnapshot>, DomainError> {
        // DISTINCT ON keeps the first row per account under this ordering
        let results = audience_snapshots::Entity::find()
            .distinct_on([audience_snapshots::Column::AccountId])
            .order_by_asc(audience_snapshots::Column::AccountId)
            .order_by_desc(audience_snapshots::Column::RecordedAt)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }
}

/// Decode a JSONB label map; malformed data reads as empty
fn distribution(value: serde_json::Value) -> Distribution {
    serde_json::from_value(value).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Malformed distribution in audience snapshot");
        Distribution::new()
    })
}

impl From<audience_snapshots::Model> for AudienceSnapshot {
    fn from(model: audience_snapshots::Model) -> Self {
        AudienceSnapshot {
            id: model.id,
            account_id: AccountId(model.account_id),
            recorded_at: model.recorded_at.with_timezone(&Utc),
            authentic_followers_ratio: model.authentic_followers_ratio,
            bot_followers_ratio: model.bot_followers_ratio,
            inactive_followers_ratio: model.inactive_followers_ratio,
            engagement_rate: model.engagement_rate,
            loyalty_score: model.loyalty_score,
            purchasing_power_score: model.purchasing_power_score,
            brand_affinity_score: model.brand_affinity_score,
            influence_multiplier: model.influence_multiplier,
            interest_categories: distribution(model.interest_categories),
            age_distribution: model.age_distribution.map(distribution),
            gender_distribution: model.gender_distribution.map(distribution),
            location_distribution: model.location_distribution.map(distribution),
        }
    }
}
