//! PostgreSQL adapter for PostRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::NullOrdering, ColumnTrait, DatabaseConnection, EntityTrait, Order, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::domain::entities::{AccountId, MediaType, Post, PostId};
use crate::domain::ports::PostRepository;
use crate::entity::posts;
use crate::error::DomainError;

/// PostgreSQL implementation of PostRepository
pub struct PostgresPostRepository {
    db: DatabaseConnection,
}

impl PostgresPostRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_by_account_since(
        &self,
        account_id: &AccountId,
        since: Option<DateTime<Utc>>,
    ) -> Result<Vec<Post>, DomainError> {
        let mut select = posts::Entity::find()
            .filter(posts::Column::AccountId.eq(account_id.0))
            .filter(posts::Column::PostedAt.is_not_null());

        if let Some(since) = since {
            select = select.filter(posts::Column::PostedAt.gte(since.fixed_offset()));
        }

        let results = select
            .order_by_asc(posts::Column::PostedAt)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_recent_by_account(
        &self,
        account_id: &AccountId,
        limit: u64,
    ) -> Result<Vec<Post>, DomainError> {
        let results = posts::Entity::find()
            .filter(posts::Column::AccountId.eq(account_id.0))
            .order_by_with_nulls(posts::Column::PostedAt, Order::Desc, NullOrdering::Last)
            .order_by_asc(posts::Column::Id)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }
}

/// Decode a stored media tag; unknown tags read as Image
fn media_type(raw: &str) -> MediaType {
    raw.parse().unwrap_or_else(|_| {
        tracing::warn!(media_type = %raw, "Unknown media type on post, treating as image");
        MediaType::Image
    })
}

impl From<posts::Model> for Post {
    fn from(model: posts::Model) -> Self {
        Post {
            id: PostId(model.id),
            account_id: AccountId(model.account_id),
            external_id: model.external_id,
            posted_at: model.posted_at.map(|dt| dt.with_timezone(&Utc)),
            like_count: model.like_count,
            comment_count: model.comment_count,
            media_type: media_type(&model.media_type),
            caption: model.caption,
            hashtags: model
                .hashtags
                .and_then(|v| serde_json::from_value(v).ok()),
            is_sponsored: model.is_sponsored,
        }
    }
}
