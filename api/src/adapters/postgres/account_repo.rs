//! PostgreSQL adapter for AccountRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, Order, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

use crate::domain::entities::{
    Account, AccountId, AccountQuery, InvestmentScores, ScoreMetric, SortOrder,
};
use crate::domain::ports::AccountRepository;
use crate::entity::accounts;
use crate::error::DomainError;

/// PostgreSQL implementation of AccountRepository
pub struct PostgresAccountRepository {
    db: DatabaseConnection,
}

impl PostgresAccountRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Column backing a rankable metric
fn metric_column(metric: ScoreMetric) -> accounts::Column {
    match metric {
        ScoreMetric::OverallInvestmentScore => accounts::Column::OverallInvestmentScore,
        ScoreMetric::EngagementRate => accounts::Column::EngagementRate,
        ScoreMetric::GrowthRate => accounts::Column::GrowthRate,
        ScoreMetric::ContentQualityScore => accounts::Column::ContentQualityScore,
        ScoreMetric::AudienceQualityScore => accounts::Column::AudienceQualityScore,
        ScoreMetric::BrandAlignmentScore => accounts::Column::BrandAlignmentScore,
        ScoreMetric::FollowerCount => accounts::Column::FollowerCount,
    }
}

#[async_trait]
impl AccountRepository for PostgresAccountRepository {
    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, DomainError> {
        let result = accounts::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_by_handle(&self, handle: &str) -> Result<Option<Account>, DomainError> {
        let result = accounts::Entity::find()
            .filter(accounts::Column::Handle.eq(handle))
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_all(&self) -> Result<Vec<Account>, DomainError> {
        let results = accounts::Entity::find()
            .order_by_asc(accounts::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn list(&self, query: &AccountQuery) -> Result<Vec<Account>, DomainError> {
        let mut select = accounts::Entity::find();

        if let Some(min) = query.min_score {
            select = select.filter(accounts::Column::OverallInvestmentScore.gte(min));
        }
        if let Some(min) = query.min_growth {
            select = select.filter(accounts::Column::GrowthRate.gte(min));
        }
        if let Some(category) = &query.category {
            select = select.filter(accounts::Column::Category.eq(category.as_str()));
        }

        let order = match query.order {
            SortOrder::Asc => Order::Asc,
            SortOrder::Desc => Order::Desc,
        };

        let results = select
            .order_by(metric_column(query.sort_by), order)
            .order_by_asc(accounts::Column::Id)
            .offset(query.offset)
            .limit(query.limit)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn update_scores(
        &self,
        id: &AccountId,
        scores: &InvestmentScores,
    ) -> Result<(), DomainError> {
        accounts::ActiveModel {
            id: Set(id.0),
            overall_investment_score: Set(scores.overall_investment_score),
            engagement_rate: Set(scores.engagement_rate),
            growth_rate: Set(scores.growth_rate),
            content_quality_score: Set(scores.content_quality_score),
            audience_quality_score: Set(scores.audience_quality_score),
            brand_alignment_score: Set(scores.brand_alignment_score),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }
}

impl From<accounts::Model> for Account {
    fn from(model: accounts::Model) -> Self {
        Account {
            id: AccountId(model.id),
            handle: model.handle,
            full_name: model.full_name,
            follower_count: model.follower_count,
            following_count: model.following_count,
            post_count: model.post_count,
            is_private: model.is_private,
            is_verified: model.is_verified,
            category: model.category,
            scores: InvestmentScores {
                overall_investment_score: model.overall_investment_score,
                engagement_rate: model.engagement_rate,
                growth_rate: model.growth_rate,
                content_quality_score: model.content_quality_score,
                audience_quality_score: model.audience_quality_score,
                brand_alignment_score: model.brand_alignment_score,
            },
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
            last_scraped_at: model.last_scraped_at.map(|dt| dt.with_timezone(&Utc)),
        }
    }
}
