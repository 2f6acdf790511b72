//! `SeaORM` Entity for the accounts table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub handle: String,
    pub full_name: Option<String>,
    pub follower_count: i64,
    pub following_count: i64,
    pub post_count: i64,
    pub is_private: bool,
    pub is_verified: bool,
    pub category: Option<String>,
    #[sea_orm(column_type = "Double")]
    pub overall_investment_score: f64,
    #[sea_orm(column_type = "Double")]
    pub engagement_rate: f64,
    #[sea_orm(column_type = "Double")]
    pub growth_rate: f64,
    #[sea_orm(column_type = "Double")]
    pub content_quality_score: f64,
    #[sea_orm(column_type = "Double")]
    pub audience_quality_score: f64,
    #[sea_orm(column_type = "Double")]
    pub brand_alignment_score: f64,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub last_scraped_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::posts::Entity")]
    Posts,
    #[sea_orm(has_many = "super::metric_snapshots::Entity")]
    MetricSnapshots,
    #[sea_orm(has_many = "super::audience_snapshots::Entity")]
    AudienceSnapshots,
}

impl Related<super::posts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Posts.def()
    }
}

impl Related<super::metric_snapshots::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MetricSnapshots.def()
    }
}

impl Related<super::audience_snapshots::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AudienceSnapshots.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
