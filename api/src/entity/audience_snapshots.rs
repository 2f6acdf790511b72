//! `SeaORM` Entity for the audience_snapshots table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "audience_snapshots")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub account_id: Uuid,
    pub recorded_at: DateTimeWithTimeZone,
    #[sea_orm(column_type = "Double")]
    pub authentic_followers_ratio: f64,
    #[sea_orm(column_type = "Double")]
    pub bot_followers_ratio: f64,
    #[sea_orm(column_type = "Double")]
    pub inactive_followers_ratio: f64,
    #[sea_orm(column_type = "Double")]
    pub engagement_rate: f64,
    #[sea_orm(column_type = "Double")]
    pub loyalty_score: f64,
    #[sea_orm(column_type = "Double")]
    pub purchasing_power_score: f64,
    #[sea_orm(column_type = "Double")]
    pub brand_affinity_score: f64,
    #[sea_orm(column_type = "Double")]
    pub influence_multiplier: f64,
    #[sea_orm(column_type = "JsonBinary")]
    pub interest_categories: Json,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub age_distribution: Option<Json>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub gender_distribution: Option<Json>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub location_distribution: Option<Json>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::accounts::Entity",
        from = "Column::AccountId",
        to = "super::accounts::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Accounts,
}

impl Related<super::accounts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Accounts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
