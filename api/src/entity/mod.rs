//! SeaORM entities
//!
//! Table models matching `migrations/001_initial_schema.sql`.

pub mod accounts;
pub mod audience_snapshots;
pub mod metric_snapshots;
pub mod posts;
