//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod account_repo;
pub mod audience_snapshot_repo;
pub mod metric_snapshot_repo;
pub mod post_repo;


pub use account_repo::PostgresAccountRepository;
pub use audience_snapshot_repo::PostgresAudienceSnapshotRepository;
pub use metric_snapshot_repo::PostgresMetricSnapshotRepository;
pub use post_repo::PostgresPostRepository;
