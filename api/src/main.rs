//! Influence API Server
//!
//! Scores tracked social-media accounts as investment prospects from their
//! engagement, growth, content, audience and brand fit.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Json, Router,
};
use sea_orm::Database;
use serde::Serialize;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod auth;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{
    PostgresAccountRepository, PostgresAudienceSnapshotRepository,
    PostgresMetricSnapshotRepository, PostgresPostRepository,
};
use app::{AnalyticsService, ScoringService};
use config::Config;

pub type AppScoringService = ScoringService<
    PostgresAccountRepository,
    PostgresPostRepository,
    PostgresMetricSnapshotRepository,
    PostgresAudienceSnapshotRepository,
>;

pub type AppAnalyticsService = AnalyticsService<
    PostgresAccountRepository,
    PostgresMetricSnapshotRepository,
    PostgresAudienceSnapshotRepository,
>;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub scoring_service: Arc<AppScoringService>,
    pub analytics_service: Arc<AppAnalyticsService>,
    pub account_repo: Arc<PostgresAccountRepository>,
    /// SHA-256 hex digest of the admin key, if one is configured
    pub admin_key_hash: Option<String>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Assemble the HTTP router
fn build_router(state: AppState) -> Router {
    // Rate limiting for batch rescoring: 1 req/sec sustained, burst of 2
    // PeerIpKeyExtractor keys on the socket address
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_second(1)
            .burst_size(2)
            .finish()
            .expect("Failed to build governor config"),
    );

    let batch_routes = Router::new()
        .route("/scores/batch", post(handlers::batch_update_scores))
        .layer(GovernorLayer {
            config: governor_config,
        });

    // Score writes (admin key)
    let admin_routes = Router::new()
        .route("/accounts/:id/scores", post(handlers::update_scores))
        .merge(batch_routes)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::admin_middleware,
        ));

    // Build router
    Router::new()
        // Health check (no auth)
        .route("/health", get(health))
        // Accounts (public read)
        .route("/accounts", get(handlers::list_accounts))
        .route("/accounts/:id", get(handlers::get_account))
        .route(
            "/accounts/by-handle/:handle",
            get(handlers::get_account_by_handle),
        )
        .route("/accounts/:id/scores", get(handlers::get_scores))
        // Analytics (public read)
        .route("/analytics/top", get(handlers::top_accounts))
        .route(
            "/analytics/opportunities",
            get(handlers::investment_opportunities),
        )
        .route(
            "/analytics/score-distribution",
            get(handlers::score_distribution),
        )
        .route("/analytics/categories", get(handlers::category_distribution))
        .route("/analytics/growth-trends", get(handlers::growth_trends))
        .route("/analytics/audience", get(handlers::audience_demographics))
        .merge(admin_routes)
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,influence_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Influence API...");

    // Load configuration
    let config = Config::from_env();
    tracing::info!(weights = ?config.scoring_weights, "Scoring weights loaded");

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connected");

    // Create adapters
    let account_repo = Arc::new(PostgresAccountRepository::new(db.clone()));
    let post_repo = Arc::new(PostgresPostRepository::new(db.clone()));
    let metric_repo = Arc::new(PostgresMetricSnapshotRepository::new(db.clone()));
    let audience_repo = Arc::new(PostgresAudienceSnapshotRepository::new(db.clone()));

    // Create application services
    let scoring_service = Arc::new(ScoringService::new(
        account_repo.clone(),
        post_repo,
        metric_repo.clone(),
        audience_repo.clone(),
        config.scoring_weights,
    ));

    let analytics_service = Arc::new(AnalyticsService::new(
        account_repo.clone(),
        metric_repo,
        audience_repo,
    ));

    let state = AppState {
        scoring_service,
        analytics_service,
        account_repo,
        admin_key_hash: config.admin_api_key.as_deref().map(auth::hash_api_key),
    };

    let app = build_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .expect("Server error");
}
