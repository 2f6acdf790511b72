//! Admin API key authentication middleware

use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};
use sha2::{Digest, Sha256};

use crate::error::AppError;
use crate::AppState;

/// Hash an API key using SHA-256
pub fn hash_api_key(api_key: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(api_key.as_bytes());
    hex::encode(hasher.finalize())
}

/// Extract the API key from the Authorization header
fn extract_api_key(request: &Request<Body>) -> Option<&str> {
    request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
}

/// Whether `presented` matches the configured admin key hash
fn key_matches(presented: &str, expected_hash: &str) -> bool {
    hash_api_key(presented) == expected_hash
}

/// Admin authentication middleware
///
/// Guards the routes that write scores. Without a configured admin key every
/// request is rejected.
pub async fn admin_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let expected = state
        .admin_key_hash
        .as_deref()
        .ok_or(AppError::Unauthorized)?;

    let api_key = extract_api_key(&request).ok_or(AppError::Unauthorized)?;

    if !key_matches(api_key, expected) {
        tracing::warn!(path = %request.uri().path(), "Rejected admin request");
        return Err(AppError::Unauthorized);
    }

    Ok(next.run(request).await)
}
