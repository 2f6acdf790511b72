//! Authentication

pub mod api_key;

pub use api_key::{admin_middleware, hash_api_key};
