//! Post domain entity
//!
//! A single published post belonging to an account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::AccountId;

/// Unique identifier for a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PostId(pub Uuid);

impl PostId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PostId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Media kind of a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaType {
    Image,
    Video,
    Carousel,
}

impl MediaType {
    /// Number of distinct media types
    pub const COUNT: usize = 3;
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaType::Image => write!(f, "image"),
            MediaType::Video => write!(f, "video"),
            MediaType::Carousel => write!(f, "carousel"),
        }
    }
}

impl std::str::FromStr for MediaType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "image" => Ok(MediaType::Image),
            "video" => Ok(MediaType::Video),
            "carousel" | "carousel_album" => Ok(MediaType::Carousel),
            _ => Err(format!("Unknown media type: {}", s)),
        }
    }
}

/// A post published by an account
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    pub id: PostId,
    pub account_id: AccountId,
    /// Platform-side identifier
    pub external_id: String,
    pub posted_at: Option<DateTime<Utc>>,
    pub like_count: i64,
    pub comment_count: i64,
    pub media_type: MediaType,
    pub caption: Option<String>,
    pub hashtags: Option<Vec<String>>,
    pub is_sponsored: bool,
}

impl Post {
    /// Likes plus comments
    pub fn interactions(&self) -> i64 {
        self.like_count.saturating_add(self.comment_count)
    }

    pub fn hashtag_count(&self) -> usize {
        self.hashtags.as_ref().map_or(0, Vec::len)
    }
}
