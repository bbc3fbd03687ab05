//! External database contract.
//!
//! These records mirror the four tables served by a separate backend
//! (users, per-topic progress, quiz attempts, daily facts). No query
//! logic lives in this workspace; the structs exist so both sides agree
//! on the wire shape.

use serde::{Deserialize, Serialize};

use crate::enums::Language;

/// A registered user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: u64,
    pub username: String,
    /// Hashed credential, opaque to this application.
    pub password_hash: String,
    pub preferred_language: Language,
}

/// Per-user, per-topic completion percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicProgressRecord {
    pub user_id: u64,
    /// Topic slug, e.g. `"electricity-magnetism"`.
    pub topic: String,
    /// Completion in [0, 100].
    pub completion_percent: u8,
}

/// One completed quiz run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizAttemptRecord {
    pub user_id: Option<u64>,
    pub topic: String,
    pub difficulty: String,
    pub score: u32,
    pub total: u32,
    /// Unix timestamp (seconds).
    pub completed_at: i64,
}

/// A daily fact in one language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyFactRecord {
    pub language: Language,
    pub title: String,
    pub content: String,
    pub category: String,
    pub active: bool,
}
