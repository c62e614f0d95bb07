//! Feedback persistence.
//!
//! One canonical feedback contract: list, append, like, admin reply. Stores
//! are injected behind [`FeedbackStore`] so callers and tests pick the
//! backend; [`JsonFileStore`] matches the production JSON-file layout and
//! [`InMemoryStore`] backs tests and demos. Semantics are last-write-wins
//! with no locking across processes; that is acceptable for the
//! single-process, low-traffic scope of the feature.

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::InMemoryStore;

use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored user comment with its moderation state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub id: String,
    pub name: String,
    pub email: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub likes: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply: Option<String>,
}

/// User-submitted fields of a new feedback entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFeedback {
    pub name: String,
    pub email: String,
    pub text: String,
}

/// Storage contract for the feedback feature
pub trait FeedbackStore: Send + Sync {
    /// List all feedback, newest first
    fn list(&self) -> Result<Vec<Feedback>>;

    /// Append a new entry; assigns id, timestamp, and zero likes
    fn append(&self, feedback: NewFeedback) -> Result<Feedback>;

    /// Increment the like counter of an entry, returning the new count
    fn increment_likes(&self, id: &str) -> Result<u32>;

    /// Attach or replace the admin reply of an entry
    fn set_reply(&self, id: &str, reply: &str) -> Result<()>;
}

pub(crate) fn build_entry(feedback: NewFeedback) -> Feedback {
    Feedback {
        id: uuid::Uuid::new_v4().to_string(),
        name: feedback.name,
        email: feedback.email,
        text: feedback.text,
        timestamp: Utc::now(),
        likes: 0,
        reply: None,
    }
}
