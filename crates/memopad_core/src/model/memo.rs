//! Memo domain model.
//!
//! # Responsibility
//! - Define the canonical memo record and its creation helpers.
//!
//! # Invariants
//! - `id` is stable and never reused for another memo.
//! - `created_at` is captured once at creation and immutable thereafter.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Stable identifier for every memo.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type MemoId = Uuid;

/// A single user note: opaque markup content plus creation metadata.
///
/// `content` is a serialized markup string produced by the editing surface;
/// the core never interprets it beyond title derivation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memo {
    /// Stable global ID used for selection and persistence.
    pub id: MemoId,
    /// Serialized markup produced by the editing surface.
    pub content: String,
    /// Unix epoch milliseconds, serialized as `createdAt` to match the
    /// persisted payload naming.
    #[serde(rename = "createdAt")]
    pub created_at: i64,
}

impl Memo {
    /// Creates an empty memo with a generated stable ID and fresh timestamp.
    pub fn new() -> Self {
        Self::with_id(Uuid::new_v4(), "", now_epoch_ms())
    }

    /// Creates a memo with caller-provided identity and timestamp.
    ///
    /// For callers that already hold an identity, such as fixtures.
    pub fn with_id(id: MemoId, content: impl Into<String>, created_at: i64) -> Self {
        Self {
            id,
            content: content.into(),
            created_at,
        }
    }
}

impl Default for Memo {
    fn default() -> Self {
        Self::new()
    }
}

/// Current wall-clock time in epoch milliseconds.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis() as i64)
}
