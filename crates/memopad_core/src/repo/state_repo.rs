//! Snapshot repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Serialize the whole notebook state into the named slot.
//! - Decode persisted payloads back into a snapshot, surfacing malformed
//!   data as a typed condition instead of masking it.
//!
//! # Invariants
//! - One slot name holds at most one payload row.
//! - `save_snapshot` replaces the payload wholesale.

use crate::model::memo::{Memo, MemoId};
use crate::storage::SlotError;
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Slot name holding the serialized notebook state.
pub const SLOT_NAME: &str = "memos";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for snapshot persistence.
#[derive(Debug)]
pub enum RepoError {
    Storage(SlotError),
    MalformedPayload(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::MalformedPayload(message) => {
                write!(f, "malformed notebook payload: {message}")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::MalformedPayload(_) => None,
        }
    }
}

impl From<SlotError> for RepoError {
    fn from(value: SlotError) -> Self {
        Self::Storage(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Storage(SlotError::Sqlite(value))
    }
}

/// The persisted shape of the whole notebook: the memo list plus the
/// current selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotebookSnapshot {
    pub memos: Vec<Memo>,
    #[serde(rename = "activeId")]
    pub active_id: Option<MemoId>,
}

/// Repository interface for wholesale snapshot persistence.
pub trait StateRepository {
    /// Reads the persisted snapshot.
    ///
    /// Returns `Ok(None)` when the slot has never been written. A payload
    /// that does not decode yields [`RepoError::MalformedPayload`].
    fn load_snapshot(&self) -> RepoResult<Option<NotebookSnapshot>>;

    /// Replaces the persisted snapshot with the given state.
    fn save_snapshot(&self, snapshot: &NotebookSnapshot) -> RepoResult<()>;
}

/// SQLite-backed snapshot repository over the named slot.
pub struct SqliteStateRepository<'conn> {
    conn: &'conn Connection,
    slot: &'static str,
}

impl<'conn> SqliteStateRepository<'conn> {
    /// Constructs a repository over a bootstrapped slot connection.
    pub fn new(conn: &'conn Connection) -> Self {
        Self {
            conn,
            slot: SLOT_NAME,
        }
    }
}

impl StateRepository for SqliteStateRepository<'_> {
    fn load_snapshot(&self) -> RepoResult<Option<NotebookSnapshot>> {
        let mut stmt = self
            .conn
            .prepare("SELECT payload FROM slots WHERE name = ?1;")?;
        let mut rows = stmt.query([self.slot])?;

        let Some(row) = rows.next()? else {
            return Ok(None);
        };
        let payload: String = row.get(0)?;
        let snapshot = serde_json::from_str(&payload)
            .map_err(|err| RepoError::MalformedPayload(err.to_string()))?;
        Ok(Some(snapshot))
    }

    fn save_snapshot(&self, snapshot: &NotebookSnapshot) -> RepoResult<()> {
        let payload = serde_json::to_string(snapshot)
            .map_err(|err| RepoError::MalformedPayload(err.to_string()))?;
        self.conn.execute(
            "INSERT INTO slots (name, payload) VALUES (?1, ?2)
             ON CONFLICT(name) DO UPDATE SET payload = excluded.payload;",
            params![self.slot, payload],
        )?;
        Ok(())
    }
}
