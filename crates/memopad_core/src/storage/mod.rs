//! Durable slot storage bootstrap.
//!
//! # Responsibility
//! - Open and configure SQLite connections backing the notebook slot.
//! - Keep the slot schema ready before any state is read or written.
//!
//! # Invariants
//! - Returned connections always have the `slots` table available.
//! - The slot payload carries no schema version; it is read and replaced
//!   wholesale.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;

pub use open::{open_slot, open_slot_in_memory};

pub type SlotResult<T> = Result<T, SlotError>;

/// Storage-layer error for slot bootstrap and access.
#[derive(Debug)]
pub enum SlotError {
    Sqlite(rusqlite::Error),
}

impl Display for SlotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SlotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for SlotError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
