//! Connection bootstrap for the notebook slot.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections.
//! - Create the slot table before returning a usable connection.
//!
//! # Invariants
//! - Returned connections have the `slots` table created.
//! - Bootstrap is idempotent for an existing slot database.

use super::{SlotError, SlotResult};
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens the slot database file and ensures the slot schema exists.
///
/// # Side effects
/// - Emits `slot_open` logging events with duration and status.
pub fn open_slot(path: impl AsRef<Path>) -> SlotResult<Connection> {
    let started_at = Instant::now();
    info!("event=slot_open module=storage status=start mode=file");
    let result = Connection::open(path)
        .map_err(SlotError::from)
        .and_then(bootstrap_connection);
    log_open_outcome("file", started_at, &result);
    result
}

/// Opens an in-memory slot database and ensures the slot schema exists.
///
/// # Side effects
/// - Emits `slot_open` logging events with duration and status.
pub fn open_slot_in_memory() -> SlotResult<Connection> {
    let started_at = Instant::now();
    info!("event=slot_open module=storage status=start mode=memory");
    let result = Connection::open_in_memory()
        .map_err(SlotError::from)
        .and_then(bootstrap_connection);
    log_open_outcome("memory", started_at, &result);
    result
}

fn bootstrap_connection(conn: Connection) -> SlotResult<Connection> {
    conn.busy_timeout(BUSY_TIMEOUT)?;
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS slots (
            name TEXT PRIMARY KEY NOT NULL,
            payload TEXT NOT NULL
        );",
    )?;
    Ok(conn)
}

fn log_open_outcome(mode: &str, started_at: Instant, result: &SlotResult<Connection>) {
    let duration_ms = started_at.elapsed().as_millis();
    match result {
        Ok(_) => info!("event=slot_open module=storage status=ok mode={mode} duration_ms={duration_ms}"),
        Err(err) => error!(
            "event=slot_open module=storage status=error mode={mode} duration_ms={duration_ms} error={err}"
        ),
    }
}
