//! Persistence contracts for the notebook snapshot.
//!
//! # Responsibility
//! - Define the wholesale snapshot read/write contract.
//! - Isolate SQLite and codec details from the store.
//!
//! # Invariants
//! - Snapshots are written and read as one payload; there is no partial
//!   patching of persisted state.

pub mod state_repo;
