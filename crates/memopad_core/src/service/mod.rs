//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate snapshot persistence into notebook-level operations.
//! - Keep view/host layers decoupled from storage details.

pub mod notebook;
