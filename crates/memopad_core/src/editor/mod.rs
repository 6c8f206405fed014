//! Editor bridge: formatting command vocabulary and surface contract.
//!
//! The rich-text engine behind the editable surface is host-provided; this
//! module only defines the stable command protocol spoken to it and the
//! session binding that keeps surface content and store state in step.

pub mod command;
pub mod session;
