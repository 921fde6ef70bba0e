//! CLI command implementations.
//!
//! Exactly one entry path runs per invocation: `changes` classifies a
//! changed-file list through the rule table, `module` expands one named
//! module directly.

pub mod changes;
pub mod module;

pub use changes::{run_changes, ChangesConfig};
pub use module::{run_module, ModuleConfig};
