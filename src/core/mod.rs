//! Core domain types and shared errors.

pub mod errors;
pub mod types;

pub use errors::{Error, Result};
pub use types::{Impact, ModuleScopes, Scope, ScopeSet, Step, StepDirective};
