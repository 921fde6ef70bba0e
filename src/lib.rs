// Export modules for library usage
pub mod classify;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod expand;
pub mod io;
pub mod telemetry;

// Re-export commonly used types
pub use crate::classify::{classify_files, Rule, RuleTable};
pub use crate::config::{RuleConfig, RuleEntry};
pub use crate::core::{
    Error, Impact, ModuleScopes, Result, Scope, ScopeSet, Step, StepDirective,
};
pub use crate::expand::{Expander, ProjectMap, ProjectScanner};
pub use crate::io::output::write_impact;
pub use crate::telemetry::{Event, LogSink, NullSink, TelemetrySink};
