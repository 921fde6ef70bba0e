//! Matching changed files against ordered pattern rules.

pub mod classifier;
pub mod paths;
pub mod table;

pub use classifier::classify_files;
pub use table::{Rule, RuleTable};
