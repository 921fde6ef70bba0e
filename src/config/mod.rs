//! Configuration types for the rule file and the map files.

pub mod loader;

use serde::Deserialize;

/// One entry in the YAML rule file: glob patterns plus `step:scope`
/// directive strings, in file order.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleEntry {
    pub patterns: Vec<String>,
    pub steps: Vec<String>,
}

/// Top-level shape of the rule configuration file.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleConfig {
    pub rules: Vec<RuleEntry>,
}
