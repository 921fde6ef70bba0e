//! Shared fixtures for integration tests.
#![allow(dead_code)]

use impactmap::{ProjectMap, ProjectScanner, RuleEntry, RuleTable};

/// Scanner returning a canned listing instead of touching the filesystem.
pub struct StubScanner(pub Vec<String>);

impl StubScanner {
    pub fn empty() -> Self {
        StubScanner(Vec::new())
    }
}

impl ProjectScanner for StubScanner {
    fn project_files(&self, _dir: &str) -> Vec<String> {
        self.0.clone()
    }
}

pub fn project_map(entries: &[(&str, &[&str])]) -> ProjectMap {
    ProjectMap::new(
        entries
            .iter()
            .map(|(key, units)| {
                (
                    key.to_string(),
                    units.iter().map(|u| u.to_string()).collect(),
                )
            })
            .collect(),
    )
}

pub fn rule_table(entries: &[(&[&str], &[&str])]) -> RuleTable {
    let entries: Vec<RuleEntry> = entries
        .iter()
        .map(|(patterns, steps)| RuleEntry {
            patterns: patterns.iter().map(|p| p.to_string()).collect(),
            steps: steps.iter().map(|s| s.to_string()).collect(),
        })
        .collect();
    RuleTable::compile(&entries).expect("fixture rules must compile")
}
