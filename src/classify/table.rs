//! Ordered pattern-rule table compiled from configuration.

use regex::Regex;

use crate::config::RuleEntry;
use crate::core::{Result, StepDirective};

/// One configured rule: an alternation over the rule's glob patterns plus
/// the directives that fire when a file matches any of them.
#[derive(Debug)]
pub struct Rule {
    matcher: Regex,
    directives: Vec<StepDirective>,
}

impl Rule {
    fn compile(entry: &RuleEntry) -> Result<Rule> {
        let alternation = entry
            .patterns
            .iter()
            .map(|pattern| format!("(?:{})", glob_to_regex(pattern)))
            .collect::<Vec<_>>()
            .join("|");
        let matcher = Regex::new(&format!("^(?:{})$", alternation))?;
        let directives = entry
            .steps
            .iter()
            .map(|raw| StepDirective::parse(raw))
            .collect::<Result<Vec<_>>>()?;
        Ok(Rule {
            matcher,
            directives,
        })
    }

    pub fn matches(&self, path: &str) -> bool {
        self.matcher.is_match(path)
    }

    pub fn directives(&self) -> &[StepDirective] {
        &self.directives
    }
}

/// Rules in configuration order. Order is fixed at compile time and never
/// changes at runtime.
#[derive(Debug, Default)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    pub fn compile(entries: &[RuleEntry]) -> Result<RuleTable> {
        let rules = entries
            .iter()
            .map(Rule::compile)
            .collect::<Result<Vec<_>>>()?;
        Ok(RuleTable { rules })
    }

    /// First rule matching `path`, in table order, with its index. Later
    /// rules are never consulted for that path.
    pub fn first_match(&self, path: &str) -> Option<(usize, &Rule)> {
        self.rules
            .iter()
            .enumerate()
            .find(|(_, rule)| rule.matches(path))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Translates one glob pattern into a regex fragment: `**` matches any
/// sequence of characters, path separators included; everything else is
/// literal.
fn glob_to_regex(pattern: &str) -> String {
    pattern
        .split("**")
        .map(|fragment| regex::escape(fragment))
        .collect::<Vec<_>>()
        .join(".*")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(patterns: &[&str], steps: &[&str]) -> RuleEntry {
        RuleEntry {
            patterns: patterns.iter().map(|p| p.to_string()).collect(),
            steps: steps.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn double_star_spans_path_segments() {
        let table =
            RuleTable::compile(&[entry(&["src/Storage/**"], &["build:module"])]).unwrap();
        assert!(table.first_match("src/Storage/Foo.cs").is_some());
        assert!(table.first_match("src/Storage/nested/deep/Bar.cs").is_some());
        assert!(table.first_match("src/Compute/Foo.cs").is_none());
    }

    #[test]
    fn bare_double_star_matches_everything() {
        let table = RuleTable::compile(&[entry(&["**"], &["build:module"])]).unwrap();
        assert!(table.first_match("anything/at/all.txt").is_some());
    }

    #[test]
    fn literal_dots_are_not_wildcards() {
        let table = RuleTable::compile(&[entry(&["setup.cfg"], &["build:all"])]).unwrap();
        assert!(table.first_match("setup.cfg").is_some());
        assert!(table.first_match("setupXcfg").is_none());
    }

    #[test]
    fn any_pattern_in_a_rule_matches() {
        let table = RuleTable::compile(&[entry(
            &["docs/**", "tools/**"],
            &["help-analysis:all"],
        )])
        .unwrap();
        assert!(table.first_match("docs/readme.md").is_some());
        assert!(table.first_match("tools/build.ps1").is_some());
        assert!(table.first_match("src/Storage/Foo.cs").is_none());
    }

    #[test]
    fn first_matching_rule_wins() {
        let table = RuleTable::compile(&[
            entry(&["docs/**"], &["build:all"]),
            entry(&["**"], &["build:module"]),
        ])
        .unwrap();
        let (index, _) = table.first_match("docs/readme.md").unwrap();
        assert_eq!(index, 0);
        let (index, _) = table.first_match("src/Foo/x.cs").unwrap();
        assert_eq!(index, 1);
    }

    #[test]
    fn malformed_directive_fails_compilation() {
        let result = RuleTable::compile(&[entry(&["**"], &["buildall"])]);
        assert!(result.is_err());
    }
}
