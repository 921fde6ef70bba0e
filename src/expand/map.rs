//! Module-to-project-file map with case-insensitive fallback lookup.

use std::collections::HashMap;

/// Parsed form of the module→project-file map.
///
/// Lookups are case-insensitive. When the bare module name is not a key,
/// the prefixed key `src/<module>/` is tried before giving up; a miss on
/// both resolves to the empty list, never an error.
#[derive(Debug, Default)]
pub struct ProjectMap {
    entries: HashMap<String, Vec<String>>,
    // lowercased key → original key
    index: HashMap<String, String>,
}

impl ProjectMap {
    pub fn new(entries: HashMap<String, Vec<String>>) -> Self {
        let index = entries
            .keys()
            .map(|key| (key.to_ascii_lowercase(), key.clone()))
            .collect();
        Self { entries, index }
    }

    /// Bare module names for every key in the map; prefixed keys are
    /// normalized to the bare name.
    pub fn modules(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|key| bare_module_name(key))
    }

    /// Build units for `module`, or the empty list when the module is
    /// unknown.
    pub fn resolve(&self, module: &str) -> Vec<String> {
        let bare = module.to_ascii_lowercase();
        let prefixed = format!("src/{}/", bare);
        self.index
            .get(&bare)
            .or_else(|| self.index.get(&prefixed))
            .and_then(|key| self.entries.get(key))
            .cloned()
            .unwrap_or_default()
    }
}

/// `src/Storage/` → `Storage`; bare keys pass through unchanged.
fn bare_module_name(key: &str) -> &str {
    key.strip_prefix("src/")
        .map(|rest| rest.trim_end_matches('/'))
        .unwrap_or(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, &[&str])]) -> ProjectMap {
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

    #[test]
    fn bare_key_lookup_is_case_insensitive() {
        let map = map(&[("Storage", &["src/Storage/Storage.csproj"])]);
        assert_eq!(map.resolve("storage"), vec!["src/Storage/Storage.csproj"]);
        assert_eq!(map.resolve("STORAGE"), vec!["src/Storage/Storage.csproj"]);
    }

    #[test]
    fn missing_bare_key_falls_back_to_prefixed_key() {
        let map = map(&[("src/Compute/", &["src/Compute/Compute.csproj"])]);
        assert_eq!(map.resolve("Compute"), vec!["src/Compute/Compute.csproj"]);
    }

    #[test]
    fn unknown_module_resolves_to_nothing() {
        let map = map(&[("Storage", &["src/Storage/Storage.csproj"])]);
        assert!(map.resolve("Network").is_empty());
    }

    #[test]
    fn modules_normalizes_prefixed_keys() {
        let map = map(&[
            ("Storage", &["src/Storage/Storage.csproj"]),
            ("src/Compute/", &["src/Compute/Compute.csproj"]),
        ]);
        let mut names: Vec<&str> = map.modules().collect();
        names.sort_unstable();
        assert_eq!(names, vec!["Compute", "Storage"]);
    }
}
