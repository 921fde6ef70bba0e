//! Loading of the rule configuration and the two JSON map files.

use std::collections::HashMap;
use std::fs;
use std::io::{BufReader, Read};
use std::path::Path;

use super::RuleConfig;
use crate::core::{Error, Result};
use crate::expand::ProjectMap;

/// Pure function to read file contents through a buffered reader
fn read_file(path: &Path) -> std::io::Result<String> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Loads and parses the YAML rule configuration. An absent or malformed
/// file aborts the invocation with a configuration error.
pub fn load_rules(path: &Path) -> Result<RuleConfig> {
    let contents = read_file(path).map_err(|e| {
        Error::Configuration(format!("cannot read rule file {}: {}", path.display(), e))
    })?;
    serde_yaml::from_str(&contents).map_err(|e| {
        Error::Configuration(format!("cannot parse rule file {}: {}", path.display(), e))
    })
}

/// Validates a map-file path argument: it must be supplied and exist on
/// disk. Errors name the offending parameter.
pub fn require_map_path<'a>(name: &str, path: Option<&'a Path>) -> Result<&'a Path> {
    let path = path.ok_or_else(|| Error::MissingArgument {
        name: name.to_string(),
    })?;
    if !path.exists() {
        return Err(Error::NotFound {
            name: name.to_string(),
            path: path.to_path_buf(),
        });
    }
    Ok(path)
}

/// Loads the module→project-file map.
pub fn load_project_map(name: &str, path: Option<&Path>) -> Result<ProjectMap> {
    let path = require_map_path(name, path)?;
    let entries: HashMap<String, Vec<String>> = serde_json::from_str(&read_file(path)?)?;
    log::debug!("loaded {} project-map entries from {}", entries.len(), path.display());
    Ok(ProjectMap::new(entries))
}

/// Loads the opaque module map. The primary computation never reads it;
/// it is carried for module-mode listing only.
pub fn load_module_map(name: &str, path: Option<&Path>) -> Result<HashMap<String, Vec<String>>> {
    let path = require_map_path(name, path)?;
    Ok(serde_json::from_str(&read_file(path)?)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    #[test]
    fn missing_path_argument_names_the_parameter() {
        let err = require_map_path("project-map", None).unwrap_err();
        assert!(matches!(err, Error::MissingArgument { name } if name == "project-map"));
    }

    #[test]
    fn nonexistent_path_names_the_parameter() {
        let missing = PathBuf::from("/definitely/not/here.json");
        let err = require_map_path("module-map", Some(&missing)).unwrap_err();
        assert!(matches!(err, Error::NotFound { name, .. } if name == "module-map"));
    }

    #[test]
    fn absent_rule_file_is_a_configuration_error() {
        let err = load_rules(Path::new("/definitely/not/rules.yml")).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn malformed_rule_file_is_a_configuration_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "rules: {{ not a list").unwrap();
        let err = load_rules(file.path()).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn project_map_parses_from_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"Storage": ["src/Storage/Storage.csproj"]}}"#).unwrap();
        let map = load_project_map("project-map", Some(file.path())).unwrap();
        assert_eq!(map.resolve("Storage"), vec!["src/Storage/Storage.csproj"]);
    }
}
