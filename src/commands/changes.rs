//! The `changes` command: classify a changed-file list.

use std::fs;
use std::path::PathBuf;

use crate::classify::{classify_files, RuleTable};
use crate::cli::{MapArgs, OutputArgs};
use crate::config::loader;
use crate::core::{Error, Result};
use crate::expand::Expander;
use crate::io::output::write_impact;
use crate::io::scan::WalkdirScanner;
use crate::telemetry::LogSink;

pub struct ChangesConfig {
    pub files: Vec<String>,
    pub from_file: Option<PathBuf>,
    pub rules: PathBuf,
    pub inputs: MapArgs,
    pub output: OutputArgs,
}

pub fn run_changes(config: ChangesConfig) -> Result<()> {
    let files = gather_changed_files(&config)?;
    if files.is_empty() {
        return Err(Error::MissingArgument {
            name: "changed files".to_string(),
        });
    }

    let rules = loader::load_rules(&config.rules)?;
    let table = RuleTable::compile(&rules.rules)?;
    log::debug!("compiled {} rules, classifying {} files", table.len(), files.len());

    let map = loader::load_project_map("project-map", Some(&config.inputs.project_map))?;

    // The module map plays no part in classification, but a supplied path
    // is still validated.
    if let Some(path) = &config.inputs.module_map {
        loader::load_module_map("module-map", Some(path))?;
    }

    let sink = LogSink;
    let scopes = classify_files(files.iter().map(String::as_str), &table, &sink)?;

    let scanner = WalkdirScanner::new(&config.inputs.repo_root);
    let impact = Expander::new(&map, &scanner, &sink).expand(&scopes);
    write_impact(&impact, config.output.format, config.output.output.as_deref())
}

fn gather_changed_files(config: &ChangesConfig) -> Result<Vec<String>> {
    let mut files = config.files.clone();
    if let Some(path) = &config.from_file {
        let contents = fs::read_to_string(path)?;
        files.extend(
            contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string),
        );
    }
    Ok(files)
}
