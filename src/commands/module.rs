//! The `module` command: full impact of one named module.

use crate::cli::{MapArgs, OutputArgs};
use crate::config::loader;
use crate::core::Result;
use crate::expand::Expander;
use crate::io::output::write_impact;
use crate::io::scan::WalkdirScanner;
use crate::telemetry::{Event, LogSink, TelemetrySink};

pub struct ModuleConfig {
    pub name: String,
    pub inputs: MapArgs,
    pub output: OutputArgs,
}

pub fn run_module(config: ModuleConfig) -> Result<()> {
    let map = loader::load_project_map("project-map", Some(&config.inputs.project_map))?;
    let sink = LogSink;

    // The module map stays outside the computation; its entry for the
    // target module is only reported.
    if let Some(path) = &config.inputs.module_map {
        let module_map = loader::load_module_map("module-map", Some(path))?;
        if let Some(entries) = module_map.get(&config.name) {
            sink.record(Event::ModuleMapListing {
                module: &config.name,
                entries,
            });
        }
    }

    let scanner = WalkdirScanner::new(&config.inputs.repo_root);
    let impact = Expander::new(&map, &scanner, &sink).impact_of_module(&config.name);
    write_impact(&impact, config.output.format, config.output.output.as_deref())
}
