//! Expansion of per-step module scopes into concrete build units.
//!
//! Each step has its own strategy: build and test resolve modules to
//! project files and partition them on the `Test` path marker; the four
//! analysis steps normalize resolved project paths back to canonical
//! module names.

pub mod map;

pub use map::ProjectMap;

use std::collections::BTreeSet;

use crate::classify::paths::module_from_unit_path;
use crate::core::{Impact, ModuleScopes, ScopeSet, Step};
use crate::telemetry::{Event, TelemetrySink};

/// Project file always appended to the test step's result.
pub const TEST_FRAMEWORK_PROJECT: &str = "tools/TestFx/TestFx.csproj";

/// Directory whose project files are part of every build, regardless of
/// scope.
pub const ACCOUNTS_DIR: &str = "src/Accounts";

/// Path marker separating test projects from buildable projects.
const TEST_MARKER: &str = "Test";

/// Enumerates project files under a repo-relative directory. The build
/// strategy is the only consumer; tests substitute a canned listing.
pub trait ProjectScanner {
    fn project_files(&self, dir: &str) -> Vec<String>;
}

/// Expands accumulated scopes step by step.
pub struct Expander<'a> {
    map: &'a ProjectMap,
    scanner: &'a dyn ProjectScanner,
    sink: &'a dyn TelemetrySink,
}

impl<'a> Expander<'a> {
    pub fn new(
        map: &'a ProjectMap,
        scanner: &'a dyn ProjectScanner,
        sink: &'a dyn TelemetrySink,
    ) -> Self {
        Self { map, scanner, sink }
    }

    /// Expands every step present in `scopes` with its step-specific
    /// strategy.
    pub fn expand(&self, scopes: &ModuleScopes) -> Impact {
        scopes
            .iter()
            .map(|(step, scope)| (*step, self.expand_step(*step, scope)))
            .collect()
    }

    /// Full impact of one named module across all six steps, bypassing
    /// pattern matching.
    pub fn impact_of_module(&self, module: &str) -> Impact {
        self.expand(&ModuleScopes::singleton(module))
    }

    fn expand_step(&self, step: Step, scope: &ScopeSet) -> BTreeSet<String> {
        let modules = self.modules_in_scope(scope);
        match step {
            Step::Build => self.expand_build(&modules),
            Step::Test => self.expand_test(&modules),
            _ => self.expand_analysis(&modules),
        }
    }

    /// `All` covers every module the project map knows about.
    fn modules_in_scope(&self, scope: &ScopeSet) -> Vec<String> {
        match scope {
            ScopeSet::All => self.map.modules().map(str::to_string).collect(),
            ScopeSet::Modules(set) => set.iter().cloned().collect(),
        }
    }

    fn resolve(&self, module: &str) -> Vec<String> {
        let units = self.map.resolve(module);
        if units.is_empty() {
            self.sink.record(Event::UnmappedModule { module });
        }
        units
    }

    fn expand_build(&self, modules: &[String]) -> BTreeSet<String> {
        let mut units: BTreeSet<String> = modules
            .iter()
            .flat_map(|module| self.resolve(module))
            .filter(|unit| !unit.contains(TEST_MARKER))
            .collect();
        units.extend(self.scanner.project_files(ACCOUNTS_DIR));
        units
    }

    fn expand_test(&self, modules: &[String]) -> BTreeSet<String> {
        let mut units: BTreeSet<String> = modules
            .iter()
            .flat_map(|module| self.resolve(module))
            .filter(|unit| unit.contains(TEST_MARKER))
            .collect();
        units.insert(TEST_FRAMEWORK_PROJECT.to_string());
        units
    }

    /// Normalizes whatever the scope referenced to canonical module names
    /// reachable from the map. Unit paths without a `src` component are
    /// skipped.
    fn expand_analysis(&self, modules: &[String]) -> BTreeSet<String> {
        modules
            .iter()
            .flat_map(|module| self.resolve(module))
            .filter_map(|unit| module_from_unit_path(&unit).map(str::to_string))
            .collect()
    }
}
