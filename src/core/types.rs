//! Domain types shared by classification and expansion.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::errors::{Error, Result};

/// A CI pipeline phase whose necessity is decided by the classifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Step {
    Build,
    BreakingChangeAnalysis,
    DependencyAnalysis,
    HelpAnalysis,
    SignatureAnalysis,
    Test,
}

impl Step {
    /// Every pipeline step, in output order.
    pub const ALL: [Step; 6] = [
        Step::Build,
        Step::BreakingChangeAnalysis,
        Step::DependencyAnalysis,
        Step::HelpAnalysis,
        Step::SignatureAnalysis,
        Step::Test,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Step::Build => "build",
            Step::BreakingChangeAnalysis => "breaking-change-analysis",
            Step::DependencyAnalysis => "dependency-analysis",
            Step::HelpAnalysis => "help-analysis",
            Step::SignatureAnalysis => "signature-analysis",
            Step::Test => "test",
        }
    }

    pub fn parse(token: &str) -> Result<Step> {
        Step::ALL
            .iter()
            .copied()
            .find(|step| step.as_str() == token)
            .ok_or_else(|| Error::UnknownStep(token.to_string()))
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Breadth of impact a directive assigns to a step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    /// Every build unit under the step applies.
    All,
    /// Derive the module name from the changed file's path.
    FromPath,
    /// A literal module name taken verbatim from the directive.
    Module(String),
}

/// A parsed `step:scope` directive from the rule configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepDirective {
    pub step: Step,
    pub scope: Scope,
}

impl StepDirective {
    /// Parses `stepName:scope`. The directive format is fixed by
    /// configuration, so a missing separator is fatal.
    pub fn parse(raw: &str) -> Result<StepDirective> {
        let (step, scope) = raw
            .split_once(':')
            .ok_or_else(|| Error::Directive(raw.to_string()))?;
        let scope = match scope {
            "all" => Scope::All,
            "module" => Scope::FromPath,
            name => Scope::Module(name.to_string()),
        };
        Ok(StepDirective {
            step: Step::parse(step)?,
            scope,
        })
    }
}

/// Accumulated scope for one step.
///
/// `All` absorbs: once a step reaches `All`, nothing is added or removed,
/// so the final value for a step is `All` iff any matched directive said
/// `all`, otherwise the union of the module names seen for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScopeSet {
    All,
    Modules(im::OrdSet<String>),
}

impl ScopeSet {
    pub fn is_all(&self) -> bool {
        matches!(self, ScopeSet::All)
    }

    fn with_module(&self, module: &str) -> ScopeSet {
        match self {
            ScopeSet::All => ScopeSet::All,
            ScopeSet::Modules(set) => ScopeSet::Modules(set.update(module.to_string())),
        }
    }
}

/// Per-step scope accumulator produced by classification.
///
/// Clones are cheap, so the classifier folds over files returning a fresh
/// value at each step instead of mutating shared state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModuleScopes {
    scopes: im::HashMap<Step, ScopeSet>,
}

impl ModuleScopes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scope for every step, covering the single named module. Used by the
    /// target-module entry path.
    pub fn singleton(module: &str) -> Self {
        Step::ALL
            .iter()
            .fold(Self::new(), |acc, &step| acc.with_added_module(step, module))
    }

    pub fn get(&self, step: Step) -> Option<&ScopeSet> {
        self.scopes.get(&step)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Step, &ScopeSet)> {
        self.scopes.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    /// Returns the scopes with the step widened to `All`. Widening an
    /// already-`All` step is a no-op.
    pub fn widened_to_all(&self, step: Step) -> Self {
        Self {
            scopes: self.scopes.update(step, ScopeSet::All),
        }
    }

    /// Returns the scopes with `module` added under `step`, subject to
    /// absorption.
    pub fn with_added_module(&self, step: Step, module: &str) -> Self {
        let next = match self.scopes.get(&step) {
            Some(set) => set.with_module(module),
            None => ScopeSet::Modules(im::ordset![module.to_string()]),
        };
        Self {
            scopes: self.scopes.update(step, next),
        }
    }
}

/// Final classification result: build-unit paths for build/test, module
/// names for the analysis steps. Steps no matched rule referenced are
/// absent from the map.
pub type Impact = BTreeMap<Step, BTreeSet<String>>;
