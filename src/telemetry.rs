//! Injected event sink for classification diagnostics.
//!
//! The core never mutates process-global logging state; callers hand a sink
//! in and decide where events go.

/// A diagnostic event emitted while classifying or expanding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event<'a> {
    /// A changed file matched the rule at the given table index.
    MatchedFile { path: &'a str, rule_index: usize },
    /// A changed file matched no rule and was skipped.
    UnmatchedFile { path: &'a str },
    /// A module in scope resolved to no build units in the project map.
    UnmappedModule { module: &'a str },
    /// The opaque module-map entry for a target module (listing only).
    ModuleMapListing {
        module: &'a str,
        entries: &'a [String],
    },
}

pub trait TelemetrySink {
    fn record(&self, event: Event<'_>);
}

/// Forwards events to the `log` facade.
#[derive(Debug, Default)]
pub struct LogSink;

impl TelemetrySink for LogSink {
    fn record(&self, event: Event<'_>) {
        match event {
            Event::MatchedFile { path, rule_index } => {
                log::trace!("{} matched rule #{}", path, rule_index)
            }
            Event::UnmatchedFile { path } => {
                log::debug!("no rule matched {}; file skipped", path)
            }
            Event::UnmappedModule { module } => {
                log::debug!("module {} has no project-map entries", module)
            }
            Event::ModuleMapListing { module, entries } => {
                log::info!("module map lists {:?} for {}", entries, module)
            }
        }
    }
}

/// Discards every event.
#[derive(Debug, Default)]
pub struct NullSink;

impl TelemetrySink for NullSink {
    fn record(&self, _event: Event<'_>) {}
}
