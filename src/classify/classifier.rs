//! First-match-wins classification of changed files into per-step scopes.

use crate::classify::paths::module_from_change_path;
use crate::classify::table::RuleTable;
use crate::core::{Error, ModuleScopes, Result, Scope};
use crate::telemetry::{Event, TelemetrySink};

/// Folds the changed-file list into per-step module scopes.
///
/// Each file takes the directive list of the first rule that matches it; a
/// file matching no rule contributes nothing. The final scopes do not
/// depend on file order: a step ends up `All` iff any matched directive
/// said `all`, otherwise it is the union of the literal and derived module
/// names seen for it.
pub fn classify_files<'a, I>(
    files: I,
    table: &RuleTable,
    sink: &dyn TelemetrySink,
) -> Result<ModuleScopes>
where
    I: IntoIterator<Item = &'a str>,
{
    files
        .into_iter()
        .try_fold(ModuleScopes::new(), |scopes, file| {
            classify_file(scopes, file, table, sink)
        })
}

fn classify_file(
    scopes: ModuleScopes,
    file: &str,
    table: &RuleTable,
    sink: &dyn TelemetrySink,
) -> Result<ModuleScopes> {
    let Some((rule_index, rule)) = table.first_match(file) else {
        sink.record(Event::UnmatchedFile { path: file });
        return Ok(scopes);
    };
    sink.record(Event::MatchedFile {
        path: file,
        rule_index,
    });
    rule.directives()
        .iter()
        .try_fold(scopes, |acc, directive| match &directive.scope {
            Scope::All => Ok(acc.widened_to_all(directive.step)),
            Scope::FromPath => {
                let module = module_from_change_path(file)
                    .ok_or_else(|| Error::ModulePath(file.to_string()))?;
                Ok(acc.with_added_module(directive.step, module))
            }
            Scope::Module(name) => Ok(acc.with_added_module(directive.step, name)),
        })
}
