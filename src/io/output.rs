//! Result writers.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::cli::OutputFormat;
use crate::core::{Impact, Result};

/// Writes the classification result to `output`, or stdout when absent.
pub fn write_impact(impact: &Impact, format: OutputFormat, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => write_to(impact, format, &mut File::create(path)?),
        None => write_to(impact, format, &mut io::stdout().lock()),
    }
}

fn write_to<W: Write>(impact: &Impact, format: OutputFormat, writer: &mut W) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, impact)?;
            writeln!(writer)?;
        }
        OutputFormat::Terminal => {
            for (step, units) in impact {
                writeln!(writer, "{}:", step)?;
                for unit in units {
                    writeln!(writer, "  {}", unit)?;
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Step;
    use std::collections::{BTreeMap, BTreeSet};

    fn sample() -> Impact {
        let mut impact = BTreeMap::new();
        impact.insert(
            Step::Build,
            BTreeSet::from(["src/Storage/Storage.csproj".to_string()]),
        );
        impact
    }

    #[test]
    fn json_output_uses_step_tokens_as_keys() {
        let mut buffer = Vec::new();
        write_to(&sample(), OutputFormat::Json, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("\"build\""));
        assert!(text.contains("src/Storage/Storage.csproj"));
    }

    #[test]
    fn terminal_output_lists_units_under_each_step() {
        let mut buffer = Vec::new();
        write_to(&sample(), OutputFormat::Terminal, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("build:\n"));
        assert!(text.contains("  src/Storage/Storage.csproj\n"));
    }
}
