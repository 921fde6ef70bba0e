use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "impactmap")]
#[command(about = "Change-impact classifier for CI pipelines", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify changed files into affected pipeline steps and build units
    Changes {
        /// Changed file paths, repo-relative with forward slashes
        files: Vec<String>,

        /// Read additional changed paths from a file, one per line
        #[arg(long)]
        from_file: Option<PathBuf>,

        /// YAML rule configuration file
        #[arg(long)]
        rules: PathBuf,

        #[command(flatten)]
        inputs: MapArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Compute the full impact of one named module across every step
    Module {
        /// Module name
        name: String,

        #[command(flatten)]
        inputs: MapArgs,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args, Debug)]
pub struct MapArgs {
    /// JSON module-to-project-file map
    #[arg(long)]
    pub project_map: PathBuf,

    /// JSON module map, used only for module-mode listing
    #[arg(long)]
    pub module_map: Option<PathBuf>,

    /// Repository root for the fixed project-directory scan
    #[arg(long, default_value = ".")]
    pub repo_root: PathBuf,
}

#[derive(Args, Debug)]
pub struct OutputArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Terminal,
}
