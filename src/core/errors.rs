//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for impactmap operations
#[derive(Debug, Error)]
pub enum Error {
    /// Rule configuration absent or malformed
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A required invocation parameter was not supplied
    #[error("Missing required parameter: {name}")]
    MissingArgument { name: String },

    /// A path supplied for a named parameter does not exist on disk
    #[error("{name} not found: {}", path.display())]
    NotFound { name: String, path: PathBuf },

    /// Step directive without its `:` separator
    #[error("Malformed step directive: {0}")]
    Directive(String),

    /// A directive referenced a step outside the fixed pipeline set
    #[error("Unknown pipeline step: {0}")]
    UnknownStep(String),

    /// A `module`-scoped directive hit a path with no module segment
    #[error("Cannot derive module name from path: {0}")]
    ModulePath(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// YAML errors
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    /// Pattern compilation errors
    #[error(transparent)]
    Pattern(#[from] regex::Error),
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
