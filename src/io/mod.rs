//! Input/output: result writers and the project-file directory scan.

pub mod output;
pub mod scan;

pub use output::write_impact;
pub use scan::WalkdirScanner;
