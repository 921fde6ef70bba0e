//! Path-derivation helpers.
//!
//! Changed-file paths and build-unit paths use forward-slash separators
//! regardless of host platform; they come from the CI diff and the project
//! maps, never from the local filesystem.

/// Module name for a changed file: the path segment immediately following
/// the first `/`.
///
/// Returns `None` when the path has no non-empty second segment.
pub fn module_from_change_path(path: &str) -> Option<&str> {
    let mut segments = path.split('/');
    segments.next()?;
    segments.next().filter(|segment| !segment.is_empty())
}

/// Module name for a build-unit path: the segment following the first
/// `src` path component.
///
/// Returns `None` when no `src` component is present or nothing follows it.
pub fn module_from_unit_path(path: &str) -> Option<&str> {
    let mut segments = path.split('/');
    segments.find(|segment| *segment == "src")?;
    segments.next().filter(|segment| !segment.is_empty())
}
