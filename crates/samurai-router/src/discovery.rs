//! View file discovery and exclusion
//!
//! Discovery walks the start directory fresh on every call. Nothing is cached.

use std::cmp::Reverse;
use std::path::{Component, Path, PathBuf};

use glob::{MatchOptions, Pattern};
use walkdir::WalkDir;

use crate::error::Result;

/// Component-wise matching: `*` and `?` never cross a path separator
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Lists every view file below `start_dir` in descending path order
///
/// Only regular files whose extension equals `extension` are returned. Paths
/// keep the `start_dir` prefix, exactly as produced by the walk.
///
/// The ordering is part of the contract: paths are sorted by their full string
/// form, highest first, so deeper and later files are registered before their
/// parents. Routers with first-match dispatch rely on this.
///
/// # Errors
///
/// Fails with [`RouteError::Walk`](crate::RouteError::Walk) when the directory
/// cannot be read, including when it does not exist.
pub fn get_files(start_dir: impl AsRef<Path>, extension: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(start_dir.as_ref()) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.into_path();
        if path.extension().and_then(|s| s.to_str()) == Some(extension) {
            files.push(path);
        }
    }

    files.sort_by_cached_key(|path| Reverse(path.to_string_lossy().into_owned()));
    Ok(files)
}

/// Checks whether `file` matches the exclude glob
///
/// An empty pattern never excludes anything. Relative patterns are anchored
/// at the end of the path and compared one component at a time, so
/// `*time.rs` matches `views/current_time.rs` and `colors/*.rs` matches
/// `views/colors/add.rs`. Absolute patterns must match the whole path.
///
/// # Examples
///
/// ```
/// use samurai_router::exclude_file;
/// use std::path::Path;
///
/// let file = Path::new("views/current_time.rs");
/// assert!(exclude_file(file, "*time.rs").unwrap());
/// assert!(!exclude_file(file, "").unwrap());
/// assert!(!exclude_file(file, "colors/*.rs").unwrap());
/// ```
///
/// # Errors
///
/// A malformed pattern fails with [`RouteError::Pattern`](crate::RouteError::Pattern).
pub fn exclude_file(file: &Path, pattern: &str) -> Result<bool> {
    if pattern.is_empty() {
        return Ok(false);
    }

    let pattern_parts = path_parts(Path::new(pattern));
    let segments = pattern_parts
        .iter()
        .map(|part| Pattern::new(part))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let file_parts = path_parts(file);
    let anchored = pattern.starts_with('/');

    if segments.is_empty()
        || segments.len() > file_parts.len()
        || (anchored && segments.len() != file_parts.len())
    {
        return Ok(false);
    }

    let matched = segments
        .iter()
        .rev()
        .zip(file_parts.iter().rev())
        .all(|(segment, part)| segment.matches_with(part, MATCH_OPTIONS));

    Ok(matched)
}

/// Splits a path into the components compared by [`exclude_file`]
fn path_parts(path: &Path) -> Vec<String> {
    path.components()
        .filter_map(|component| match component {
            Component::RootDir => Some("/".to_string()),
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_string()),
            Component::CurDir | Component::Prefix(_) => None,
        })
        .collect()
}
