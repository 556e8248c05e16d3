/// Path utilities for turning view files into identifiers
///
/// All functions are **pure**: they only look at the path text and never touch
/// the file system.

use std::path::{Component, Path};

/// Converts a view file path into a dotted module identifier
///
/// **Pure function**: the extension is stripped and every separator becomes a
/// dot. Root, prefix and `.` components are skipped so absolute and `./`
/// prefixed paths produce the same identifier shape.
///
/// # Examples
///
/// ```
/// use samurai_router::path::get_module_path;
/// use std::path::Path;
///
/// assert_eq!(get_module_path(Path::new("views/colors/add.rs")), "views.colors.add");
/// assert_eq!(get_module_path(Path::new("views/__init__.rs")), "views.__init__");
/// assert_eq!(get_module_path(Path::new("./views/about.rs")), "views.about");
/// ```
pub fn get_module_path(file: &Path) -> String {
    let without_ext = file.with_extension("");

    without_ext
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy()),
            Component::ParentDir => Some("..".into()),
            Component::RootDir | Component::CurDir | Component::Prefix(_) => None,
        })
        .collect::<Vec<_>>()
        .join(".")
}

/// Returns the file name without its extension
///
/// # Examples
///
/// ```
/// use samurai_router::path::file_stem;
/// use std::path::Path;
///
/// assert_eq!(file_stem(Path::new("views/colors/<slug:slug>.rs")), "<slug:slug>");
/// ```
pub fn file_stem(file: &Path) -> String {
    file.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Returns the name of the directory directly containing `file`
///
/// Empty when the file has no named parent.
pub fn parent_name(file: &Path) -> String {
    file.parent()
        .and_then(Path::file_name)
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Joins a file's parent directory (relative to `start_dir`) with its stem
///
/// Separators are normalized to `/` and leading/trailing slashes are trimmed.
/// If `file` does not live under `start_dir` the full parent path is used.
///
/// # Examples
///
/// ```
/// use samurai_router::path::relative_stem;
/// use std::path::Path;
///
/// let file = Path::new("views/colors/add.rs");
/// assert_eq!(relative_stem(file, Path::new("views")), "colors/add");
/// assert_eq!(relative_stem(Path::new("views/about.rs"), Path::new("views")), "about");
/// ```
pub fn relative_stem(file: &Path, start_dir: &Path) -> String {
    let parent = file.parent().unwrap_or_else(|| Path::new(""));
    let relative_parent = parent.strip_prefix(start_dir).unwrap_or(parent);

    let mut segments: Vec<String> = relative_parent
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_string()),
            Component::RootDir | Component::CurDir | Component::Prefix(_) => None,
        })
        .collect();
    segments.push(file_stem(file));

    segments.join("/").trim_matches('/').to_string()
}
