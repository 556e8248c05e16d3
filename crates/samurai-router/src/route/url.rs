/// URL path inference
///
/// Turns a view file location into the URL pattern handed to the router.

use std::path::Path;

use crate::path::{file_stem, parent_name, relative_stem};
use crate::{InferOptions, RouteOverrides};

/// Infers the URL pattern of a view file
///
/// **Pure function**. Precedence:
///
/// 1. a non-empty `overrides.url` is used verbatim
/// 2. an index file directly inside the root views directory maps to `""`
/// 3. an index file in any other directory maps to that directory's name
/// 4. any other file maps to its path below `start_dir`, extension stripped
///
/// With `append_slash`, a non-empty result gains a trailing `/` unless it
/// already has one. The root URL stays empty.
///
/// # Examples
///
/// ```
/// use samurai_router::{get_url, InferOptions, RouteOverrides};
/// use std::path::Path;
///
/// let file = Path::new("views/colors/add.rs");
/// let start = Path::new("views");
/// let none = RouteOverrides::default();
///
/// assert_eq!(get_url(file, start, &InferOptions::default(), &none), "colors/add");
///
/// let slash = InferOptions::default().with_append_slash(true);
/// assert_eq!(get_url(file, start, &slash, &none), "colors/add/");
/// ```
pub fn get_url(
    file: &Path,
    start_dir: &Path,
    options: &InferOptions,
    overrides: &RouteOverrides,
) -> String {
    let mut url = match overrides.url() {
        Some(url) => url.to_string(),
        None if is_index(file, options) => {
            let parent = parent_name(file);
            if parent == options.root_dir_name {
                String::new()
            } else {
                parent
            }
        }
        None => relative_stem(file, start_dir),
    };

    if options.append_slash && !url.is_empty() && !url.ends_with('/') {
        url.push('/');
    }

    url
}

/// Checks whether `file` is the index view of its directory
pub fn is_index(file: &Path, options: &InferOptions) -> bool {
    file_stem(file) == options.index_stem
}
