//! # Samurai Router
//!
//! File-system route inference for view directories:
//! - Discovery of view files in a deterministic, descending path order
//! - Glob-based exclusion (`*time.rs`)
//! - Dotted module identifiers (`views/colors/add.rs` → `views.colors.add`)
//! - URL inference (`views/colors/add.rs` → `colors/add`)
//! - URL name inference (`colors/<slug:slug>` → `colors_slug`)
//! - Explicit per-view overrides for both URL and name
//!
//! ## Registration Order
//!
//! Routes come out in descending lexicographic order of their file paths.
//! Routers that dispatch on the first matching pattern rely on this order, so
//! it is kept stable across runs for a fixed tree.
//!
//! ## Resolution
//!
//! Each discovered file is resolved through a [`ViewResolver`] using its
//! module identifier. A resolution failure aborts the whole pass.
//!
//! ## Example
//!
//! ```no_run
//! use samurai_router::{file_patterns, InferOptions, Resolved, Result};
//! use std::path::Path;
//!
//! let options = InferOptions::default().with_append_slash(true);
//! let resolver = |module_path: &str, _file: &Path| -> Result<Resolved<String>> {
//!     Ok(Resolved::new(module_path.to_string()))
//! };
//!
//! for route in file_patterns("views", &options, &resolver).unwrap() {
//!     println!("{:<24} {:<16} {}", route.url, route.url_name, route.handler);
//! }
//! ```

use std::path::{Path, PathBuf};

use tracing::{debug, info};

// ============================================================================
// Module Declarations
// ============================================================================

mod discovery;
mod error;
pub mod path;
pub mod route;

pub use discovery::{exclude_file, get_files};
pub use error::{Result, RouteError};
pub use path::get_module_path;
pub use route::{get_url, get_url_name, INDEX_NAME};

// ============================================================================
// Core Types
// ============================================================================

/// A single inferred route: URL pattern, handler and URL name
#[derive(Debug, Clone)]
pub struct Route<H> {
    /// URL pattern like "colors/<slug:slug>" (empty for the root)
    pub url: String,
    /// Handler supplied by the resolver
    pub handler: H,
    /// Route name used for reverse lookups (never empty)
    pub url_name: String,
    /// Dotted module identifier the handler was resolved from
    pub module_path: String,
    /// View file the route was inferred from
    pub file: PathBuf,
}

impl<H> Route<H> {
    /// Returns the `(url, handler, name)` triple for router registration
    pub fn into_parts(self) -> (String, H, String) {
        (self.url, self.handler, self.url_name)
    }

    /// Replaces the handler, keeping the inferred URL and name
    pub fn map_handler<T>(self, f: impl FnOnce(H) -> T) -> Route<T> {
        Route {
            url: self.url,
            handler: f(self.handler),
            url_name: self.url_name,
            module_path: self.module_path,
            file: self.file,
        }
    }
}

/// Optional per-view overrides for the inferred URL and name
///
/// Set by the view's owner at registration time. Empty strings count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteOverrides {
    /// URL pattern used verbatim instead of the inferred one
    pub url: Option<String>,
    /// Route name used verbatim instead of the inferred one
    pub url_name: Option<String>,
}

impl RouteOverrides {
    /// Sets the URL override
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the name override
    pub fn with_url_name(mut self, name: impl Into<String>) -> Self {
        self.url_name = Some(name.into());
        self
    }

    /// Returns the URL override if it is set and non-empty
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref().filter(|url| !url.is_empty())
    }

    /// Returns the name override if it is set and non-empty
    pub fn url_name(&self) -> Option<&str> {
        self.url_name.as_deref().filter(|name| !name.is_empty())
    }
}

/// Options controlling discovery and URL inference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferOptions {
    /// Append a trailing slash to every non-empty URL
    pub append_slash: bool,
    /// Glob pattern of files to skip (empty disables exclusion)
    pub exclude: String,
    /// Extension of view files, without the dot
    pub extension: String,
    /// File stem marking the index view of a directory
    pub index_stem: String,
    /// Directory name whose index view maps to the root URL
    pub root_dir_name: String,
}

impl Default for InferOptions {
    fn default() -> Self {
        Self {
            append_slash: false,
            exclude: String::new(),
            extension: "rs".to_string(),
            index_stem: "__init__".to_string(),
            root_dir_name: "views".to_string(),
        }
    }
}

impl InferOptions {
    pub fn with_append_slash(mut self, append_slash: bool) -> Self {
        self.append_slash = append_slash;
        self
    }

    pub fn with_exclude(mut self, exclude: impl Into<String>) -> Self {
        self.exclude = exclude.into();
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_index_stem(mut self, index_stem: impl Into<String>) -> Self {
        self.index_stem = index_stem.into();
        self
    }

    pub fn with_root_dir_name(mut self, root_dir_name: impl Into<String>) -> Self {
        self.root_dir_name = root_dir_name.into();
        self
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// A resolved view: its handler and the overrides it declares
#[derive(Debug, Clone)]
pub struct Resolved<H> {
    pub handler: H,
    pub overrides: RouteOverrides,
}

impl<H> Resolved<H> {
    /// A handler without overrides
    pub fn new(handler: H) -> Self {
        Self {
            handler,
            overrides: RouteOverrides::default(),
        }
    }

    pub fn with_overrides(mut self, overrides: RouteOverrides) -> Self {
        self.overrides = overrides;
        self
    }
}

/// Resolves a module identifier to its view
///
/// This is where a view gets loaded. Implementations may run caller code or
/// read files; any error aborts the inference pass.
pub trait ViewResolver {
    type Handler;

    fn resolve(&self, module_path: &str, file: &Path) -> Result<Resolved<Self::Handler>>;
}

impl<H, F> ViewResolver for F
where
    F: Fn(&str, &Path) -> Result<Resolved<H>>,
{
    type Handler = H;

    fn resolve(&self, module_path: &str, file: &Path) -> Result<Resolved<H>> {
        self(module_path, file)
    }
}

// ============================================================================
// Inference
// ============================================================================

/// Builds the ordered route list for every view file below `start_dir`
///
/// Files are visited in [`get_files`] order. Each one is checked against the
/// exclude pattern, resolved through `resolver` using its module identifier,
/// and given a URL and name. The first error stops the pass and is returned;
/// no partial list is produced.
pub fn file_patterns<R>(
    start_dir: impl AsRef<Path>,
    options: &InferOptions,
    resolver: &R,
) -> Result<Vec<Route<R::Handler>>>
where
    R: ViewResolver + ?Sized,
{
    let start_dir = start_dir.as_ref();
    let files = get_files(start_dir, &options.extension)?;
    let mut routes = Vec::with_capacity(files.len());

    for file in files {
        if exclude_file(&file, &options.exclude)? {
            debug!(file = %file.display(), pattern = %options.exclude, "excluded view file");
            continue;
        }

        let module_path = get_module_path(&file);
        let resolved = resolver.resolve(&module_path, &file)?;

        let url = get_url(&file, start_dir, options, &resolved.overrides);
        let url_name = get_url_name(&url, resolved.overrides.url_name());

        debug!(url = %url, name = %url_name, module = %module_path, "inferred route");

        routes.push(Route {
            url,
            handler: resolved.handler,
            url_name,
            module_path,
            file,
        });
    }

    info!(
        start_dir = %start_dir.display(),
        count = routes.len(),
        "inferred routes from view directory"
    );

    Ok(routes)
}
