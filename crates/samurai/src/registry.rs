// File: src/registry.rs
// Purpose: Explicit view registry keyed by module identifier

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use samurai_router::{Resolved, RouteError, ViewResolver};
use tracing::debug;

use crate::view::View;

/// Views registered by module identifier (`views.colors.add`)
///
/// The registry is owned by the caller: views live as long as the registry
/// does and resolving the same identifier twice returns the same `Arc`.
///
/// ```
/// use samurai::{View, ViewRegistry};
///
/// let mut registry = ViewRegistry::new();
/// registry.register("views.about", View::new("views.about").with_template("About"));
///
/// assert!(registry.contains("views.about"));
/// assert_eq!(registry.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ViewRegistry {
    views: HashMap<String, Arc<View>>,
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a view, replacing any view already under `module_path`
    pub fn register(&mut self, module_path: impl Into<String>, view: View) -> Option<Arc<View>> {
        let module_path = module_path.into();
        debug!(module = %module_path, "registered view");
        self.views.insert(module_path, Arc::new(view))
    }

    /// Builder-style [`register`](Self::register)
    pub fn with_view(mut self, module_path: impl Into<String>, view: View) -> Self {
        self.register(module_path, view);
        self
    }

    pub fn get(&self, module_path: &str) -> Option<Arc<View>> {
        self.views.get(module_path).cloned()
    }

    pub fn contains(&self, module_path: &str) -> bool {
        self.views.contains_key(module_path)
    }

    pub fn remove(&mut self, module_path: &str) -> Option<Arc<View>> {
        self.views.remove(module_path)
    }

    pub fn clear(&mut self) {
        self.views.clear();
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Registered module identifiers, sorted
    pub fn module_paths(&self) -> Vec<&str> {
        let mut paths: Vec<&str> = self.views.keys().map(String::as_str).collect();
        paths.sort_unstable();
        paths
    }
}

impl ViewResolver for ViewRegistry {
    type Handler = Arc<View>;

    fn resolve(&self, module_path: &str, _file: &Path) -> samurai_router::Result<Resolved<Arc<View>>> {
        let view = self
            .get(module_path)
            .ok_or_else(|| RouteError::ModuleNotFound(module_path.to_string()))?;
        let overrides = view.overrides.clone();

        Ok(Resolved::new(view).with_overrides(overrides))
    }
}
