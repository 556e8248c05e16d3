// File: src/resolver.rs
// Purpose: Resolves views by loading the view file as its template

use std::fs;
use std::path::Path;
use std::sync::Arc;

use samurai_router::{Resolved, RouteError, ViewResolver};
use serde_json::{Map, Value};

use crate::view::View;

/// Loads each discovered file as a template-only view
///
/// Used for directories of plain templates (`extension = "html"`). The file is
/// read fresh on every resolve. Template-only views carry no overrides.
#[derive(Debug, Clone, Default)]
pub struct FileResolver {
    context: Map<String, Value>,
}

impl FileResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context shared by every view this resolver loads
    pub fn with_context(mut self, context: Map<String, Value>) -> Self {
        self.context = context;
        self
    }
}

impl ViewResolver for FileResolver {
    type Handler = Arc<View>;

    fn resolve(&self, module_path: &str, file: &Path) -> samurai_router::Result<Resolved<Arc<View>>> {
        let template = fs::read_to_string(file).map_err(|err| RouteError::Resolve {
            module_path: module_path.to_string(),
            file: file.to_path_buf(),
            reason: err.to_string(),
        })?;

        let view = View::new(module_path)
            .with_template(template)
            .with_context(self.context.clone());

        Ok(Resolved::new(Arc::new(view)))
    }
}
