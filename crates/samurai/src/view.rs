use samurai_router::RouteOverrides;
use serde_json::{Map, Value};

/// A view: a template with its own context and optional route overrides
///
/// ```
/// use samurai::View;
///
/// let view = View::new("views.colors")
///     .with_template("Colors: {% for c in colors %}{{ c }} {% endfor %}")
///     .with_value("colors", serde_json::json!(["red"]))
///     .with_url_name("color_list");
///
/// assert_eq!(view.overrides.url_name(), Some("color_list"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct View {
    /// Dotted module identifier the view is registered under
    pub module_path: String,
    /// Template source; `None` renders an empty 204 response
    pub template: Option<String>,
    /// Values always available to the template
    pub context: Map<String, Value>,
    /// Explicit URL and name overrides
    pub overrides: RouteOverrides,
}

impl View {
    pub fn new(module_path: impl Into<String>) -> Self {
        Self {
            module_path: module_path.into(),
            ..Self::default()
        }
    }

    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// Replaces the whole context
    pub fn with_context(mut self, context: Map<String, Value>) -> Self {
        self.context = context;
        self
    }

    /// Adds a single context value
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.overrides = self.overrides.with_url(url);
        self
    }

    pub fn with_url_name(mut self, name: impl Into<String>) -> Self {
        self.overrides = self.overrides.with_url_name(name);
        self
    }

    /// Template source if it has any non-whitespace content
    pub fn template_source(&self) -> Option<&str> {
        self.template
            .as_deref()
            .map(str::trim)
            .filter(|source| !source.is_empty())
    }
}
