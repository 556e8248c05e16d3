// File: src/renderer.rs
// Purpose: Renders view templates into responses

use minijinja::Environment;
use serde_json::{Map, Value};

use crate::error::Result;
use crate::response::ViewResponse;
use crate::view::View;

/// Template name used for view sources; the `.html` suffix turns on autoescaping
const VIEW_TEMPLATE: &str = "view.html";

/// Renders a template string with the given context
///
/// Uses Jinja syntax (`{{ value }}`, `{% for x in xs %}`). HTML in values is
/// escaped. Unknown variables render as empty.
///
/// ```
/// use samurai::render_str;
/// use serde_json::json;
///
/// let context = json!({ "message": "hi" });
/// let html = render_str("<p>{{ message }}</p>", context.as_object().unwrap()).unwrap();
/// assert_eq!(html, "<p>hi</p>");
/// ```
pub fn render_str(source: &str, context: &Map<String, Value>) -> Result<String> {
    let mut env = Environment::new();
    env.add_template(VIEW_TEMPLATE, source)?;

    let rendered = env.get_template(VIEW_TEMPLATE)?.render(context)?;
    Ok(rendered)
}

/// Renders a view into a response
///
/// The view's own context is merged with `extra`; keys in `extra` win. A view
/// without template source yields an empty `204 No Content` instead of an
/// error.
pub fn render_response(view: &View, extra: Option<&Map<String, Value>>) -> Result<ViewResponse> {
    let Some(source) = view.template_source() else {
        return Ok(ViewResponse::no_content());
    };

    let mut context = view.context.clone();
    if let Some(extra) = extra {
        context.extend(extra.iter().map(|(k, v)| (k.clone(), v.clone())));
    }

    render_str(source, &context).map(ViewResponse::ok)
}
