// File: src/urls.rs
// Purpose: URL pattern list built from a view directory, with reverse lookup
// and conversion into an axum router

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;

use axum::extract::Path as UrlParams;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use samurai_router::{Route, ViewResolver};
use serde_json::{Map, Value};
use tracing::{error, info, warn};

use crate::config::RoutingConfig;
use crate::error::{Error, Result};
use crate::renderer::render_response;
use crate::view::View;

/// URL parameter segment: `<name>` or `<converter:name>`
static URL_PARAM: Lazy<Regex> = Lazy::new(|| Regex::new(r"<(?:(\w+):)?(\w+)>").unwrap());

/// Builds the URL patterns for the configured view directory
pub fn file_patterns<R>(routing: &RoutingConfig, resolver: &R) -> Result<UrlPatterns<R::Handler>>
where
    R: ViewResolver + ?Sized,
{
    file_patterns_in(&routing.views_dir, routing, resolver)
}

/// Like [`file_patterns`] with an explicit start directory
pub fn file_patterns_in<R>(
    views_dir: impl AsRef<Path>,
    routing: &RoutingConfig,
    resolver: &R,
) -> Result<UrlPatterns<R::Handler>>
where
    R: ViewResolver + ?Sized,
{
    let routes = samurai_router::file_patterns(views_dir, &routing.infer_options(), resolver)?;
    Ok(UrlPatterns::new(routes))
}

/// Ordered routes ready for registration
///
/// Order is registration order: the first pattern matching a request wins.
#[derive(Debug, Clone)]
pub struct UrlPatterns<H> {
    routes: Vec<Route<H>>,
}

impl<H> UrlPatterns<H> {
    pub fn new(routes: Vec<Route<H>>) -> Self {
        Self { routes }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route<H>> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Route names in registration order
    pub fn names(&self) -> Vec<&str> {
        self.routes.iter().map(|r| r.url_name.as_str()).collect()
    }

    /// Route carrying `name`; when names collide the last registered route wins
    pub fn get(&self, name: &str) -> Option<&Route<H>> {
        self.routes.iter().rev().find(|r| r.url_name == name)
    }

    /// Builds the URL of a named route
    ///
    /// Each `<converter:param>` segment is replaced by the percent-encoded
    /// value from `params`. The result always starts with `/`.
    ///
    /// ```
    /// use samurai::UrlPatterns;
    /// use samurai_router::Route;
    ///
    /// let patterns = UrlPatterns::new(vec![Route {
    ///     url: "colors/<slug:slug>/".to_string(),
    ///     handler: (),
    ///     url_name: "colors_slug".to_string(),
    ///     module_path: "views.colors.<slug:slug>".to_string(),
    ///     file: "views/colors/<slug:slug>.rs".into(),
    /// }]);
    ///
    /// let url = patterns.reverse("colors_slug", &[("slug", "sky blue")]).unwrap();
    /// assert_eq!(url, "/colors/sky%20blue/");
    /// ```
    pub fn reverse(&self, name: &str, params: &[(&str, &str)]) -> Result<String> {
        let route = self
            .get(name)
            .ok_or_else(|| Error::NoReverseMatch(name.to_string()))?;

        let mut missing = None;
        let path = URL_PARAM.replace_all(&route.url, |caps: &Captures| {
            let param = &caps[2];
            match params.iter().find(|(key, _)| *key == param) {
                Some((_, value)) => urlencoding::encode(value).into_owned(),
                None => {
                    missing.get_or_insert_with(|| param.to_string());
                    String::new()
                }
            }
        });

        if let Some(param) = missing {
            return Err(Error::MissingParam {
                name: name.to_string(),
                param,
            });
        }

        Ok(format!("/{}", path.trim_start_matches('/')))
    }

    pub fn into_routes(self) -> Vec<Route<H>> {
        self.routes
    }
}

impl<H> IntoIterator for UrlPatterns<H> {
    type Item = Route<H>;
    type IntoIter = std::vec::IntoIter<Route<H>>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.into_iter()
    }
}

impl UrlPatterns<Arc<View>> {
    /// Mounts every view as a `GET` route on an axum router
    ///
    /// Captured URL parameters are added to the render context as strings.
    /// When two patterns dispatch the same paths, the first registered one is
    /// kept and the other is skipped with a warning. Patterns with a
    /// `<path:...>` parameter before their last segment cannot be mounted and
    /// are skipped the same way.
    pub fn into_router(self) -> Router {
        let mut router = Router::new();
        let mut shapes = HashSet::new();

        for route in self.routes {
            let path = to_axum_path(&route.url);

            if has_inner_catch_all(&path) {
                warn!(
                    url = %route.url,
                    name = %route.url_name,
                    module = %route.module_path,
                    "skipping route with a path parameter before its last segment"
                );
                continue;
            }

            if !shapes.insert(dispatch_shape(&path)) {
                warn!(
                    url = %route.url,
                    name = %route.url_name,
                    module = %route.module_path,
                    "skipping route shadowed by an earlier pattern"
                );
                continue;
            }

            info!(path = %path, name = %route.url_name, "mounted view");

            let view = route.handler;
            router = router.route(
                &path,
                get(move |params: Option<UrlParams<HashMap<String, String>>>| {
                    let view = Arc::clone(&view);
                    async move {
                        let params = params.map(|UrlParams(p)| p).unwrap_or_default();
                        serve_view(&view, params)
                    }
                }),
            );
        }

        router
    }
}

/// Renders a view for a request, mapping render errors to `500`
fn serve_view(view: &View, params: HashMap<String, String>) -> Response {
    let extra: Map<String, Value> = params
        .into_iter()
        .map(|(key, value)| (key, Value::String(value)))
        .collect();

    match render_response(view, Some(&extra)) {
        Ok(response) => response.into_response(),
        Err(err) => {
            error!(module = %view.module_path, error = %err, "failed to render view");
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
        }
    }
}

/// Converts a URL pattern into axum path syntax
///
/// `<slug:slug>` and `<slug>` become `:slug`, `<path:rest>` becomes `*rest`.
/// The result always starts with `/`. A catch-all already matches the rest of
/// the path, so a trailing slash after it is dropped.
///
/// ```
/// use samurai::to_axum_path;
///
/// assert_eq!(to_axum_path(""), "/");
/// assert_eq!(to_axum_path("colors/<slug:slug>/"), "/colors/:slug/");
/// assert_eq!(to_axum_path("docs/<path:rest>"), "/docs/*rest");
/// assert_eq!(to_axum_path("docs/<path:rest>/"), "/docs/*rest");
/// ```
pub fn to_axum_path(url: &str) -> String {
    let converted = URL_PARAM.replace_all(url, |caps: &Captures| {
        let name = &caps[2];
        match caps.get(1).map(|m| m.as_str()) {
            Some("path") => format!("*{}", name),
            _ => format!(":{}", name),
        }
    });

    let path = format!("/{}", converted.trim_start_matches('/'));
    match path.strip_suffix('/') {
        Some(trimmed) if is_catch_all(last_segment(trimmed)) => trimmed.to_string(),
        _ => path,
    }
}

fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or_default()
}

fn is_catch_all(segment: &str) -> bool {
    segment.starts_with('*')
}

/// axum only accepts a catch-all as the final segment
fn has_inner_catch_all(path: &str) -> bool {
    path.split('/').rev().skip(1).any(is_catch_all)
}

/// Path with parameter names erased: two routes with the same shape collide
fn dispatch_shape(path: &str) -> String {
    path.split('/')
        .map(|segment| match segment.chars().next() {
            Some(':') => ":",
            Some('*') => "*",
            _ => segment,
        })
        .collect::<Vec<_>>()
        .join("/")
}
