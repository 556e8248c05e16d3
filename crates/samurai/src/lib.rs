// Samurai - file-system routed views
// Views are discovered from a directory tree, named from their location and
// served through axum

pub mod error;
pub mod view;

// Framework modules
pub mod config;
pub mod registry;
pub mod renderer;
pub mod resolver;
pub mod response;
pub mod urls;

// Re-export framework types
pub use config::{Config, RoutingConfig, ServerConfig};
pub use error::{Error, Result};
pub use registry::ViewRegistry;
pub use renderer::{render_response, render_str};
pub use resolver::FileResolver;
pub use response::ViewResponse;
pub use urls::{file_patterns, file_patterns_in, to_axum_path, UrlPatterns};
pub use view::View;

// Re-export the route inferer
pub use samurai_router::{InferOptions, Resolved, Route, RouteError, RouteOverrides, ViewResolver};

// Re-export commonly used types from dependencies
pub use axum;
pub use axum::http::StatusCode;
