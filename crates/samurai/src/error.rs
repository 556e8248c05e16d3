use samurai_router::RouteError;

/// Errors raised by the framework layer
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Route inference failed
    #[error(transparent)]
    Route(#[from] RouteError),

    /// A template failed to compile or render
    #[error("failed to render template: {0}")]
    Render(#[from] minijinja::Error),

    /// `reverse` was asked for a name no route carries
    #[error("no route named `{0}`")]
    NoReverseMatch(String),

    /// `reverse` was not given a value for a URL parameter
    #[error("route `{name}` needs a value for parameter `{param}`")]
    MissingParam { name: String, param: String },
}

pub type Result<T> = std::result::Result<T, Error>;
