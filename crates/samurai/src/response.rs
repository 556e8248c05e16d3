use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

/// Rendered view output, ready to become an HTTP response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewResponse {
    pub status: StatusCode,
    pub body: String,
}

impl ViewResponse {
    /// `200 OK` with an HTML body
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            body: body.into(),
        }
    }

    /// Empty `204 No Content`, used when a view has no template
    pub fn no_content() -> Self {
        Self {
            status: StatusCode::NO_CONTENT,
            body: String::new(),
        }
    }
}

impl IntoResponse for ViewResponse {
    fn into_response(self) -> Response {
        if self.status == StatusCode::NO_CONTENT {
            return self.status.into_response();
        }

        (self.status, Html(self.body)).into_response()
    }
}
