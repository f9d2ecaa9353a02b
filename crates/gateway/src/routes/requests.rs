//! Fixed text routes.

use axum::http::Method;

pub async fn root() -> &'static str {
    "Hello from root page"
}

pub async fn request_get() -> &'static str {
    "Request GET"
}

pub async fn request_post() -> &'static str {
    "Request POST"
}

pub async fn request_all(method: Method) -> String {
    format!("Request All with method {method}")
}
