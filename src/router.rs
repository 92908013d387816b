use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, StatusCode},
    middleware::map_response,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};

use crate::db::TodoStore;
use crate::handlers;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TodoStore>,
}

/// Builds the full router: JSON API under `/api` plus the embedded web UI.
/// The store is injected so tests can run against the in-memory one.
pub fn app(store: Arc<dyn TodoStore>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/app.js", get(app_js))
        .route("/styles.css", get(styles_css))
        .route("/api/health", get(handlers::health))
        .route(
            "/api/todos",
            get(handlers::list_todos)
                .post(handlers::create_todo)
                .options(preflight),
        )
        .route(
            "/api/todos/:id",
            axum::routing::put(handlers::update_todo)
                .delete(handlers::delete_todo)
                .options(preflight),
        )
        .layer(map_response(add_cors_headers))
        .with_state(AppState { store })
}

async fn add_cors_headers(mut response: Response) -> Response {
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, PUT, DELETE, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    response
}

async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn index() -> Html<&'static str> {
    Html(include_str!("../static/index.html"))
}

async fn app_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript")],
        include_str!("../static/app.js"),
    )
}

async fn styles_css() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css")],
        include_str!("../static/styles.css"),
    )
}
