//! Catch-all landing page serving the front-end shell

use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::Router;

use crate::http::server::AppState;

/// GET / and GET /{*path}
async fn html_landing(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(state.shell_html.to_string())
}

/// Shell routes. `/{*path}` does not match the bare root, so both are listed.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(html_landing))
        .route("/{*path}", get(html_landing))
}
