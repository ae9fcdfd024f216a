pub mod health;
pub mod movie;

use axum::Router;

use crate::state::AppState;

/// Build the catalog route tree.
///
/// Route hierarchy:
///
/// ```text
/// /movies                 create (POST)
/// /movies/{id}            get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(movie::router())
}
