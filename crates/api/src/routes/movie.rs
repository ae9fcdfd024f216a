//! Route definitions for the `/movies` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::movie;
use crate::state::AppState;

/// Movie routes.
///
/// ```text
/// POST   /movies          create
/// GET    /movies/{id}     get_by_id
/// PUT    /movies/{id}     update
/// DELETE /movies/{id}     delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/movies", post(movie::create)).route(
        "/movies/{id}",
        get(movie::get_by_id)
            .put(movie::update)
            .delete(movie::delete),
    )
}
