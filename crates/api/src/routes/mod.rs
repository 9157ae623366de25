pub mod auth;
pub mod health;
pub mod notes;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /register          register (public)
/// /login             login (public)
///
/// /notes             list, create (requires auth)
/// /notes/{id}        update, delete (requires auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .nest("/notes", notes::router())
}
