//! Route definitions for the word catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// Routes mounted at `/words`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(catalog::list_words))
}
