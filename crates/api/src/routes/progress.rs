//! Route definitions for progress summaries and reset.
//!
//! All endpoints require authentication.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::progress;
use crate::state::AppState;

/// Routes mounted at `/progress`.
///
/// ```text
/// GET    /          -> get_progress
/// GET    /verbs     -> get_verb_progress
/// POST   /reset     -> reset_progress
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(progress::get_progress))
        .route("/verbs", get(progress::get_verb_progress))
        .route("/reset", post(progress::reset_progress))
}
