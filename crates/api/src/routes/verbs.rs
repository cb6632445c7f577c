//! Route definitions for verb conjugation training.
//!
//! All endpoints require authentication.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::verbs;
use crate::state::AppState;

/// Routes mounted at `/verbs`.
///
/// ```text
/// GET    /            -> list_verbs
/// GET    /question    -> get_question
/// POST   /answer      -> submit_answer
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(verbs::list_verbs))
        .route("/question", get(verbs::get_question))
        .route("/answer", post(verbs::submit_answer))
}
