//! Route definitions for word training.
//!
//! All endpoints require authentication.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::training;
use crate::state::AppState;

/// Routes mounted at `/training`.
///
/// ```text
/// GET    /question   -> get_question
/// POST   /answer     -> submit_answer
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/question", get(training::get_question))
        .route("/answer", post(training::submit_answer))
}
