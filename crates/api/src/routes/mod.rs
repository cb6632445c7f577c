pub mod auth;
pub mod catalog;
pub mod health;
pub mod progress;
pub mod training;
pub mod verbs;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register               create account (public)
/// /auth/login                  login (public)
/// /auth/me                     current user (requires auth)
///
/// /training/question           generate a question (GET)
/// /training/answer             grade a word answer (POST)
///
/// /verbs                       list verbs (GET)
/// /verbs/question              random conjugation prompt (GET)
/// /verbs/answer                grade a conjugation table (POST)
///
/// /words                       list words, ?categories= (GET)
///
/// /progress                    word summary, ?categories= (GET)
/// /progress/verbs              verb summary (GET)
/// /progress/reset              clear all stats for the user (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes (register, login, me).
        .nest("/auth", auth::router())
        // Word training: questions and grading.
        .nest("/training", training::router())
        // Verb conjugation training.
        .nest("/verbs", verbs::router())
        // Word catalog listing.
        .nest("/words", catalog::router())
        // Progress summaries and reset.
        .nest("/progress", progress::router())
}
