//! Handlers for progress summaries and the reset action.
//!
//! All endpoints require authentication via [`AuthUser`].

use std::collections::HashMap;

use axum::extract::{Query, State};
use axum::Json;
use palavra_core::catalog::CategoryFilter;
use palavra_core::progress::{
    summarize_cards, summarize_verbs, CardStat, ProgressSummary, VerbProgressSummary, VerbStat,
};
use palavra_core::types::DbId;
use palavra_db::repositories::ProgressRepo;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response DTOs
// ---------------------------------------------------------------------------

/// Query parameters for `GET /progress`.
#[derive(Debug, Deserialize)]
pub struct ProgressParams {
    /// Comma-separated category labels; when present, the summary covers
    /// only matching words and `total` shrinks accordingly.
    pub categories: Option<String>,
}

/// Response body for `POST /progress/reset`.
#[derive(Debug, Serialize)]
pub struct ResetResponse {
    pub status: &'static str,
    pub cards_cleared: u64,
    pub verbs_cleared: u64,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/progress
///
/// Word progress rollup. Category filtering happens here at the query
/// layer; the aggregation itself is pure over the chosen pool.
pub async fn get_progress(
    user: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<ProgressParams>,
) -> AppResult<Json<DataResponse<ProgressSummary>>> {
    let filter = params.categories.as_deref().and_then(CategoryFilter::parse);
    let words = state.catalog.words_in(filter.as_ref());

    let stats: HashMap<DbId, CardStat> = ProgressRepo::card_stats(&state.pool, user.user_id)
        .await?
        .iter()
        .map(|row| (row.word_id, row.stat()))
        .collect();

    let summary = summarize_cards(&words, &stats);
    Ok(Json(DataResponse { data: summary }))
}

/// GET /api/v1/progress/verbs
///
/// Verb progress rollup.
pub async fn get_verb_progress(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<VerbProgressSummary>>> {
    let stats: HashMap<DbId, VerbStat> = ProgressRepo::verb_stats(&state.pool, user.user_id)
        .await?
        .iter()
        .map(|row| (row.verb_id, row.stat()))
        .collect();

    let summary = summarize_verbs(state.catalog.verbs(), &stats);
    Ok(Json(DataResponse { data: summary }))
}

/// POST /api/v1/progress/reset
///
/// Irreversibly clear every stat record for the calling user. Only ever
/// invoked explicitly; any confirmation dialog is the client's job.
pub async fn reset_progress(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<ResetResponse>>> {
    let (cards_cleared, verbs_cleared) = ProgressRepo::reset_all(&state.pool, user.user_id).await?;

    tracing::info!(
        user_id = user.user_id,
        cards_cleared,
        verbs_cleared,
        "Progress reset",
    );

    Ok(Json(DataResponse {
        data: ResetResponse {
            status: "ok",
            cards_cleared,
            verbs_cleared,
        },
    }))
}
