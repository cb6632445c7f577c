//! Handlers for the word catalog listing.

use axum::extract::{Query, State};
use axum::Json;
use palavra_core::catalog::{CategoryFilter, Word};
use serde::Deserialize;

use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /words`.
#[derive(Debug, Deserialize)]
pub struct WordsParams {
    /// Comma-separated category labels restricting the listing.
    pub categories: Option<String>,
}

/// GET /api/v1/words
///
/// List catalog words, optionally restricted by category.
pub async fn list_words(
    _user: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<WordsParams>,
) -> Json<DataResponse<Vec<Word>>> {
    let filter = params.categories.as_deref().and_then(CategoryFilter::parse);
    let words = state
        .catalog
        .words_in(filter.as_ref())
        .into_iter()
        .cloned()
        .collect();
    Json(DataResponse { data: words })
}
