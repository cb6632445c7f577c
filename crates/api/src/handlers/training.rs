//! Handlers for word training: question generation and answer grading.
//!
//! All endpoints require authentication via [`AuthUser`].

use axum::extract::{Query, State};
use axum::Json;
use palavra_core::catalog::CategoryFilter;
use palavra_core::grading::{grade_word_answer, GradeResult};
use palavra_core::mode::TrainingMode;
use palavra_core::question::{generate_question, Question, MAX_OPTION_COUNT, MIN_OPTION_COUNT};
use palavra_core::types::DbId;
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request DTOs
// ---------------------------------------------------------------------------

/// Query parameters for `GET /training/question`.
#[derive(Debug, Deserialize)]
pub struct QuestionParams {
    pub mode: String,
    /// Requested option list size for choice modes.
    #[serde(default = "default_option_count")]
    pub options: usize,
    /// Comma-separated category labels restricting the pool.
    pub categories: Option<String>,
}

fn default_option_count() -> usize {
    4
}

/// Request body for `POST /training/answer`.
#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    pub card_id: DbId,
    pub mode: String,
    pub answer: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/training/question
///
/// Generate a question. Read-only: nothing is recorded until an answer is
/// submitted. The option count is clamped to the supported range before it
/// reaches the generator.
pub async fn get_question(
    _user: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<QuestionParams>,
) -> AppResult<Json<DataResponse<Question>>> {
    let mode: TrainingMode = params.mode.parse()?;
    let option_count = params.options.clamp(MIN_OPTION_COUNT, MAX_OPTION_COUNT);
    let filter = params.categories.as_deref().and_then(CategoryFilter::parse);

    let question = generate_question(
        &state.catalog,
        mode,
        option_count,
        filter.as_ref(),
        &mut rand::rng(),
    )?;

    Ok(Json(DataResponse { data: question }))
}

/// POST /api/v1/training/answer
///
/// Grade a submitted answer against the catalog and record the attempt.
/// The stat update lands before the response; the canonical answer is
/// returned either way so the client can show it.
pub async fn submit_answer(
    user: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<AnswerRequest>,
) -> AppResult<Json<DataResponse<GradeResult>>> {
    let mode: TrainingMode = input.mode.parse()?;
    let result = grade_word_answer(&state.catalog, input.card_id, mode, &input.answer)?;

    palavra_db::repositories::ProgressRepo::record_card_answer(
        &state.pool,
        user.user_id,
        input.card_id,
        result.correct,
    )
    .await?;

    tracing::info!(
        user_id = user.user_id,
        card_id = input.card_id,
        mode = %mode,
        correct = result.correct,
        "Word answer graded",
    );

    Ok(Json(DataResponse { data: result }))
}
