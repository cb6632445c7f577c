//! Handlers for verb conjugation training.
//!
//! All endpoints require authentication via [`AuthUser`].

use std::collections::HashMap;

use axum::extract::State;
use axum::Json;
use palavra_core::grading::{grade_verb_answer, VerbGradeResult};
use palavra_core::question::{generate_verb_question, VerbQuestion};
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

/// Request body for `POST /verbs/answer`: one submitted form per pronoun.
#[derive(Debug, Deserialize)]
pub struct VerbAnswerRequest {
    pub verb_id: DbId,
    pub answers: HashMap<String, String>,
}

/// A catalog entry as listed to clients: the conjugated forms stay on the
/// server, since they are the answers.
#[derive(Debug, Serialize)]
pub struct VerbSummary {
    pub id: DbId,
    pub infinitive: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/verbs
///
/// List all verbs as `{id, infinitive}` pairs.
pub async fn list_verbs(
    _user: AuthUser,
    State(state): State<AppState>,
) -> Json<DataResponse<Vec<VerbSummary>>> {
    let verbs = state
        .catalog
        .verbs()
        .iter()
        .map(|v| VerbSummary {
            id: v.id,
            infinitive: v.infinitive.clone(),
        })
        .collect();
    Json(DataResponse { data: verbs })
}

/// GET /api/v1/verbs/question
///
/// Pick a random verb to conjugate.
pub async fn get_question(
    _user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<VerbQuestion>>> {
    let question = generate_verb_question(&state.catalog, &mut rand::rng())?;
    Ok(Json(DataResponse { data: question }))
}

/// POST /api/v1/verbs/answer
///
/// Grade a full conjugation table. `seen` moves on every attempt;
/// `mastered` only when all five forms were correct.
pub async fn submit_answer(
    user: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<VerbAnswerRequest>,
) -> AppResult<Json<DataResponse<VerbGradeResult>>> {
    let result = grade_verb_answer(&state.catalog, input.verb_id, &input.answers)?;

    ProgressRepo::record_verb_attempt(&state.pool, user.user_id, input.verb_id, result.all_correct)
        .await?;

    tracing::info!(
        user_id = user.user_id,
        verb_id = input.verb_id,
        all_correct = result.all_correct,
        "Verb answer graded",
    );

    Ok(Json(DataResponse { data: result }))
}
