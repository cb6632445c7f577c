//! Repository for the `card_stats` and `verb_stats` tables.
//!
//! Every stat mutation is a single `INSERT ... ON CONFLICT ... DO UPDATE`
//! statement: the conflicting row is locked for the duration of the update,
//! so two near-simultaneous submissions for the same (user, item) serialize
//! instead of double-counting or dropping a streak reset.

use palavra_core::types::DbId;
use sqlx::PgPool;

use crate::models::progress::{CardStatRow, VerbStatRow};

/// Column list for `card_stats` queries.
const CARD_COLUMNS: &str =
    "id, user_id, word_id, seen, correct, incorrect, streak, last_seen, created_at, updated_at";

/// Column list for `verb_stats` queries.
const VERB_COLUMNS: &str =
    "id, user_id, verb_id, seen, mastered, last_seen, created_at, updated_at";

/// Per-user training statistics.
pub struct ProgressRepo;

impl ProgressRepo {
    /// Record one graded word attempt and return the updated counters.
    ///
    /// Creates the row lazily on first contact. A correct answer bumps
    /// `correct` and extends the streak; a wrong one bumps `incorrect` and
    /// resets the streak to zero. `seen` and `last_seen` move either way.
    pub async fn record_card_answer(
        pool: &PgPool,
        user_id: DbId,
        word_id: DbId,
        correct: bool,
    ) -> Result<CardStatRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO card_stats (user_id, word_id, seen, correct, incorrect, streak, last_seen) \
             VALUES ($1, $2, 1, \
                     CASE WHEN $3 THEN 1 ELSE 0 END, \
                     CASE WHEN $3 THEN 0 ELSE 1 END, \
                     CASE WHEN $3 THEN 1 ELSE 0 END, \
                     now()) \
             ON CONFLICT (user_id, word_id) DO UPDATE SET \
                 seen = card_stats.seen + 1, \
                 correct = card_stats.correct + CASE WHEN $3 THEN 1 ELSE 0 END, \
                 incorrect = card_stats.incorrect + CASE WHEN $3 THEN 0 ELSE 1 END, \
                 streak = CASE WHEN $3 THEN card_stats.streak + 1 ELSE 0 END, \
                 last_seen = now(), \
                 updated_at = now() \
             RETURNING {CARD_COLUMNS}"
        );
        sqlx::query_as::<_, CardStatRow>(&query)
            .bind(user_id)
            .bind(word_id)
            .bind(correct)
            .fetch_one(pool)
            .await
    }

    /// Record one conjugation attempt; `mastered` moves only when the
    /// whole form table was correct.
    pub async fn record_verb_attempt(
        pool: &PgPool,
        user_id: DbId,
        verb_id: DbId,
        all_correct: bool,
    ) -> Result<VerbStatRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO verb_stats (user_id, verb_id, seen, mastered, last_seen) \
             VALUES ($1, $2, 1, CASE WHEN $3 THEN 1 ELSE 0 END, now()) \
             ON CONFLICT (user_id, verb_id) DO UPDATE SET \
                 seen = verb_stats.seen + 1, \
                 mastered = verb_stats.mastered + CASE WHEN $3 THEN 1 ELSE 0 END, \
                 last_seen = now(), \
                 updated_at = now() \
             RETURNING {VERB_COLUMNS}"
        );
        sqlx::query_as::<_, VerbStatRow>(&query)
            .bind(user_id)
            .bind(verb_id)
            .bind(all_correct)
            .fetch_one(pool)
            .await
    }

    /// All card stat rows for a user. Only attempted cards have rows.
    pub async fn card_stats(pool: &PgPool, user_id: DbId) -> Result<Vec<CardStatRow>, sqlx::Error> {
        let query = format!(
            "SELECT {CARD_COLUMNS} FROM card_stats WHERE user_id = $1 ORDER BY word_id"
        );
        sqlx::query_as::<_, CardStatRow>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// All verb stat rows for a user.
    pub async fn verb_stats(pool: &PgPool, user_id: DbId) -> Result<Vec<VerbStatRow>, sqlx::Error> {
        let query = format!(
            "SELECT {VERB_COLUMNS} FROM verb_stats WHERE user_id = $1 ORDER BY verb_id"
        );
        sqlx::query_as::<_, VerbStatRow>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Delete every stat record for a user. Irreversible.
    ///
    /// Both tables are cleared in one transaction so a failure cannot leave
    /// cards wiped but verbs intact.
    pub async fn reset_all(pool: &PgPool, user_id: DbId) -> Result<(u64, u64), sqlx::Error> {
        let mut tx = pool.begin().await?;
        let cards = sqlx::query("DELETE FROM card_stats WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        let verbs = sqlx::query("DELETE FROM verb_stats WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        tx.commit().await?;
        tracing::debug!(user_id, cards, verbs, "Progress reset");
        Ok((cards, verbs))
    }
}
