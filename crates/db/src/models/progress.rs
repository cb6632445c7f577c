use palavra_core::progress::{CardStat, VerbStat};
use palavra_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `card_stats` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CardStatRow {
    pub id: DbId,
    pub user_id: DbId,
    pub word_id: DbId,
    pub seen: i32,
    pub correct: i32,
    pub incorrect: i32,
    pub streak: i32,
    pub last_seen: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl CardStatRow {
    /// The domain counter view of this row.
    pub fn stat(&self) -> CardStat {
        CardStat {
            seen: self.seen,
            correct: self.correct,
            incorrect: self.incorrect,
            streak: self.streak,
        }
    }
}

/// A row from the `verb_stats` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VerbStatRow {
    pub id: DbId,
    pub user_id: DbId,
    pub verb_id: DbId,
    pub seen: i32,
    pub mastered: i32,
    pub last_seen: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl VerbStatRow {
    /// The domain counter view of this row.
    pub fn stat(&self) -> VerbStat {
        VerbStat {
            seen: self.seen,
            mastered: self.mastered,
        }
    }
}
