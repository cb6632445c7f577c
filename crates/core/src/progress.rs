//! Per-item mastery statistics and their aggregation.
//!
//! Stat records are sparse: an item with no record reads as all zeros, so
//! nothing is pre-materialized for large catalogs. The transition functions
//! here are pure; persistence applies them atomically per (user, item).

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::catalog::{Verb, Word};
use crate::types::DbId;

/// Total correct answers required before a card can count as learned.
pub const LEARNED_MIN_CORRECT: i32 = 3;
/// Consecutive correct answers required before a card can count as learned.
pub const LEARNED_MIN_STREAK: i32 = 2;

/// Per-card counters for one user. Absent record ⇔ `CardStat::default()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardStat {
    pub seen: i32,
    pub correct: i32,
    pub incorrect: i32,
    pub streak: i32,
}

impl CardStat {
    /// Record one graded attempt. A wrong answer resets the streak.
    pub fn apply(&mut self, correct: bool) {
        self.seen += 1;
        if correct {
            self.correct += 1;
            self.streak += 1;
        } else {
            self.incorrect += 1;
            self.streak = 0;
        }
    }

    /// The fixed mastery threshold: enough correct answers overall and a
    /// live streak. Not user-configurable.
    pub fn is_learned(&self) -> bool {
        self.correct >= LEARNED_MIN_CORRECT && self.streak >= LEARNED_MIN_STREAK
    }
}

/// Per-verb counters for one user. Absent record ⇔ `VerbStat::default()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerbStat {
    pub seen: i32,
    pub mastered: i32,
}

impl VerbStat {
    /// Record one conjugation attempt; `mastered` only moves when every
    /// form was correct.
    pub fn apply(&mut self, all_correct: bool) {
        self.seen += 1;
        if all_correct {
            self.mastered += 1;
        }
    }

    /// A verb counts as mastered after any fully-correct attempt.
    pub fn is_mastered(&self) -> bool {
        self.mastered > 0
    }
}

/// Word progress rollup for one user over a word pool.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressSummary {
    pub total: usize,
    pub studied: usize,
    pub learned: usize,
    pub by_card: BTreeMap<DbId, CardStat>,
}

/// Verb progress rollup for one user.
#[derive(Debug, Clone, Serialize)]
pub struct VerbProgressSummary {
    pub total: usize,
    pub seen: usize,
    pub mastered: usize,
    pub by_verb: BTreeMap<DbId, VerbStat>,
}

/// Aggregate card stats over a word pool (already category-filtered by the
/// caller — filtering happens at the query layer, not here).
pub fn summarize_cards(words: &[&Word], stats: &HashMap<DbId, CardStat>) -> ProgressSummary {
    let mut studied = 0;
    let mut learned = 0;
    let mut by_card = BTreeMap::new();
    for word in words {
        let stat = stats.get(&word.id).copied().unwrap_or_default();
        if stat.seen > 0 {
            studied += 1;
        }
        if stat.is_learned() {
            learned += 1;
        }
        by_card.insert(word.id, stat);
    }
    ProgressSummary {
        total: words.len(),
        studied,
        learned,
        by_card,
    }
}

/// Aggregate verb stats over the verb catalog.
pub fn summarize_verbs(verbs: &[Verb], stats: &HashMap<DbId, VerbStat>) -> VerbProgressSummary {
    let mut seen = 0;
    let mut mastered = 0;
    let mut by_verb = BTreeMap::new();
    for verb in verbs {
        let stat = stats.get(&verb.id).copied().unwrap_or_default();
        if stat.seen > 0 {
            seen += 1;
        }
        if stat.is_mastered() {
            mastered += 1;
        }
        by_verb.insert(verb.id, stat);
    }
    VerbProgressSummary {
        total: verbs.len(),
        seen,
        mastered,
        by_verb,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::VerbForms;

    fn word(id: DbId, category: Option<&str>) -> Word {
        Word {
            id,
            pt: format!("pt{id}"),
            ru: format!("ru{id}"),
            category: category.map(Into::into),
        }
    }

    // -- CardStat::apply --

    #[test]
    fn correct_attempt_bumps_seen_correct_and_streak() {
        let mut stat = CardStat::default();
        stat.apply(true);
        assert_eq!(
            stat,
            CardStat {
                seen: 1,
                correct: 1,
                incorrect: 0,
                streak: 1
            }
        );
    }

    #[test]
    fn incorrect_attempt_resets_streak() {
        let mut stat = CardStat {
            seen: 5,
            correct: 4,
            incorrect: 1,
            streak: 3,
        };
        stat.apply(false);
        assert_eq!(stat.seen, 6);
        assert_eq!(stat.correct, 4);
        assert_eq!(stat.incorrect, 2);
        assert_eq!(stat.streak, 0);
    }

    // -- is_learned boundary --

    #[test]
    fn three_correct_but_short_streak_is_not_learned() {
        let stat = CardStat {
            seen: 5,
            correct: 3,
            incorrect: 2,
            streak: 1,
        };
        assert!(!stat.is_learned());
    }

    #[test]
    fn one_more_correct_crosses_the_threshold() {
        let mut stat = CardStat {
            seen: 5,
            correct: 3,
            incorrect: 2,
            streak: 1,
        };
        stat.apply(true);
        assert_eq!(stat.correct, 4);
        assert_eq!(stat.streak, 2);
        assert!(stat.is_learned());
    }

    #[test]
    fn long_streak_without_enough_correct_is_not_learned() {
        let stat = CardStat {
            seen: 2,
            correct: 2,
            incorrect: 0,
            streak: 2,
        };
        assert!(!stat.is_learned());
    }

    // -- VerbStat --

    #[test]
    fn verb_attempt_counts_seen_always_mastered_on_full_success() {
        let mut stat = VerbStat::default();
        stat.apply(false);
        assert_eq!(stat, VerbStat { seen: 1, mastered: 0 });
        assert!(!stat.is_mastered());

        stat.apply(true);
        assert_eq!(stat, VerbStat { seen: 2, mastered: 1 });
        assert!(stat.is_mastered());
    }

    // -- summaries --

    #[test]
    fn summary_defaults_unattempted_items_to_zero() {
        let words = [word(1, None), word(2, None), word(3, None)];
        let refs: Vec<&Word> = words.iter().collect();
        let mut stats = HashMap::new();
        stats.insert(
            1,
            CardStat {
                seen: 4,
                correct: 4,
                incorrect: 0,
                streak: 4,
            },
        );
        stats.insert(
            2,
            CardStat {
                seen: 1,
                correct: 0,
                incorrect: 1,
                streak: 0,
            },
        );

        let summary = summarize_cards(&refs, &stats);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.studied, 2);
        assert_eq!(summary.learned, 1);
        assert_eq!(summary.by_card[&3], CardStat::default());
    }

    #[test]
    fn summary_total_follows_the_filtered_pool() {
        let words = [word(1, Some("food")), word(2, Some("food"))];
        let refs: Vec<&Word> = words.iter().collect();
        let summary = summarize_cards(&refs, &HashMap::new());
        assert_eq!(summary.total, 2);
        assert_eq!(summary.studied, 0);
        assert_eq!(summary.by_card.len(), 2);
    }

    #[test]
    fn verb_summary_counts_verbs_not_attempts() {
        let verbs = vec![
            Verb {
                id: 1,
                infinitive: "falar".into(),
                forms: VerbForms {
                    eu: "falo".into(),
                    tu: "falas".into(),
                    ele: "fala".into(),
                    nos: "falamos".into(),
                    eles: "falam".into(),
                },
            },
            Verb {
                id: 2,
                infinitive: "comer".into(),
                forms: VerbForms {
                    eu: "como".into(),
                    tu: "comes".into(),
                    ele: "come".into(),
                    nos: "comemos".into(),
                    eles: "comem".into(),
                },
            },
        ];
        let mut stats = HashMap::new();
        stats.insert(1, VerbStat { seen: 7, mastered: 2 });

        let summary = summarize_verbs(&verbs, &stats);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.seen, 1);
        assert_eq!(summary.mastered, 1);
        assert_eq!(summary.by_verb[&2], VerbStat::default());
    }
}
