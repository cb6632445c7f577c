//! Answer evaluation.
//!
//! Comparison is a normalized exact match against the single canonical
//! translation: trimmed, lowercased, inner whitespace collapsed. There is no
//! synonym list. Grading itself is pure; the caller persists the stat
//! transition from [`crate::progress`] afterwards.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::Serialize;

use crate::catalog::{Catalog, Pronoun};
use crate::error::CoreError;
use crate::mode::TrainingMode;
use crate::types::DbId;

/// Lowercase, trim, and collapse runs of whitespace to single spaces.
pub fn normalize_answer(s: &str) -> String {
    s.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Outcome of grading one word answer. The canonical answer is always
/// returned so the client can display it.
#[derive(Debug, Clone, Serialize)]
pub struct GradeResult {
    pub correct: bool,
    pub correct_answer: String,
}

/// Outcome of grading a full conjugation table.
///
/// Maps are keyed by pronoun in the fixed presentation order.
#[derive(Debug, Clone, Serialize)]
pub struct VerbGradeResult {
    pub verb_id: DbId,
    pub infinitive: String,
    pub results: IndexMap<Pronoun, bool>,
    pub correct_forms: IndexMap<Pronoun, String>,
    pub all_correct: bool,
}

/// Grade a word-mode answer against the catalog.
///
/// The expected answer is derived from `card_id` and `mode` alone; nothing
/// echoed by the client is trusted. Verb mode is not a word mode and is
/// rejected as [`CoreError::InvalidMode`].
pub fn grade_word_answer(
    catalog: &Catalog,
    card_id: DbId,
    mode: TrainingMode,
    answer: &str,
) -> Result<GradeResult, CoreError> {
    let word = catalog.word(card_id)?;
    let direction = mode
        .direction()
        .ok_or_else(|| CoreError::InvalidMode(mode.to_string()))?;
    let expected = direction.answer(word);
    let correct = normalize_answer(answer) == normalize_answer(expected);
    Ok(GradeResult {
        correct,
        correct_answer: expected.to_string(),
    })
}

/// Grade a submitted conjugation table.
///
/// Each pronoun is compared independently under the same normalization;
/// missing or blank cells count as wrong. `all_correct` is the conjunction
/// over all five pronouns.
pub fn grade_verb_answer(
    catalog: &Catalog,
    verb_id: DbId,
    answers: &HashMap<String, String>,
) -> Result<VerbGradeResult, CoreError> {
    let verb = catalog.verb(verb_id)?;

    let mut results = IndexMap::with_capacity(Pronoun::ALL.len());
    let mut correct_forms = IndexMap::with_capacity(Pronoun::ALL.len());
    let mut all_correct = true;
    for pronoun in Pronoun::ALL {
        let expected = verb.forms.get(pronoun);
        let given = answers
            .get(pronoun.key())
            .map(String::as_str)
            .unwrap_or("");
        let correct =
            !given.trim().is_empty() && normalize_answer(given) == normalize_answer(expected);
        all_correct &= correct;
        results.insert(pronoun, correct);
        correct_forms.insert(pronoun, expected.to_string());
    }

    Ok(VerbGradeResult {
        verb_id: verb.id,
        infinitive: verb.infinitive.clone(),
        results,
        correct_forms,
        all_correct,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Verb, VerbForms, Word};

    fn catalog() -> Catalog {
        Catalog::new(
            vec![Word {
                id: 1,
                pt: "casa".into(),
                ru: "дом".into(),
                category: None,
            }],
            vec![Verb {
                id: 1,
                infinitive: "falar".into(),
                forms: VerbForms {
                    eu: "falo".into(),
                    tu: "falas".into(),
                    ele: "fala".into(),
                    nos: "falamos".into(),
                    eles: "falam".into(),
                },
            }],
        )
        .unwrap()
    }

    fn full_answers(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn normalization_lowercases_trims_and_collapses() {
        assert_eq!(normalize_answer("  Дом  "), "дом");
        assert_eq!(normalize_answer("bom   dia"), "bom dia");
        assert_eq!(normalize_answer(""), "");
    }

    #[test]
    fn case_insensitive_match_is_correct() {
        let result =
            grade_word_answer(&catalog(), 1, TrainingMode::Pt2RuInput, "Дом").unwrap();
        assert!(result.correct);
        assert_eq!(result.correct_answer, "дом");
    }

    #[test]
    fn wrong_answer_still_returns_canonical_text() {
        let result =
            grade_word_answer(&catalog(), 1, TrainingMode::Pt2RuInput, "хлеб").unwrap();
        assert!(!result.correct);
        assert_eq!(result.correct_answer, "дом");
    }

    #[test]
    fn reverse_direction_expects_portuguese() {
        let result =
            grade_word_answer(&catalog(), 1, TrainingMode::Ru2PtChoice, " CASA ").unwrap();
        assert!(result.correct);
        assert_eq!(result.correct_answer, "casa");
    }

    #[test]
    fn unknown_card_is_not_found() {
        let err = grade_word_answer(&catalog(), 99, TrainingMode::Pt2RuInput, "x").unwrap_err();
        assert!(matches!(err, CoreError::NotFound { entity: "Word", .. }));
    }

    #[test]
    fn verb_mode_is_not_a_word_mode() {
        let err = grade_word_answer(&catalog(), 1, TrainingMode::Verbs, "x").unwrap_err();
        assert!(matches!(err, CoreError::InvalidMode(_)));
    }

    #[test]
    fn all_five_correct_forms() {
        let answers = full_answers(&[
            ("eu", "falo"),
            ("tu", "FALAS"),
            ("ele", " fala "),
            ("nos", "falamos"),
            ("eles", "falam"),
        ]);
        let result = grade_verb_answer(&catalog(), 1, &answers).unwrap();
        assert!(result.all_correct);
        assert!(result.results.values().all(|&ok| ok));
        assert_eq!(result.correct_forms[&Pronoun::Eles], "falam");
    }

    #[test]
    fn one_wrong_form_breaks_all_correct() {
        let answers = full_answers(&[
            ("eu", "falo"),
            ("tu", "falas"),
            ("ele", "falamos"),
            ("nos", "falamos"),
            ("eles", "falam"),
        ]);
        let result = grade_verb_answer(&catalog(), 1, &answers).unwrap();
        assert!(!result.all_correct);
        assert!(!result.results[&Pronoun::Ele]);
        assert!(result.results[&Pronoun::Eu]);
    }

    #[test]
    fn missing_and_blank_cells_count_as_wrong() {
        let answers = full_answers(&[("eu", "falo"), ("tu", "   ")]);
        let result = grade_verb_answer(&catalog(), 1, &answers).unwrap();
        assert!(!result.all_correct);
        assert!(result.results[&Pronoun::Eu]);
        assert!(!result.results[&Pronoun::Tu]);
        assert!(!result.results[&Pronoun::Nos]);
    }

    #[test]
    fn results_keep_pronoun_order() {
        let result = grade_verb_answer(&catalog(), 1, &HashMap::new()).unwrap();
        let keys: Vec<Pronoun> = result.results.keys().copied().collect();
        assert_eq!(keys, Pronoun::ALL);
    }

    #[test]
    fn unknown_verb_is_not_found() {
        let err = grade_verb_answer(&catalog(), 42, &HashMap::new()).unwrap_err();
        assert!(matches!(err, CoreError::NotFound { entity: "Verb", .. }));
    }
}
