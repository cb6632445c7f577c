//! Question generation: item selection, distractor sampling, shuffling.
//!
//! Generation is read-only and side-effect free; progress is only touched
//! when an answer is submitted. The random source is injected so tests can
//! drive it with a seeded [`rand::rngs::StdRng`].

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;
use serde::Serialize;
use std::collections::HashSet;

use crate::catalog::{Catalog, CategoryFilter};
use crate::error::CoreError;
use crate::mode::TrainingMode;
use crate::types::DbId;

/// Smallest allowed option list in choice modes.
pub const MIN_OPTION_COUNT: usize = 2;
/// Largest option list a client may request.
pub const MAX_OPTION_COUNT: usize = 6;

/// One question, alive for a single request/answer round-trip.
///
/// Never persisted; grading re-derives the expected answer from `card_id`,
/// so nothing client-echoed is trusted.
#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub card_id: DbId,
    pub mode: TrainingMode,
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

/// A verb conjugation prompt: the infinitive, answers come as a form table.
#[derive(Debug, Clone, Serialize)]
pub struct VerbQuestion {
    pub verb_id: DbId,
    pub infinitive: String,
}

/// Generate a question for any mode.
///
/// The item is drawn uniformly from the filtered pool; selection does not
/// consult progress state. For choice modes, `option_count` (validated
/// `>= 2`) bounds the option list: the expected answer plus up to
/// `option_count - 1` distinct distractor texts drawn without replacement
/// from the rest of the pool. The list is shuffled, so the answer position
/// carries no information.
///
/// Errors: [`CoreError::EmptyPool`] when the filter leaves no candidates,
/// [`CoreError::InsufficientPool`] when a choice mode cannot produce a
/// single distractor distinct from the answer text.
pub fn generate_question<R: Rng + ?Sized>(
    catalog: &Catalog,
    mode: TrainingMode,
    option_count: usize,
    filter: Option<&CategoryFilter>,
    rng: &mut R,
) -> Result<Question, CoreError> {
    let Some(direction) = mode.direction() else {
        // Verb mode has no options and no category filtering.
        let verb = generate_verb_question(catalog, rng)?;
        return Ok(Question {
            card_id: verb.verb_id,
            mode,
            prompt: verb.infinitive,
            options: None,
        });
    };

    let pool = catalog.words_in(filter);
    let card = *pool.choose(rng).ok_or(CoreError::EmptyPool)?;

    if !mode.is_choice() {
        return Ok(Question {
            card_id: card.id,
            mode,
            prompt: direction.prompt(card).to_string(),
            options: None,
        });
    }

    if option_count < MIN_OPTION_COUNT {
        return Err(CoreError::Validation(format!(
            "Option count must be at least {MIN_OPTION_COUNT}, got {option_count}"
        )));
    }

    let answer = direction.answer(card);

    // Distinct distractor texts from the rest of the pool. Deduplicated on
    // the displayed string so two cards sharing a translation cannot both
    // appear, and never equal to the answer text itself.
    let mut seen: HashSet<&str> = HashSet::new();
    seen.insert(answer);
    let mut candidates: Vec<&str> = Vec::new();
    for word in pool.iter().filter(|w| w.id != card.id) {
        let text = direction.answer(word);
        if seen.insert(text) {
            candidates.push(text);
        }
    }
    if candidates.is_empty() {
        return Err(CoreError::InsufficientPool);
    }

    let take = usize::min(option_count - 1, candidates.len());
    let mut options: Vec<String> = candidates
        .choose_multiple(rng, take)
        .map(|s| s.to_string())
        .collect();
    options.push(answer.to_string());
    options.shuffle(rng);

    Ok(Question {
        card_id: card.id,
        mode,
        prompt: direction.prompt(card).to_string(),
        options: Some(options),
    })
}

/// Pick a random verb and return its conjugation prompt.
pub fn generate_verb_question<R: Rng + ?Sized>(
    catalog: &Catalog,
    rng: &mut R,
) -> Result<VerbQuestion, CoreError> {
    let verb = catalog.verbs().choose(rng).ok_or(CoreError::EmptyPool)?;
    Ok(VerbQuestion {
        verb_id: verb.id,
        infinitive: verb.infinitive.clone(),
    })
}
