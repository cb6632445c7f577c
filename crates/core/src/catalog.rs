//! Static reference data: the word and verb catalogs.
//!
//! The catalog is loaded once at startup from JSON (the same shape the data
//! files have always used: `pt`/`ru` text pairs plus an optional `category`,
//! and verbs carrying their five conjugated forms inline). It is read-only
//! for the lifetime of the process.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

/// A vocabulary card: one Portuguese/Russian text pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Word {
    pub id: DbId,
    /// Portuguese (source) text.
    pub pt: String,
    /// Russian (target) text.
    pub ru: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// The five pronoun slots a verb is conjugated for, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pronoun {
    Eu,
    Tu,
    Ele,
    Nos,
    Eles,
}

impl Pronoun {
    /// All pronouns in the fixed presentation order: eu, tu, ele, nos, eles.
    pub const ALL: [Pronoun; 5] = [
        Pronoun::Eu,
        Pronoun::Tu,
        Pronoun::Ele,
        Pronoun::Nos,
        Pronoun::Eles,
    ];

    /// The JSON/wire key for this pronoun.
    pub fn key(self) -> &'static str {
        match self {
            Pronoun::Eu => "eu",
            Pronoun::Tu => "tu",
            Pronoun::Ele => "ele",
            Pronoun::Nos => "nos",
            Pronoun::Eles => "eles",
        }
    }
}

/// The conjugated forms of one verb.
///
/// A struct rather than a map: every verb must carry all five forms, and
/// making them named fields turns that invariant into a parse error instead
/// of a runtime check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerbForms {
    pub eu: String,
    pub tu: String,
    pub ele: String,
    pub nos: String,
    pub eles: String,
}

impl VerbForms {
    pub fn get(&self, pronoun: Pronoun) -> &str {
        match pronoun {
            Pronoun::Eu => &self.eu,
            Pronoun::Tu => &self.tu,
            Pronoun::Ele => &self.ele,
            Pronoun::Nos => &self.nos,
            Pronoun::Eles => &self.eles,
        }
    }
}

/// A verb with its infinitive and conjugation table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verb {
    pub id: DbId,
    pub infinitive: String,
    #[serde(flatten)]
    pub forms: VerbForms,
}

/// A non-empty set of category labels used to restrict the word pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFilter(BTreeSet<String>);

impl CategoryFilter {
    /// Parse a comma-separated label list, e.g. `"food,travel"`.
    ///
    /// Blank segments are dropped; returns `None` when nothing remains, so
    /// an absent or empty query parameter means "no filter".
    pub fn parse(raw: &str) -> Option<Self> {
        let labels: BTreeSet<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        if labels.is_empty() {
            None
        } else {
            Some(CategoryFilter(labels))
        }
    }

    pub fn matches(&self, word: &Word) -> bool {
        word.category
            .as_deref()
            .is_some_and(|c| self.0.contains(c))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// Read-only word/verb reference data with id lookup.
#[derive(Debug, Clone)]
pub struct Catalog {
    words: Vec<Word>,
    verbs: Vec<Verb>,
    words_by_id: HashMap<DbId, usize>,
    verbs_by_id: HashMap<DbId, usize>,
}

impl Catalog {
    /// Build a catalog, indexing items by id.
    ///
    /// Duplicate ids are a data error and rejected outright.
    pub fn new(words: Vec<Word>, verbs: Vec<Verb>) -> Result<Self, CoreError> {
        let mut words_by_id = HashMap::with_capacity(words.len());
        for (i, w) in words.iter().enumerate() {
            if words_by_id.insert(w.id, i).is_some() {
                return Err(CoreError::Validation(format!(
                    "Duplicate word id {} in catalog",
                    w.id
                )));
            }
        }
        let mut verbs_by_id = HashMap::with_capacity(verbs.len());
        for (i, v) in verbs.iter().enumerate() {
            if verbs_by_id.insert(v.id, i).is_some() {
                return Err(CoreError::Validation(format!(
                    "Duplicate verb id {} in catalog",
                    v.id
                )));
            }
        }
        Ok(Catalog {
            words,
            verbs,
            words_by_id,
            verbs_by_id,
        })
    }

    /// Parse a catalog from the raw JSON of the two data files.
    pub fn from_json(words_json: &str, verbs_json: &str) -> Result<Self, CoreError> {
        let words: Vec<Word> = serde_json::from_str(words_json)
            .map_err(|e| CoreError::Internal(format!("Words data corrupt: {e}")))?;
        let verbs: Vec<Verb> = serde_json::from_str(verbs_json)
            .map_err(|e| CoreError::Internal(format!("Verbs data corrupt: {e}")))?;
        Self::new(words, verbs)
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn verbs(&self) -> &[Verb] {
        &self.verbs
    }

    /// Look up a word by id.
    pub fn word(&self, id: DbId) -> Result<&Word, CoreError> {
        self.words_by_id
            .get(&id)
            .map(|&i| &self.words[i])
            .ok_or(CoreError::NotFound { entity: "Word", id })
    }

    /// Look up a verb by id.
    pub fn verb(&self, id: DbId) -> Result<&Verb, CoreError> {
        self.verbs_by_id
            .get(&id)
            .map(|&i| &self.verbs[i])
            .ok_or(CoreError::NotFound { entity: "Verb", id })
    }

    /// The word pool after applying an optional category filter.
    ///
    /// Words without a category never match a filter.
    pub fn words_in(&self, filter: Option<&CategoryFilter>) -> Vec<&Word> {
        match filter {
            None => self.words.iter().collect(),
            Some(f) => self.words.iter().filter(|w| f.matches(w)).collect(),
        }
    }
}
