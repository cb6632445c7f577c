//! Training modes: the direction and answer format of a question.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::Word;
use crate::error::CoreError;

/// Which side of the card is shown and how the answer is collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrainingMode {
    /// Portuguese prompt, pick the Russian translation from options.
    #[serde(rename = "pt2ru_choice")]
    Pt2RuChoice,
    /// Russian prompt, pick the Portuguese translation from options.
    #[serde(rename = "ru2pt_choice")]
    Ru2PtChoice,
    /// Portuguese prompt, type the Russian translation.
    #[serde(rename = "pt2ru_input")]
    Pt2RuInput,
    /// Russian prompt, type the Portuguese translation.
    #[serde(rename = "ru2pt_input")]
    Ru2PtInput,
    /// Conjugation table for a random verb.
    #[serde(rename = "verbs")]
    Verbs,
}

/// Translation direction of a word-mode question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    PtToRu,
    RuToPt,
}

impl Direction {
    /// The text shown as the prompt.
    pub fn prompt<'a>(self, word: &'a Word) -> &'a str {
        match self {
            Direction::PtToRu => &word.pt,
            Direction::RuToPt => &word.ru,
        }
    }

    /// The expected answer text (and the distractor side in choice modes).
    pub fn answer<'a>(self, word: &'a Word) -> &'a str {
        match self {
            Direction::PtToRu => &word.ru,
            Direction::RuToPt => &word.pt,
        }
    }
}

impl TrainingMode {
    pub fn as_str(self) -> &'static str {
        match self {
            TrainingMode::Pt2RuChoice => "pt2ru_choice",
            TrainingMode::Ru2PtChoice => "ru2pt_choice",
            TrainingMode::Pt2RuInput => "pt2ru_input",
            TrainingMode::Ru2PtInput => "ru2pt_input",
            TrainingMode::Verbs => "verbs",
        }
    }

    /// `true` for modes that present a fixed option list.
    pub fn is_choice(self) -> bool {
        matches!(self, TrainingMode::Pt2RuChoice | TrainingMode::Ru2PtChoice)
    }

    /// The translation direction, or `None` for verb mode.
    pub fn direction(self) -> Option<Direction> {
        match self {
            TrainingMode::Pt2RuChoice | TrainingMode::Pt2RuInput => Some(Direction::PtToRu),
            TrainingMode::Ru2PtChoice | TrainingMode::Ru2PtInput => Some(Direction::RuToPt),
            TrainingMode::Verbs => None,
        }
    }
}

impl FromStr for TrainingMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pt2ru_choice" => Ok(TrainingMode::Pt2RuChoice),
            "ru2pt_choice" => Ok(TrainingMode::Ru2PtChoice),
            "pt2ru_input" => Ok(TrainingMode::Pt2RuInput),
            "ru2pt_input" => Ok(TrainingMode::Ru2PtInput),
            "verbs" => Ok(TrainingMode::Verbs),
            other => Err(CoreError::InvalidMode(other.to_string())),
        }
    }
}

impl fmt::Display for TrainingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_every_mode() {
        for mode in [
            TrainingMode::Pt2RuChoice,
            TrainingMode::Ru2PtChoice,
            TrainingMode::Pt2RuInput,
            TrainingMode::Ru2PtInput,
            TrainingMode::Verbs,
        ] {
            assert_eq!(mode.as_str().parse::<TrainingMode>().unwrap(), mode);
        }
    }

    #[test]
    fn unknown_mode_is_invalid() {
        let err = "ru2de_choice".parse::<TrainingMode>().unwrap_err();
        assert!(matches!(err, CoreError::InvalidMode(s) if s == "ru2de_choice"));
    }

    #[test]
    fn serde_uses_wire_names() {
        let json = serde_json::to_string(&TrainingMode::Pt2RuChoice).unwrap();
        assert_eq!(json, "\"pt2ru_choice\"");
        let mode: TrainingMode = serde_json::from_str("\"verbs\"").unwrap();
        assert_eq!(mode, TrainingMode::Verbs);
    }

    #[test]
    fn direction_sides() {
        let word = Word {
            id: 1,
            pt: "casa".into(),
            ru: "дом".into(),
            category: None,
        };
        let dir = TrainingMode::Pt2RuInput.direction().unwrap();
        assert_eq!(dir.prompt(&word), "casa");
        assert_eq!(dir.answer(&word), "дом");

        let dir = TrainingMode::Ru2PtChoice.direction().unwrap();
        assert_eq!(dir.prompt(&word), "дом");
        assert_eq!(dir.answer(&word), "casa");

        assert!(TrainingMode::Verbs.direction().is_none());
    }
}
