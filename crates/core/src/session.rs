//! The client practice session: a bounded run of questions with a score.
//!
//! The session lives on one client and never crosses requests, but its
//! boundary conditions are exact, so the machine is modeled here and unit
//! tested rather than left implicit in a UI. Persisted mastery state is
//! untouched by anything in this module.

use serde::Serialize;

use crate::catalog::CategoryFilter;
use crate::error::CoreError;
use crate::mode::TrainingMode;

/// Questions per practice run.
pub const SESSION_SIZE: u32 = 10;

/// Where the session currently is.
///
/// `Loading` covers both in-flight fetches and in-flight grading; the
/// transition methods disambiguate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    Idle,
    Loading,
    Answering,
    Feedback,
    Finished,
}

/// Aggregate state for one practice run.
#[derive(Debug, Clone)]
pub struct Session {
    phase: SessionPhase,
    answered: u32,
    correct: u32,
    mode: TrainingMode,
    categories: Option<CategoryFilter>,
}

impl Session {
    pub fn new(mode: TrainingMode, categories: Option<CategoryFilter>) -> Self {
        Session {
            phase: SessionPhase::Idle,
            answered: 0,
            correct: 0,
            mode,
            categories,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn answered(&self) -> u32 {
        self.answered
    }

    pub fn correct(&self) -> u32 {
        self.correct
    }

    pub fn mode(&self) -> TrainingMode {
        self.mode
    }

    pub fn categories(&self) -> Option<&CategoryFilter> {
        self.categories.as_ref()
    }

    fn invalid(&self, event: &str) -> CoreError {
        CoreError::Conflict(format!(
            "Cannot {event} in session phase {:?}",
            self.phase
        ))
    }

    /// A question fetch begins. Valid from `Idle` and `Feedback`.
    pub fn begin_fetch(&mut self) -> Result<(), CoreError> {
        match self.phase {
            SessionPhase::Idle | SessionPhase::Feedback => {
                self.phase = SessionPhase::Loading;
                Ok(())
            }
            _ => Err(self.invalid("begin a fetch")),
        }
    }

    /// The question arrived; the learner may answer.
    pub fn question_received(&mut self) -> Result<(), CoreError> {
        match self.phase {
            SessionPhase::Loading => {
                self.phase = SessionPhase::Answering;
                Ok(())
            }
            _ => Err(self.invalid("receive a question")),
        }
    }

    /// The fetch failed; nothing was graded, the session returns to `Idle`.
    pub fn fetch_failed(&mut self) -> Result<(), CoreError> {
        match self.phase {
            SessionPhase::Loading => {
                self.phase = SessionPhase::Idle;
                Ok(())
            }
            _ => Err(self.invalid("fail a fetch")),
        }
    }

    /// An answer was submitted for grading.
    pub fn submit_answer(&mut self) -> Result<(), CoreError> {
        match self.phase {
            SessionPhase::Answering => {
                self.phase = SessionPhase::Loading;
                Ok(())
            }
            _ => Err(self.invalid("submit an answer")),
        }
    }

    /// Grading failed; the learner may retry the same question.
    pub fn grade_failed(&mut self) -> Result<(), CoreError> {
        match self.phase {
            SessionPhase::Loading => {
                self.phase = SessionPhase::Answering;
                Ok(())
            }
            _ => Err(self.invalid("fail grading")),
        }
    }

    /// Grading succeeded: update counters and either show feedback or, on
    /// the final question, finish the run. Once `Finished`, further grading
    /// is rejected until [`Session::restart`].
    pub fn graded(&mut self, correct: bool) -> Result<SessionPhase, CoreError> {
        if self.phase != SessionPhase::Loading {
            return Err(self.invalid("apply a grade"));
        }
        self.answered += 1;
        if correct {
            self.correct += 1;
        }
        self.phase = if self.answered == SESSION_SIZE {
            SessionPhase::Finished
        } else {
            SessionPhase::Feedback
        };
        Ok(self.phase)
    }

    /// Switch mode. Any change discards the run: stale counters must never
    /// be attributed to a new mode/filter combination.
    pub fn set_mode(&mut self, mode: TrainingMode) {
        if mode != self.mode {
            self.mode = mode;
            self.reset();
        }
    }

    /// Switch the category filter; same reset rule as [`Session::set_mode`].
    pub fn set_categories(&mut self, categories: Option<CategoryFilter>) {
        if categories != self.categories {
            self.categories = categories;
            self.reset();
        }
    }

    /// Explicit restart, e.g. the "go again" button on the results screen.
    pub fn restart(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.phase = SessionPhase::Idle;
        self.answered = 0;
        self.correct = 0;
    }

    /// Final score, available once the run is `Finished`.
    pub fn score(&self) -> Option<(u32, u32)> {
        (self.phase == SessionPhase::Finished).then_some((self.correct, SESSION_SIZE))
    }
}
