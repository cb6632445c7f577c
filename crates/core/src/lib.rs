//! Domain logic for the palavra vocabulary trainer.
//!
//! Everything here is pure and synchronous: catalog reference data,
//! question generation, answer grading, mastery statistics, and the client
//! session state machine. Persistence and HTTP live in `palavra-db` and
//! `palavra-api`.

pub mod catalog;
pub mod error;
pub mod grading;
pub mod mode;
pub mod progress;
pub mod question;
pub mod session;
pub mod types;
