//! Request handlers, grouped by resource.

pub mod auth;
pub mod catalog;
pub mod progress;
pub mod training;
pub mod verbs;
