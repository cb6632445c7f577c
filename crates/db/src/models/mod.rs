//! Row structs: `FromRow` + `Serialize` types matching the database schema.

pub mod progress;
pub mod user;
