// src/exec/mod.rs

//! Process execution layer.
//!
//! Runs the cache-clean command with `tokio::process::Command` and reports
//! outcomes back to the runtime via `RuntimeEvent`s. Command failures are
//! logged and reported, never propagated as process-level errors.

pub mod cleaner;

pub use cleaner::{clean_command, spawn_cleaner, CleanRequest};
