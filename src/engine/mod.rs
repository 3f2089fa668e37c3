// src/engine/mod.rs

//! The runtime event loop.
//!
//! This ties together:
//! - file-change triggers from the watcher
//! - debounce and single-in-flight policy for cache cleans
//! - clean completion events from the executor
//! - shutdown signals

pub mod runtime;

pub use runtime::{CleanOutcome, Runtime, RuntimeEvent, RuntimeOptions};
