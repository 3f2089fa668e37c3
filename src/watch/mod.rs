// src/watch/mod.rs

//! File watching and change detection.
//!
//! This module is responsible for:
//! - Compiling the resolved watch patterns into a glob set.
//! - Wiring up a cross-platform filesystem watcher (`notify`).
//!
//! It does **not** know about cache types or debounce policy; it only turns
//! filesystem changes into runtime events.

pub mod patterns;
pub mod watcher;

pub use patterns::WatchProfile;
pub use watcher::{spawn_watcher, WatcherHandle};
