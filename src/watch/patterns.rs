// src/watch/patterns.rs

use std::fmt;

use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};

/// Directory name that never triggers a cache clean, wherever it appears
/// in a changed path.
const IGNORED_DIR: &str = "node_modules";

/// Compiled glob set for the resolved watch patterns.
///
/// Patterns are relative to the project root; the watcher passes relative
/// paths (e.g. `"app/code/Foo/view.phtml"`) into `matches`.
#[derive(Clone)]
pub struct WatchProfile {
    glob_set: GlobSet,
}

impl fmt::Debug for WatchProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WatchProfile").finish_non_exhaustive()
    }
}

impl WatchProfile {
    /// Compile the pattern list. Fails on the first invalid glob.
    pub fn compile(patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pat in patterns {
            let glob =
                Glob::new(pat).with_context(|| format!("invalid glob pattern: {pat}"))?;
            builder.add(glob);
        }
        Ok(Self {
            glob_set: builder.build()?,
        })
    }

    /// Returns true if a change to the given root-relative path should
    /// trigger a cache clean.
    pub fn matches(&self, rel_path: &str) -> bool {
        if rel_path.split('/').any(|part| part == IGNORED_DIR) {
            return false;
        }
        self.glob_set.is_match(rel_path)
    }
}
