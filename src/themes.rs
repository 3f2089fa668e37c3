// src/themes.rs

//! Theme auto-detection.
//!
//! Vaimo projects keep their themes under `vendor/vaimo/<name>`; every
//! immediate subdirectory found there at startup is watched alongside the
//! default Magento paths. The listing is not re-scanned while running.

use std::fs;
use std::io;
use std::path::Path;

use tracing::{info, warn};

/// Base directory scanned for theme packages, relative to the Magento root.
pub const THEME_BASE_DIR: &str = "vendor/vaimo";

/// List the immediate subdirectories of `base` (directories only), each
/// joined with the base path, in directory-listing order.
///
/// A missing or unreadable base directory is not fatal: it logs a warning
/// and returns an empty list so the watcher proceeds with the default and
/// explicit paths only.
pub fn detect_themes(base: &Path) -> Vec<String> {
    let themes = match list_theme_dirs(base) {
        Ok(themes) => themes,
        Err(err) => {
            warn!(base = %base.display(), error = %err, "could not detect themes");
            return Vec::new();
        }
    };

    if themes.is_empty() {
        warn!(base = %base.display(), "no themes detected");
    } else {
        info!("auto-detected themes: {}", themes.join(", "));
    }

    themes
}

fn list_theme_dirs(base: &Path) -> io::Result<Vec<String>> {
    let mut themes = Vec::new();

    for entry in fs::read_dir(base)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            let joined = base.join(entry.file_name());
            themes.push(joined.to_string_lossy().replace('\\', "/"));
        }
    }

    Ok(themes)
}
