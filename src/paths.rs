// src/paths.rs

//! Watch-path resolution.
//!
//! The final pattern set is built once at startup from three sources, in
//! order: the fixed Magento defaults, four globs per auto-detected theme,
//! four globs per explicit `--theme`. An explicit `--path` short-circuits
//! the whole computation. No deduplication is performed; duplicate globs
//! are harmless to the watcher.

use crate::config::WatchConfig;

/// Default globs covering the Magento directories a frontend change can
/// land in.
pub const DEFAULT_PATTERNS: &[&str] = &[
    "app/code/**/*.js",
    "app/code/**/*.phtml",
    "app/code/**/*.xml",
    "app/code/**/*.less",
    "vendor/magento/**/*.js",
    "vendor/magento/**/*.phtml",
    "vendor/magento/**/*.xml",
    "app/design/frontend/**/*.js",
    "app/design/frontend/**/*.phtml",
    "app/design/frontend/**/*.xml",
    "app/design/frontend/**/*.less",
    "pub/static/frontend/**/*.js",
    "pub/static/frontend/**/*.less",
];

/// File categories watched inside each theme root.
const THEME_EXTENSIONS: [&str; 4] = ["js", "phtml", "xml", "less"];

/// The four per-category globs for one theme root.
pub fn theme_patterns(theme_root: &str) -> Vec<String> {
    let root = theme_root.trim_end_matches('/');
    THEME_EXTENSIONS
        .iter()
        .map(|ext| format!("{root}/**/*.{ext}"))
        .collect()
}

/// Compute the ordered pattern set to watch: defaults, then detected
/// themes, then explicit themes — unless `--path` overrides everything.
pub fn resolve_watch_patterns(config: &WatchConfig, detected_themes: &[String]) -> Vec<String> {
    if let Some(path) = &config.path_override {
        return vec![path.clone()];
    }

    let mut patterns: Vec<String> = DEFAULT_PATTERNS.iter().map(|p| p.to_string()).collect();

    for theme in detected_themes.iter().chain(config.themes.iter()) {
        patterns.extend(theme_patterns(theme));
    }

    patterns
}
