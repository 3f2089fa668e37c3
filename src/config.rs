// src/config.rs

//! Run configuration built once from CLI arguments and passed by reference
//! to each component; nothing reads process-wide argument state after this.

use std::time::Duration;

use crate::cli::CliArgs;

/// Immutable watch configuration.
#[derive(Debug, Clone)]
pub struct WatchConfig {
    /// If set, watch only this glob instead of the default + theme set.
    pub path_override: Option<String>,

    /// Space-separated cache-type tokens, opaque to the watcher; interpreted
    /// by `bin/magento cache:clean`.
    pub cache_types: String,

    /// Explicit theme roots from `--theme`, order preserved as given.
    pub themes: Vec<String>,

    /// Trailing-edge debounce between a file change and the cache clean.
    pub debounce: Duration,
}

impl WatchConfig {
    pub fn from_args(args: &CliArgs) -> Self {
        Self {
            path_override: args.path.clone(),
            cache_types: args.cache.clone(),
            themes: args.theme.clone(),
            debounce: Duration::from_millis(args.debounce_ms),
        }
    }
}
