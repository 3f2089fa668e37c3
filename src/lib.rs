// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod exec;
pub mod logging;
pub mod paths;
pub mod themes;
pub mod watch;

use std::path::Path;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::WatchConfig;
use crate::engine::{Runtime, RuntimeEvent, RuntimeOptions};
use crate::watch::WatchProfile;

const BANNER: &str = r"
 _     __   __ _   _ __  __
| |    \ \ / / | \ | |\ \/ /
| |     \ V /|  \| | >    <
| |___   | | | |\  |/ /\/\ \
|_____|  |_| |_| \_/_/    \_\
";

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - the immutable watch configuration
/// - theme auto-detection and path resolution
/// - the cleaner executor
/// - the file watcher
/// - Ctrl-C handling
pub async fn run(args: CliArgs) -> Result<()> {
    print_banner();

    let config = WatchConfig::from_args(&args);

    let detected = themes::detect_themes(Path::new(themes::THEME_BASE_DIR));
    let patterns = paths::resolve_watch_patterns(&config, &detected);
    debug!(?patterns, "resolved watch patterns");

    let profile = WatchProfile::compile(&patterns)?;

    info!(
        patterns = patterns.len(),
        "watching Magento files for changes"
    );

    // Runtime event channel.
    let (rt_tx, rt_rx) = mpsc::channel::<RuntimeEvent>(64);

    // Cache-clean executor.
    let clean_tx = exec::spawn_cleaner(rt_tx.clone());

    // File watcher; the handle must outlive the runtime loop.
    let watcher_handle = watch::spawn_watcher(".", profile, rt_tx.clone())?;

    // Ctrl-C → graceful shutdown.
    {
        let tx = rt_tx.clone();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                eprintln!("failed to listen for Ctrl+C: {e}");
                return;
            }
            let _ = tx.send(RuntimeEvent::ShutdownRequested).await;
        });
    }

    let options = RuntimeOptions {
        debounce: config.debounce,
        clean_command: exec::clean_command(&config.cache_types),
    };

    let runtime = Runtime::new(options, rt_rx, clean_tx);
    runtime.run().await?;

    drop(watcher_handle);
    Ok(())
}

fn print_banner() {
    println!("{BANNER}");
    println!("Welcome to lynx-watcher! Let's get started.");
}
