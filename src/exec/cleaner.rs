// src/exec/cleaner.rs

use std::process::Stdio;

use anyhow::{Context, Result};
use tokio::process::Command;
use tokio::sync::mpsc;
use tracing::{error, info};

use crate::engine::{CleanOutcome, RuntimeEvent};

/// Base cache-clean command. Resolved against the ambient working directory,
/// which must be the Magento root.
const CLEAN_COMMAND: &str = "php bin/magento cache:clean";

/// One cache-clean invocation, carrying the full shell command to run.
#[derive(Debug, Clone)]
pub struct CleanRequest {
    pub command: String,
}

/// Build the clean command line for a space-separated cache-type string.
/// The tokens are opaque here; `bin/magento` interprets them.
pub fn clean_command(cache_types: &str) -> String {
    format!("{CLEAN_COMMAND} {cache_types}")
}

/// Spawn the background cleaner loop.
///
/// The returned sender is what the runtime uses to dispatch cleans.
/// Requests are processed one at a time; the runtime's single in-flight
/// slot means at most one is ever waiting behind a running clean.
pub fn spawn_cleaner(runtime_tx: mpsc::Sender<RuntimeEvent>) -> mpsc::Sender<CleanRequest> {
    let (tx, mut rx) = mpsc::channel::<CleanRequest>(16);

    tokio::spawn(async move {
        while let Some(request) = rx.recv().await {
            let outcome = match run_clean(&request.command).await {
                Ok(outcome) => outcome,
                Err(err) => {
                    error!(error = %err, "cache clean could not be spawned");
                    CleanOutcome::Failed(-1)
                }
            };
            if runtime_tx
                .send(RuntimeEvent::CleanFinished { outcome })
                .await
                .is_err()
            {
                // Runtime is gone; nothing left to report to.
                break;
            }
        }
    });

    tx
}

/// Run one clean command to completion, logging its output.
async fn run_clean(command: &str) -> Result<CleanOutcome> {
    info!("cleaning caches: {command}");

    // Build a shell command appropriate for the platform.
    let mut cmd = if cfg!(windows) {
        let mut c = Command::new("cmd");
        c.arg("/C").arg(command);
        c
    } else {
        let mut c = Command::new("sh");
        c.arg("-c").arg(command);
        c
    };

    cmd.stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let output = cmd
        .output()
        .await
        .with_context(|| format!("spawning cache clean command '{command}'"))?;

    if output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        info!("cache cleared: {}", stdout.trim());
        Ok(CleanOutcome::Success)
    } else {
        let code = output.status.code().unwrap_or(-1);
        let stderr = String::from_utf8_lossy(&output.stderr);
        error!(exit_code = code, "error clearing cache: {}", stderr.trim());
        Ok(CleanOutcome::Failed(code))
    }
}
