// src/engine/runtime.rs

use std::time::Duration;

use anyhow::{anyhow, Result};
use tokio::sync::mpsc;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, info, warn};

use crate::exec::CleanRequest;

/// Result of one cache-clean process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanOutcome {
    Success,
    Failed(i32), // exit code
}

/// Events sent into the runtime from the watcher, the cleaner, or the
/// Ctrl-C handler.
#[derive(Debug, Clone)]
pub enum RuntimeEvent {
    FileChanged { path: String },
    CleanFinished { outcome: CleanOutcome },
    ShutdownRequested,
}

/// Options that influence how the runtime behaves.
#[derive(Debug, Clone)]
pub struct RuntimeOptions {
    /// Trailing-edge debounce between a file change and the clean. A change
    /// arriving inside the window restarts it, so one burst of saves yields
    /// one clean.
    pub debounce: Duration,

    /// Full shell command used to clear the caches.
    pub clean_command: String,
}

/// The main event loop.
///
/// Responsibilities:
/// - Consume `RuntimeEvent`s from the watcher, cleaner and signal handler.
/// - Coalesce bursts of file changes into a single clean request.
/// - Keep at most one clean in flight; a change arriving mid-clean records
///   exactly one rerun instead of spawning a second process.
/// - On shutdown, wait for an in-flight clean before exiting.
pub struct Runtime {
    options: RuntimeOptions,

    /// Unified event stream from all producers.
    events_rx: mpsc::Receiver<RuntimeEvent>,

    /// Channel to the cleaner loop.
    clean_tx: mpsc::Sender<CleanRequest>,

    /// When set, a debounce window is open and a clean fires at this instant.
    deadline: Option<Instant>,

    in_flight: bool,
    rerun_pending: bool,
}

impl Runtime {
    pub fn new(
        options: RuntimeOptions,
        events_rx: mpsc::Receiver<RuntimeEvent>,
        clean_tx: mpsc::Sender<CleanRequest>,
    ) -> Self {
        Self {
            options,
            events_rx,
            clean_tx,
            deadline: None,
            in_flight: false,
            rerun_pending: false,
        }
    }

    /// Main event loop. Returns when shutdown is requested or every event
    /// producer has gone away.
    pub async fn run(mut self) -> Result<()> {
        info!("lynx-watcher runtime started");

        loop {
            let deadline = self.deadline.unwrap_or_else(Instant::now);
            tokio::select! {
                maybe_event = self.events_rx.recv() => {
                    let Some(event) = maybe_event else { break };
                    debug!(?event, "runtime received event");
                    if !self.handle_event(event).await? {
                        break;
                    }
                }
                _ = sleep_until(deadline), if self.deadline.is_some() => {
                    self.deadline = None;
                    self.request_clean().await?;
                }
            }
        }

        info!("lynx-watcher runtime exiting");
        Ok(())
    }

    async fn handle_event(&mut self, event: RuntimeEvent) -> Result<bool> {
        match event {
            RuntimeEvent::FileChanged { path } => {
                info!("file changed: {path}");
                self.deadline = Some(Instant::now() + self.options.debounce);
            }
            RuntimeEvent::CleanFinished { outcome } => {
                self.in_flight = false;
                match outcome {
                    CleanOutcome::Success => debug!("cache clean finished"),
                    CleanOutcome::Failed(code) => {
                        warn!(exit_code = code, "cache clean failed; continuing to watch");
                    }
                }
                if self.rerun_pending {
                    self.rerun_pending = false;
                    self.request_clean().await?;
                }
            }
            RuntimeEvent::ShutdownRequested => {
                info!("shutdown requested, stopping watcher");
                self.await_in_flight_clean().await;
                return Ok(false);
            }
        }

        Ok(true)
    }

    /// Dispatch a clean to the executor, or record a single rerun if one is
    /// already running.
    async fn request_clean(&mut self) -> Result<()> {
        if self.in_flight {
            debug!("clean already in flight; recording rerun");
            self.rerun_pending = true;
            return Ok(());
        }

        self.in_flight = true;
        self.clean_tx
            .send(CleanRequest {
                command: self.options.clean_command.clone(),
            })
            .await
            .map_err(|err| anyhow!("failed to send clean request to executor: {err}"))
    }

    /// Wait for an in-flight clean to report back, so the child process is
    /// not abandoned mid-run on shutdown.
    async fn await_in_flight_clean(&mut self) {
        if !self.in_flight {
            return;
        }

        info!("waiting for in-flight cache clean to finish");
        while let Some(event) = self.events_rx.recv().await {
            if let RuntimeEvent::CleanFinished { outcome } = event {
                debug!(?outcome, "in-flight clean finished");
                break;
            }
        }
    }
}
