// ABOUTME: Background tokio task issuing the shared clock tick while any counter is live
// ABOUTME: Parks on a Notify when idle and stops through an mpsc shutdown channel
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, Notify};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::debug;

use super::SharedClock;

/// Owner of the single ticking task for one clock engine
///
/// Ticks never overlap: each one locks the engine for its whole update. When the
/// host stalls, missed ticks are skipped rather than replayed.
pub struct ClockDriver {
    shutdown_tx: mpsc::Sender<()>,
    handle: Option<JoinHandle<()>>,
}

impl ClockDriver {
    /// Spawn the tick task for `clock`
    ///
    /// Must be called from within a tokio runtime.
    pub async fn spawn(clock: SharedClock, period: Duration) -> Self {
        let wake = Arc::new(Notify::new());
        clock.lock().await.attach_wake(wake.clone());

        let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);
        let handle = tokio::spawn(async move {
            loop {
                let live = clock.lock().await.needs_ticking();
                if !live {
                    tokio::select! {
                        () = wake.notified() => continue,
                        _ = shutdown_rx.recv() => break,
                    }
                }

                debug!(period_ms = period.as_millis(), "Clock ticking started");
                let mut interval = interval_at(Instant::now() + period, period);
                interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            let mut engine = clock.lock().await;
                            engine.tick();
                            if !engine.needs_ticking() {
                                debug!("Clock idle");
                                break;
                            }
                        }
                        _ = shutdown_rx.recv() => {
                            debug!("Clock driver received shutdown signal");
                            return;
                        }
                    }
                }
            }
        });

        Self {
            shutdown_tx,
            handle: Some(handle),
        }
    }

    /// Stop the tick task and wait for it to exit
    pub async fn shutdown(mut self) {
        // A closed channel means the task already exited
        let _ = self.shutdown_tx.send(()).await;
        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.await {
                debug!(error = %e, "Clock driver task ended abnormally");
            }
        }
    }
}

impl Drop for ClockDriver {
    fn drop(&mut self) {
        if self.handle.is_some() {
            if let Err(e) = self.shutdown_tx.try_send(()) {
                debug!(error = ?e, "Clock shutdown signal send failed (task likely gone)");
            }
        }
    }
}
