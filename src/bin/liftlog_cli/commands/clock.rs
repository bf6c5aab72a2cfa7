// ABOUTME: Clock commands for the liftlog CLI: countdown timer, stopwatch, rest timer and watch
// ABOUTME: Spawns the tick driver and redraws a one-line readout until done or Ctrl-C
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

use std::time::Duration;

use anyhow::Result;
use liftlog::clock::{ClockDriver, ClockEngine};
use liftlog::config::TrackerConfig;
use liftlog::models::ClockMode;
use liftlog::session::WorkoutSession;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{interval, MissedTickBehavior};
use tracing::debug;

use crate::helpers::display::{format_seconds, redraw_line};

const REDRAW_PERIOD: Duration = Duration::from_millis(250);

/// Redraw `render`'s line until it returns `None` or the user presses Ctrl-C
///
/// Returns `true` when interrupted.
async fn run_until<F>(session: &WorkoutSession, render: F) -> Result<bool>
where
    F: Fn(&ClockEngine) -> Option<String>,
{
    let clock = session.clock();
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);
    let mut redraw = interval(REDRAW_PERIOD);
    redraw.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            result = &mut ctrl_c => {
                result?;
                println!();
                return Ok(true);
            }
            _ = redraw.tick() => {
                let line = render(&*clock.lock().await);
                match line {
                    Some(line) => redraw_line(&line),
                    None => {
                        println!();
                        return Ok(false);
                    }
                }
            }
        }
    }
}

/// Run a countdown in the foreground
pub async fn timer(
    session: &WorkoutSession,
    config: &TrackerConfig,
    minutes: i64,
    seconds: i64,
) -> Result<()> {
    if minutes.saturating_mul(60).saturating_add(seconds) <= 0 {
        println!("Timer needs a positive duration");
        return Ok(());
    }
    let clock = session.clock();
    {
        let mut engine = clock.lock().await;
        engine.start_timer(minutes, seconds);
        engine.set_timer_inputs(
            u32::try_from(minutes).unwrap_or(0),
            u32::try_from(seconds).unwrap_or(0),
        );
    }

    let driver = ClockDriver::spawn(clock.clone(), config.tick_interval).await;
    let interrupted = run_until(session, |engine| {
        if engine.timer_active() {
            engine
                .countdown_remaining()
                .map(|remaining| format!("Timer {}", format_seconds(remaining)))
        } else {
            None
        }
    })
    .await?;

    if interrupted {
        clock.lock().await.set_timer_active(false);
        println!("Timer paused");
    } else {
        println!("Time's up!");
    }
    driver.shutdown().await;
    Ok(())
}

/// Run the stopwatch in the foreground; each line on stdin records a lap
pub async fn stopwatch(
    session: &WorkoutSession,
    config: &TrackerConfig,
    reset: bool,
) -> Result<()> {
    let clock = session.clock();
    {
        let mut engine = clock.lock().await;
        if reset {
            engine.reset_clock();
        }
        engine.set_mode(ClockMode::Stopwatch);
        engine.set_timer_active(true);
    }
    println!("Stopwatch running. Press Enter for a lap, Ctrl-C to stop.");

    let driver = ClockDriver::spawn(clock.clone(), config.tick_interval).await;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);
    let mut redraw = interval(REDRAW_PERIOD);
    redraw.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            result = &mut ctrl_c => {
                result?;
                println!();
                break;
            }
            line = lines.next_line(), if stdin_open => {
                match line? {
                    Some(_) => {
                        let mut engine = clock.lock().await;
                        engine.add_lap();
                        if let Some(lap) = engine.laps().first() {
                            println!("Lap {}: {}", engine.laps().len(), format_seconds(*lap));
                        }
                    }
                    None => {
                        debug!("stdin closed; laps disabled");
                        stdin_open = false;
                    }
                }
            }
            _ = redraw.tick() => {
                let duration = clock.lock().await.duration();
                redraw_line(&format!("Stopwatch {}", format_seconds(duration)));
            }
        }
    }

    let laps = {
        let mut engine = clock.lock().await;
        engine.set_timer_active(false);
        println!("Stopwatch paused at {}", format_seconds(engine.duration()));
        engine.laps().to_vec()
    };
    let count = laps.len();
    for (offset, lap) in laps.iter().enumerate() {
        println!("   Lap {}: {}", count - offset, format_seconds(*lap));
    }
    driver.shutdown().await;
    Ok(())
}

/// Start, adjust, skip or follow the rest timer
pub async fn rest(
    session: &WorkoutSession,
    config: &TrackerConfig,
    seconds: Option<u64>,
    add: Option<i64>,
    skip: bool,
) -> Result<()> {
    let clock = session.clock();
    {
        let mut engine = clock.lock().await;
        if skip {
            engine.stop_rest_timer();
            println!("Rest skipped");
            return Ok(());
        }
        if let Some(delta) = add {
            engine.add_rest_time(delta);
        } else if let Some(seconds) = seconds {
            engine.start_rest_timer(seconds);
        }
        if engine.rest_remaining().is_none() {
            println!("No rest timer running");
            return Ok(());
        }
    }

    let driver = ClockDriver::spawn(clock.clone(), config.tick_interval).await;
    let interrupted = run_until(session, |engine| {
        engine
            .rest_remaining()
            .map(|remaining| format!("Rest {}", format_seconds(remaining)))
    })
    .await?;

    if interrupted {
        let remaining = clock.lock().await.rest_remaining().unwrap_or(0);
        println!("Rest left running at {}", format_seconds(remaining));
    } else {
        println!("Rest over, next set!");
    }
    driver.shutdown().await;
    Ok(())
}

/// Follow every live counter until Ctrl-C or until nothing is ticking
pub async fn watch(session: &WorkoutSession, config: &TrackerConfig) -> Result<()> {
    let clock = session.clock();
    if !clock.lock().await.needs_ticking() {
        println!("Nothing is running");
        return Ok(());
    }

    let driver = ClockDriver::spawn(clock.clone(), config.tick_interval).await;
    run_until(session, |engine| {
        if !engine.needs_ticking() {
            return None;
        }
        let mut parts = vec![format!("Workout {}", format_seconds(engine.workout_elapsed()))];
        if let Some(rest) = engine.rest_remaining() {
            parts.push(format!("Rest {}", format_seconds(rest)));
        }
        if engine.timer_active() {
            match engine.mode() {
                ClockMode::Stopwatch => {
                    parts.push(format!("Stopwatch {}", format_seconds(engine.duration())));
                }
                ClockMode::Timer => {
                    if let Some(remaining) = engine.countdown_remaining() {
                        parts.push(format!("Timer {}", format_seconds(remaining)));
                    }
                }
            }
        }
        Some(parts.join(" | "))
    })
    .await?;
    driver.shutdown().await;
    Ok(())
}
