// ABOUTME: Main library entry point for the Liftlog workout tracker
// ABOUTME: Provides the session clock, rest timer, exercise history, and guided session workflow
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

#![deny(unsafe_code)]

//! # Liftlog
//!
//! A strength-training tracker core: users select muscle groups, pick exercises,
//! log sets during a timed session, and review their history with progressive
//! overload suggestions for the next session.
//!
//! ## Architecture
//!
//! Components, leaf to root:
//! - **Store**: key-value and record stores (in-memory and file backends)
//! - **Clock**: one shared tick driving the stopwatch, countdown, rest timer and workout clock
//! - **History**: per-exercise personal records and overload suggestions
//! - **Session**: the `setup → selection → active → summary` workflow with resume support
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use liftlog::config::TrackerConfig;
//! use liftlog::errors::AppResult;
//! use liftlog::session::WorkoutSession;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = TrackerConfig::from_env()?;
//!     let session = WorkoutSession::open(&config).await?;
//!     println!("Resuming in phase {}", session.phase());
//!     Ok(())
//! }
//! ```

/// Remote AI workout plan generation
pub mod ai;

/// Backup export and validated import
pub mod backup;

/// Static exercise catalog per muscle group
pub mod catalog;

/// Stopwatch, countdown, rest timer and workout clock engine
pub mod clock;

/// Configuration loaded from environment variables
pub mod config;

/// Unified error handling re-exported from the core crate
pub mod errors;

/// Fire-and-forget audio and haptic feedback
pub mod feedback;

/// Exercise history tracking and overload suggestions
pub mod history;

/// Display label lookup per language
pub mod i18n;

/// Structured logging setup and domain event helpers
pub mod logging;

/// Guided workout session orchestrator
pub mod session;

/// Persistent key-value and record stores
pub mod store;

pub use liftlog_core::constants;
pub use liftlog_core::models;
