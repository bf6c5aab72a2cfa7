// ABOUTME: Re-exports the unified error type from liftlog-core for crate-local paths
// ABOUTME: Keeps `crate::errors::AppResult` available throughout the root package
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

//! # Unified Error Handling System
//!
//! The error type lives in `liftlog-core` so every workspace crate shares it.

pub use liftlog_core::errors::{AppError, AppResult, ErrorCode};
