// ABOUTME: Configuration management module for tracker settings and parameters
// ABOUTME: Handles environment configs, storage location, timing, overload policy and AI options
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

//! Configuration module for Liftlog
//!
//! - **Environment**: tracker configuration from environment variables

/// Environment-driven tracker configuration
pub mod environment;

pub use environment::{AiConfig, OverloadConfig, StorageBackend, TrackerConfig};
