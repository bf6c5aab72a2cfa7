// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors
// ABOUTME: Re-exports command modules for the liftlog CLI
// ABOUTME: Provides session workflow, clock, and data management commands

pub mod clock;
pub mod data;
pub mod session;
