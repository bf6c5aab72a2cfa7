// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors
// ABOUTME: Re-exports helper modules for the liftlog CLI
// ABOUTME: Provides display formatting utilities

pub mod display;
