// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 srdlint contributors

//! Utility modules
//!
//! Common utilities for the srdlint CLI.

pub mod colors;

pub use colors::*;
