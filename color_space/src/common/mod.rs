// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Error handling and test helpers used across the crate.

// Attach.
mod color_error;
mod decl_macros;

// Re-export.
pub use color_error::*;
