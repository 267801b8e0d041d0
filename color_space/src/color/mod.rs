// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Core color types and conversions.
//!
//! This module provides:
//! - **Value types**: [`RgbValue`] and [`HsvValue`], validated on construction and
//!   immutable afterwards
//! - **Hex codec**: [`encode_hex`] and [`decode_hex`] for `#RRGGBB` strings
//! - **Conversion logic**: [`hsv_to_rgb`], [`rgb_to_hsv`] and the composed
//!   [`hsv_to_hex`] / [`hex_to_hsv`]
//! - **Abstraction**: [`ConvertColor`] trait with method spellings of the above
//!
//! Every conversion goes through [`RgbValue`].

// Attach.
mod constants;
mod convert;
mod convert_color;
mod hex_codec;
mod hsv_value;
mod rgb_value;

// Re-export.
pub use constants::*;
pub use convert::*;
pub use convert_color::*;
pub use hex_codec::*;
pub use hsv_value::*;
pub use rgb_value::*;
