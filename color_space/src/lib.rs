// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_color_space
//!
//! Validated color values in three representations, and conversions between them:
//!
//! | Representation | Type         | Range                                        |
//! | :------------- | :----------- | :------------------------------------------- |
//! | RGB            | [`RgbValue`] | each channel `0..=255`                       |
//! | HSV            | [`HsvValue`] | hue `0..=360`, saturation and value `0..=100` |
//! | Hex            | [`String`]   | `#RRGGBB`, uppercase when encoded             |
//!
//! Values can only be created through constructors that validate every component, so a
//! [`RgbValue`] or [`HsvValue`] you hold is always in range. Every fallible operation
//! returns a [`ColorResult`], and the [`ColorError`] tells you whether you passed bad
//! input ([`ColorError::InvalidArgument`]) or hit a bug ([`ColorError::Internal`]).
//!
//! ```
//! use r3bl_color_space::{HsvValue, RgbValue, decode_hex, encode_hex, hex_to_hsv,
//!                        hsv_to_rgb, rgb_to_hsv};
//!
//! # fn main() -> miette::Result<()> {
//! let red = hsv_to_rgb(HsvValue::try_new(0, 100, 100)?)?;
//! assert_eq!(red, RgbValue::try_new(255, 0, 0)?);
//! assert_eq!(encode_hex(red), "#FF0000");
//!
//! assert_eq!(decode_hex("#00FF00")?, RgbValue::from_u8(0, 255, 0));
//! assert_eq!(rgb_to_hsv(RgbValue::from_u8(0, 0, 255))?, HsvValue::try_new(240, 100, 100)?);
//! assert_eq!(hex_to_hsv("#000000")?, HsvValue::try_new(0, 0, 0)?);
//!
//! assert!(RgbValue::try_new(256, 0, 0).is_err());
//! assert!(decode_hex("#12345G").is_err());
//! # Ok(())
//! # }
//! ```
//!
//! All operations are pure and synchronous, and the value types are [`Copy`], [`Send`]
//! and [`Sync`]. Rejected input is logged with [`tracing`] at `debug` level, internal
//! errors at `error` level. No subscriber is installed by this crate.

// Enable strict unwrap checking in production code only. Tests are allowed to use
// .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
mod color;
mod common;

// Re-export.
pub use color::*;
pub use common::*;
