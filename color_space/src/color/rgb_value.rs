// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! RGB (24-bit truecolor) color representation.

use std::{fmt::{Display, Formatter},
          str::FromStr};

use serde::{Deserialize, Deserializer, Serialize};

use super::{RGB_CHANNEL_MAX, decode_hex, encode_hex};
use crate::{ColorError, ColorResult, check_range};

/// Represents a color in RGB format, each channel in `0..=255`.
///
/// The fields are private so an instance can only come from a validating constructor
/// and can't be changed afterwards. Since every channel is a [`u8`] the range
/// invariant is also enforced by the type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct RgbValue {
    red: u8,
    green: u8,
    blue: u8,
}

impl RgbValue {
    #[must_use]
    pub const fn from_u8(red: u8, green: u8, blue: u8) -> Self { Self { red, green, blue } }

    /// # Errors
    ///
    /// Returns [`ColorError::InvalidArgument`] naming the first channel that is not in
    /// `0..=255`.
    pub fn try_new(red: i64, green: i64, blue: i64) -> ColorResult<Self> {
        Ok(Self {
            red: check_channel("red", red)?,
            green: check_channel("green", green)?,
            blue: check_channel("blue", blue)?,
        })
    }

    /// Uses the first three elements of `seq` as `red`, `green` and `blue`. Any extra
    /// elements are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidArgument`] if `seq` has fewer than three elements, or
    /// if a channel is out of range.
    pub fn try_from_slice(seq: &[i64]) -> ColorResult<Self> {
        match seq {
            [red, green, blue, ..] => Self::try_new(*red, *green, *blue),
            _ => ColorError::new_invalid_argument_result(
                "sequence",
                format!("expected at least 3 elements for rgb, got {}", seq.len()),
            ),
        }
    }

    /// # Errors
    ///
    /// Returns an error if the input string is not a valid `#RRGGBB` hex color. See
    /// [`decode_hex`] for details.
    pub fn try_from_hex_color(input: &str) -> ColorResult<Self> { decode_hex(input) }

    #[must_use]
    pub fn red(&self) -> u8 { self.red }

    #[must_use]
    pub fn green(&self) -> u8 { self.green }

    #[must_use]
    pub fn blue(&self) -> u8 { self.blue }

    /// `#RRGGBB` with uppercase digits.
    #[must_use]
    pub fn to_hex(&self) -> String { encode_hex(*self) }
}

fn check_channel(field: &'static str, value: i64) -> ColorResult<u8> {
    let it = check_range(field, value, RGB_CHANNEL_MAX)?;
    u8::try_from(it).map_err(|_| {
        ColorError::internal(format!("{field} {it} passed range check but is not a u8"))
    })
}

impl From<(u8, u8, u8)> for RgbValue {
    fn from((red, green, blue): (u8, u8, u8)) -> Self { Self::from_u8(red, green, blue) }
}

impl From<RgbValue> for (u8, u8, u8) {
    fn from(rgb: RgbValue) -> Self { (rgb.red, rgb.green, rgb.blue) }
}

impl TryFrom<(i64, i64, i64)> for RgbValue {
    type Error = ColorError;

    fn try_from((red, green, blue): (i64, i64, i64)) -> ColorResult<Self> {
        Self::try_new(red, green, blue)
    }
}

impl TryFrom<[i64; 3]> for RgbValue {
    type Error = ColorError;

    fn try_from(seq: [i64; 3]) -> ColorResult<Self> { Self::try_from_slice(&seq) }
}

impl TryFrom<&[i64]> for RgbValue {
    type Error = ColorError;

    fn try_from(seq: &[i64]) -> ColorResult<Self> { Self::try_from_slice(seq) }
}

impl FromStr for RgbValue {
    type Err = ColorError;

    fn from_str(input: &str) -> ColorResult<Self> { decode_hex(input) }
}

impl Display for RgbValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&encode_hex(*self))
    }
}

/// Deserialization goes through [`RgbValue::try_new`] so out of range input is
/// rejected.
impl<'de> Deserialize<'de> for RgbValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Unchecked {
            red: i64,
            green: i64,
            blue: i64,
        }

        let Unchecked { red, green, blue } = Unchecked::deserialize(deserializer)?;
        Self::try_new(red, green, blue).map_err(serde::de::Error::custom)
    }
}
