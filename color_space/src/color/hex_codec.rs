// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Encode an [`RgbValue`] into a `#RRGGBB` string and decode it back.
//!
//! Decoding validates in this order, and reports the first check that fails:
//! 1. The string is exactly [`HEX_COLOR_LEN`] characters long (`"hex.length"`).
//! 2. It starts with `#` (`"hex.prefix"`).
//! 3. All 6 remaining characters are hex digits, case insensitive (`"hex.digits"`).
//!
//! Only then does the [nom] parser split the digits into 3 pairs, and each digit is
//! mapped to its nibble via [`HEX_DIGITS`].

use nom::{IResult, Parser, bytes::complete::{tag, take_while_m_n}, sequence::preceded};

use super::{HEX_COLOR_LEN, HEX_COLOR_PREFIX, HEX_DIGIT_COUNT, HEX_DIGITS, RgbValue};
use crate::{ColorError, ColorResult};

/// Parse a `#RRGGBB` string into an [`RgbValue`]. Lowercase digits are accepted.
///
/// # Errors
///
/// - [`ColorError::InvalidArgument`] if the length, the `#` prefix, or any digit is
///   wrong. See the [module docs](self) for the order of these checks.
/// - [`ColorError::Internal`] if a digit that passed validation can't be decoded.
pub fn decode_hex(hex: &str) -> ColorResult<RgbValue> {
    let char_count = hex.chars().count();
    if char_count != HEX_COLOR_LEN {
        return ColorError::new_invalid_argument_result(
            "hex.length",
            format!("expected {HEX_COLOR_LEN} characters, got {char_count} in {hex:?}"),
        );
    }

    if !hex.starts_with(HEX_COLOR_PREFIX) {
        return ColorError::new_invalid_argument_result(
            "hex.prefix",
            format!("expected {hex:?} to start with {HEX_COLOR_PREFIX:?}"),
        );
    }

    let normalized = hex.to_ascii_uppercase();
    let valid_digit_count = normalized
        .chars()
        .skip(HEX_COLOR_PREFIX.len())
        .filter(helper_fns::match_is_hex_digit)
        .count();
    if valid_digit_count != HEX_DIGIT_COUNT {
        return ColorError::new_invalid_argument_result(
            "hex.digits",
            format!(
                "expected {HEX_DIGIT_COUNT} hex digits after {HEX_COLOR_PREFIX:?}, \
                 got {valid_digit_count} in {hex:?}"
            ),
        );
    }

    let (red, green, blue) = match parse_hex_color(&normalized) {
        Ok(("", segments)) => segments,
        Ok((remainder, _)) => {
            return ColorError::new_internal_result(format!(
                "validated hex {hex:?} left {remainder:?} unparsed"
            ));
        }
        Err(err) => {
            return ColorError::new_internal_result(format!(
                "validated hex {hex:?} failed to parse: {err}"
            ));
        }
    };

    Ok(RgbValue::from_u8(
        helper_fns::decode_pair(red)?,
        helper_fns::decode_pair(green)?,
        helper_fns::decode_pair(blue)?,
    ))
}

/// Format an [`RgbValue`] as `#RRGGBB` with uppercase digits. This can't fail since
/// every [`RgbValue`] channel is already a byte.
#[must_use]
pub fn encode_hex(rgb: RgbValue) -> String {
    let mut acc = String::with_capacity(HEX_COLOR_LEN);
    acc.push_str(HEX_COLOR_PREFIX);
    for channel in [rgb.red(), rgb.green(), rgb.blue()] {
        let low = channel % 16;
        let high = channel / 16 % 16;
        acc.push(helper_fns::nibble_to_digit(high));
        acc.push(helper_fns::nibble_to_digit(low));
    }
    acc
}

/// Splits `#RRGGBB` into its three 2 digit segments.
fn parse_hex_color(input: &str) -> IResult<&str, (&str, &str, &str)> {
    preceded(
        tag(HEX_COLOR_PREFIX),
        (
            helper_fns::parse_hex_seg,
            helper_fns::parse_hex_seg,
            helper_fns::parse_hex_seg,
        ),
    )
    .parse(input)
}

/// Helper functions to match and decode hex digits.
mod helper_fns {
    use super::{ColorError, ColorResult, HEX_DIGITS, IResult, Parser, take_while_m_n};

    /// Used by [`take_while_m_n`], as long as it returns `true` items will be taken from
    /// the input. Expects uppercase input.
    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub fn match_is_hex_digit(c: &char) -> bool {
        c.is_ascii_digit() || matches!(c, 'A'..='F')
    }

    pub fn parse_hex_seg(input: &str) -> IResult<&str, &str> {
        take_while_m_n(2, 2, |c: char| match_is_hex_digit(&c)).parse(input)
    }

    /// First digit is the high nibble, second is the low nibble.
    pub fn decode_pair(pair: &str) -> ColorResult<u8> {
        let mut digits = pair.chars();
        match (digits.next(), digits.next(), digits.next()) {
            (Some(high), Some(low), None) => {
                Ok(digit_to_nibble(high)? * 16 + digit_to_nibble(low)?)
            }
            _ => ColorError::new_internal_result(format!(
                "hex segment {pair:?} is not 2 digits"
            )),
        }
    }

    pub fn digit_to_nibble(digit: char) -> ColorResult<u8> {
        HEX_DIGITS
            .iter()
            .position(|&it| char::from(it) == digit)
            .and_then(|index| u8::try_from(index).ok())
            .ok_or_else(|| {
                ColorError::internal(format!("{digit:?} is not in the hex digit table"))
            })
    }

    /// `nibble` is always `< 16` here, since callers take it `% 16`.
    pub fn nibble_to_digit(nibble: u8) -> char {
        char::from(HEX_DIGITS[usize::from(nibble % 16)])
    }
}
