// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{HsvValue, RgbValue, encode_hex, hsv_to_hex, hsv_to_rgb, rgb_to_hsv};
use crate::ColorResult;

/// Method style access to the free conversion functions, so a value can be converted
/// without knowing which representation it is in.
///
/// # Errors
///
/// Every method returns the same errors as the free function it calls.
pub trait ConvertColor {
    /// Returns a [`RgbValue`] representation of the `self` color.
    fn try_as_rgb(&self) -> ColorResult<RgbValue>;

    /// Returns a [`HsvValue`] representation of the `self` color.
    fn try_as_hsv(&self) -> ColorResult<HsvValue>;

    /// Returns the `#RRGGBB` representation of the `self` color.
    fn try_as_hex(&self) -> ColorResult<String>;
}

impl ConvertColor for RgbValue {
    fn try_as_rgb(&self) -> ColorResult<RgbValue> { Ok(*self) }

    fn try_as_hsv(&self) -> ColorResult<HsvValue> { rgb_to_hsv(*self) }

    fn try_as_hex(&self) -> ColorResult<String> { Ok(encode_hex(*self)) }
}

impl ConvertColor for HsvValue {
    fn try_as_rgb(&self) -> ColorResult<RgbValue> { hsv_to_rgb(*self) }

    fn try_as_hsv(&self) -> ColorResult<HsvValue> { Ok(*self) }

    fn try_as_hex(&self) -> ColorResult<String> { hsv_to_hex(*self) }
}
