// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Conversions between [`HsvValue`] and [`RgbValue`], plus [`hsv_to_hex`] and
//! [`hex_to_hsv`] which go through [`RgbValue`].
//!
//! All the math is done in [`f64`]. Every float to integer step truncates toward zero,
//! it never rounds, so eg: a value of `50%` maps to channel `127` and not `128`.
//!
//! More info:
//! - <https://en.wikipedia.org/wiki/HSL_and_HSV#HSV_to_RGB>
//! - <https://en.wikipedia.org/wiki/HSL_and_HSV#From_RGB>

use super::{HUE_MAX, HUE_SECTOR_WIDTH, HsvValue, RGB_CHANNEL_MAX, RgbValue,
            SATURATION_MAX, VALUE_MAX, decode_hex, encode_hex};
use crate::{ColorError, ColorResult, check_range};

/// Convert an [`HsvValue`] into an [`RgbValue`].
///
/// The hue circle is split into six 60° sectors, each with a fixed assignment of chroma
/// `C`, intermediate `X` and `0` to the red, green and blue channels:
///
/// | Hue          | (R', G', B') |
/// | :----------- | :----------- |
/// | `0..60`      | (C, X, 0)    |
/// | `60..120`    | (X, C, 0)    |
/// | `120..180`   | (0, C, X)    |
/// | `180..240`   | (0, X, C)    |
/// | `240..300`   | (X, 0, C)    |
/// | `300..=360`  | (C, 0, X)    |
///
/// `X` uses the integer sector index (`hue / 60`), so within a sector it is either `0`
/// (even sectors) or `C` (odd sectors). Hue `360` lands in the last sector and yields
/// the same color as hue `0`.
///
/// # Errors
///
/// - [`ColorError::InvalidArgument`] if a component is out of range.
/// - [`ColorError::Internal`] if the hue falls outside every sector, or a channel comes
///   out of range. Neither can happen for valid input.
pub fn hsv_to_rgb(hsv: HsvValue) -> ColorResult<RgbValue> {
    let hue = check_range("hue", hsv.hue().into(), HUE_MAX)?;
    let saturation = check_range("saturation", hsv.saturation().into(), SATURATION_MAX)?;
    let value = check_range("value", hsv.value().into(), VALUE_MAX)?;

    let value_frac = f64::from(value) / 100.0;
    let chroma = value_frac * (f64::from(saturation) / 100.0);
    let sector = hue / HUE_SECTOR_WIDTH;
    let intermediate = chroma * (1.0 - (f64::from(sector % 2) - 1.0).abs());
    let match_value = value_frac - chroma;

    let (red, green, blue) = match hue {
        0..60 => (chroma, intermediate, 0.0),
        60..120 => (intermediate, chroma, 0.0),
        120..180 => (0.0, chroma, intermediate),
        180..240 => (0.0, intermediate, chroma),
        240..300 => (intermediate, 0.0, chroma),
        300..=360 => (chroma, 0.0, intermediate),
        _ => {
            return ColorError::new_internal_result(format!(
                "hue {hue} is not in any sector"
            ));
        }
    };

    let to_channel = |it: f64| ((it + match_value) * f64::from(RGB_CHANNEL_MAX)).trunc() as i64;

    RgbValue::try_new(to_channel(red), to_channel(green), to_channel(blue)).map_err(|err| {
        ColorError::internal(format!("{hsv} produced an out of range channel: {err}"))
    })
}

/// Convert an [`RgbValue`] into an [`HsvValue`].
///
/// Each channel is a [`u8`], so the `0..=255` range check is already done by the type.
/// When two channels tie for the maximum, red wins over green, and green over blue.
/// The hue for a red maximum is taken modulo 6 with [`f64::rem_euclid`], so colors
/// between magenta and red map to `300..360` instead of a negative hue.
///
/// # Errors
///
/// [`ColorError::Internal`] if no channel equals the maximum, or the result is out of
/// range. Neither can happen for valid input.
#[allow(clippy::float_cmp)]
pub fn rgb_to_hsv(rgb: RgbValue) -> ColorResult<HsvValue> {
    let [red, green, blue] = [rgb.red(), rgb.green(), rgb.blue()]
        .map(|it| f64::from(it) / f64::from(RGB_CHANNEL_MAX));

    let c_max = red.max(green).max(blue);
    let c_min = red.min(green).min(blue);
    let chroma = c_max - c_min;

    let hue = if chroma == 0.0 {
        0.0
    } else if red == c_max {
        60.0 * ((green - blue) / chroma).rem_euclid(6.0)
    } else if green == c_max {
        60.0 * ((blue - red) / chroma + 2.0)
    } else if blue == c_max {
        60.0 * ((red - green) / chroma + 4.0)
    } else {
        return ColorError::new_internal_result(format!(
            "no channel of {rgb} equals the max {c_max}"
        ));
    };

    let value = c_max * 100.0;
    let saturation = if value == 0.0 {
        0.0
    } else {
        chroma / c_max * 100.0
    };

    HsvValue::try_new(
        hue.trunc() as i64,
        saturation.trunc() as i64,
        value.trunc() as i64,
    )
    .map_err(|err| ColorError::internal(format!("{rgb} produced an out of range hsv: {err}")))
}

/// Same as [`encode_hex`] applied to [`hsv_to_rgb`].
///
/// # Errors
///
/// See [`hsv_to_rgb`].
pub fn hsv_to_hex(hsv: HsvValue) -> ColorResult<String> { hsv_to_rgb(hsv).map(encode_hex) }

/// Same as [`rgb_to_hsv`] applied to [`decode_hex`].
///
/// # Errors
///
/// See [`decode_hex`] and [`rgb_to_hsv`].
pub fn hex_to_hsv(hex: &str) -> ColorResult<HsvValue> { rgb_to_hsv(decode_hex(hex)?) }

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ColorErrorType, assert_eq2};
    use test_case::test_case;

    fn hsv(hue: i64, saturation: i64, value: i64) -> HsvValue {
        HsvValue::try_new(hue, saturation, value).unwrap()
    }

    #[test_case(0, 100, 100, (255, 0, 0) ; "red")]
    #[test_case(120, 100, 100, (0, 255, 0) ; "green")]
    #[test_case(240, 100, 100, (0, 0, 255) ; "blue")]
    #[test_case(60, 100, 100, (255, 255, 0) ; "yellow")]
    #[test_case(180, 100, 100, (0, 255, 255) ; "cyan")]
    #[test_case(300, 100, 100, (255, 0, 255) ; "magenta")]
    #[test_case(360, 100, 100, (255, 0, 0) ; "hue 360 is red")]
    #[test_case(30, 100, 100, (255, 0, 0) ; "even sector has zero intermediate")]
    #[test_case(90, 100, 100, (255, 255, 0) ; "odd sector has full intermediate")]
    #[test_case(0, 0, 50, (127, 127, 127) ; "truncates instead of rounding")]
    #[test_case(0, 0, 0, (0, 0, 0) ; "black")]
    #[test_case(200, 0, 100, (255, 255, 255) ; "white")]
    #[test_case(0, 50, 100, (255, 127, 127) ; "half saturated red")]
    fn test_hsv_to_rgb(hue: i64, saturation: i64, value: i64, expected: (u8, u8, u8)) {
        let rgb = hsv_to_rgb(hsv(hue, saturation, value)).unwrap();
        assert_eq2!(<(u8, u8, u8)>::from(rgb), expected);
    }

    #[test_case((0, 0, 255), (240, 100, 100) ; "blue")]
    #[test_case((0, 0, 0), (0, 0, 0) ; "black")]
    #[test_case((255, 255, 255), (0, 0, 100) ; "white")]
    #[test_case((255, 0, 0), (0, 100, 100) ; "red")]
    #[test_case((0, 255, 0), (120, 100, 100) ; "green")]
    #[test_case((255, 255, 0), (60, 100, 100) ; "red and green tie picks red")]
    #[test_case((0, 255, 255), (180, 100, 100) ; "green and blue tie picks green")]
    #[test_case((255, 0, 255), (300, 100, 100) ; "magenta")]
    #[test_case((255, 0, 10), (357, 100, 100) ; "red max with negative green minus blue")]
    #[test_case((128, 128, 128), (0, 0, 50) ; "gray truncates value")]
    fn test_rgb_to_hsv(rgb: (u8, u8, u8), expected: (u16, u16, u16)) {
        let hsv = rgb_to_hsv(RgbValue::from(rgb)).unwrap();
        assert_eq2!(<(u16, u16, u16)>::from(hsv), expected);
    }

    #[test]
    fn test_hue_0_and_360_are_the_same_color() {
        for saturation in 0..=100 {
            for value in 0..=100 {
                assert_eq2!(
                    hsv_to_rgb(hsv(0, saturation, value)).unwrap(),
                    hsv_to_rgb(hsv(360, saturation, value)).unwrap()
                );
            }
        }
    }

    #[test]
    fn test_zero_saturation_is_achromatic() {
        for hue in 0..=360 {
            for value in 0..=100 {
                let rgb = hsv_to_rgb(hsv(hue, 0, value)).unwrap();
                assert_eq2!(rgb.red(), rgb.green());
                assert_eq2!(rgb.green(), rgb.blue());
            }
        }
    }

    #[test]
    fn test_valid_input_never_hits_internal_error() {
        for hue in 0..=360 {
            for saturation in (0..=100).step_by(5) {
                for value in (0..=100).step_by(5) {
                    assert!(hsv_to_rgb(hsv(hue, saturation, value)).is_ok());
                }
            }
        }
        for red in (0..=255).step_by(3) {
            for green in (0..=255).step_by(5) {
                for blue in (0..=255).step_by(7) {
                    let result = rgb_to_hsv(RgbValue::from_u8(red, green, blue));
                    assert!(result.is_ok(), "{red} {green} {blue}: {result:?}");
                }
            }
        }
    }

    #[test]
    fn test_hsv_to_hex() {
        assert_eq2!(hsv_to_hex(hsv(0, 100, 100)).unwrap(), "#FF0000");
        assert_eq2!(hsv_to_hex(hsv(240, 100, 100)).unwrap(), "#0000FF");
        assert_eq2!(hsv_to_hex(hsv(0, 0, 50)).unwrap(), "#7F7F7F");
    }

    #[test]
    fn test_hex_to_hsv() {
        assert_eq2!(hex_to_hsv("#0000FF").unwrap(), hsv(240, 100, 100));
        assert_eq2!(hex_to_hsv("#00ff00").unwrap(), hsv(120, 100, 100));

        let err = hex_to_hsv("#12345G").unwrap_err();
        assert_eq2!(err.error_type(), ColorErrorType::InvalidArgument);
        assert_eq2!(err.field(), Some("hex.digits"));
    }
}
