// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! HSV (hue, saturation, value) color representation.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize};

use super::{HUE_MAX, SATURATION_MAX, VALUE_MAX};
use crate::{ColorError, ColorResult, check_range};

/// Represents a color in HSV format.
///
/// - `hue` is in degrees, `0..=360`. Both `0` and `360` are accepted and describe the
///   same hue.
/// - `saturation` and `value` are percentages, `0..=100`.
///
/// Like [`RgbValue`], the fields are private and only set by a validating constructor.
///
/// [`RgbValue`]: crate::RgbValue
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct HsvValue {
    hue: u16,
    saturation: u16,
    value: u16,
}

impl HsvValue {
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidArgument`] naming the first component that is out
    /// of range.
    pub fn try_new(hue: i64, saturation: i64, value: i64) -> ColorResult<Self> {
        Ok(Self {
            hue: check_range("hue", hue, HUE_MAX)?,
            saturation: check_range("saturation", saturation, SATURATION_MAX)?,
            value: check_range("value", value, VALUE_MAX)?,
        })
    }

    /// Uses the first three elements of `seq` as `hue`, `saturation` and `value`.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidArgument`] if `seq` has fewer than three elements, or
    /// if a component is out of range.
    pub fn try_from_slice(seq: &[i64]) -> ColorResult<Self> {
        match seq {
            [hue, saturation, value, ..] => Self::try_new(*hue, *saturation, *value),
            _ => ColorError::new_invalid_argument_result(
                "sequence",
                format!("expected at least 3 elements for hsv, got {}", seq.len()),
            ),
        }
    }

    #[must_use]
    pub fn hue(&self) -> u16 { self.hue }

    #[must_use]
    pub fn saturation(&self) -> u16 { self.saturation }

    #[must_use]
    pub fn value(&self) -> u16 { self.value }
}

impl From<HsvValue> for (u16, u16, u16) {
    fn from(hsv: HsvValue) -> Self { (hsv.hue, hsv.saturation, hsv.value) }
}

impl TryFrom<(i64, i64, i64)> for HsvValue {
    type Error = ColorError;

    fn try_from((hue, saturation, value): (i64, i64, i64)) -> ColorResult<Self> {
        Self::try_new(hue, saturation, value)
    }
}

impl TryFrom<[i64; 3]> for HsvValue {
    type Error = ColorError;

    fn try_from(seq: [i64; 3]) -> ColorResult<Self> { Self::try_from_slice(&seq) }
}

impl TryFrom<&[i64]> for HsvValue {
    type Error = ColorError;

    fn try_from(seq: &[i64]) -> ColorResult<Self> { Self::try_from_slice(seq) }
}

impl Display for HsvValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "hsv({}, {}%, {}%)", self.hue, self.saturation, self.value)
    }
}

impl<'de> Deserialize<'de> for HsvValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Unchecked {
            hue: i64,
            saturation: i64,
            value: i64,
        }

        let Unchecked {
            hue,
            saturation,
            value,
        } = Unchecked::deserialize(deserializer)?;
        Self::try_new(hue, saturation, value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ColorErrorType, assert_eq2};
    use test_case::test_case;

    #[test_case(0, 0, 0)]
    #[test_case(360, 100, 100 ; "upper bounds")]
    #[test_case(180, 50, 25)]
    fn test_new(hue: i64, saturation: i64, value: i64) {
        let hsv = HsvValue::try_new(hue, saturation, value).unwrap();
        assert_eq2!(
            <(u16, u16, u16)>::from(hsv),
            (hue as u16, saturation as u16, value as u16)
        );
    }

    #[test_case(361, 0, 0, "hue")]
    #[test_case(-1, 0, 0, "hue")]
    #[test_case(0, 101, 0, "saturation")]
    #[test_case(0, -5, 0, "saturation")]
    #[test_case(0, 0, 101, "value")]
    fn test_new_out_of_range(hue: i64, saturation: i64, value: i64, field: &str) {
        let err = HsvValue::try_new(hue, saturation, value).unwrap_err();
        assert_eq2!(err.error_type(), ColorErrorType::InvalidArgument);
        assert_eq2!(err.field(), Some(field));
    }

    #[test]
    fn test_from_slice() {
        assert_eq2!(
            HsvValue::try_from_slice(&[240, 100, 100, 7]).unwrap(),
            HsvValue::try_new(240, 100, 100).unwrap()
        );
        let err = HsvValue::try_from(&[240_i64, 100][..]).unwrap_err();
        assert_eq2!(err.field(), Some("sequence"));
    }

    #[test]
    fn test_display() {
        let hsv = HsvValue::try_from((240_i64, 100_i64, 50_i64)).unwrap();
        assert_eq2!(hsv.to_string(), "hsv(240, 100%, 50%)");
    }

    #[test]
    fn test_serde() {
        let hsv = HsvValue::try_new(360, 0, 100).unwrap();
        let json = serde_json::to_string(&hsv).unwrap();
        assert_eq2!(json, r#"{"hue":360,"saturation":0,"value":100}"#);
        assert_eq2!(serde_json::from_str::<HsvValue>(&json).unwrap(), hsv);

        let err = serde_json::from_str::<HsvValue>(r#"{"hue":0,"saturation":101,"value":0}"#)
            .unwrap_err();
        assert!(err.to_string().contains("saturation"), "{err}");
    }
}
