// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Range limits for every color component, and the shape of a hex color string.

pub const RGB_CHANNEL_MAX: u16 = 255;
pub const HUE_MAX: u16 = 360;
pub const SATURATION_MAX: u16 = 100;
pub const VALUE_MAX: u16 = 100;

/// Width of one hue sector in degrees.
pub const HUE_SECTOR_WIDTH: u16 = 60;

/// `#RRGGBB`.
pub const HEX_COLOR_LEN: usize = 7;
pub const HEX_COLOR_PREFIX: &str = "#";
pub const HEX_DIGIT_COUNT: usize = HEX_COLOR_LEN - HEX_COLOR_PREFIX.len();

/// Lookup table used to map between a nibble and its uppercase hex digit.
pub const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";
