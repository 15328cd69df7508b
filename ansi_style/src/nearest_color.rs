// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Map a 24-bit RGB color onto the extended (256 color) palette.
//!
//! Layout of the extended palette:
//! - `16..=231`: a 6×6×6 color cube, index `16 + 36*r + 6*g + b` with each level in
//!   `0..=5`.
//! - `232..=255`: a 24 step grayscale ramp.
//!
//! More info:
//! - <https://commons.wikimedia.org/wiki/File:Xterm_256color_chart.svg>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#8-bit>

/// Distance between two adjacent color cube levels.
pub const CUBE_STEP: f64 = 51.0;
/// Distance between two adjacent grayscale ramp steps.
pub const GRAYSCALE_STEP: f64 = 10.625;

pub const CUBE_START_INDEX: u8 = 16;
pub const GRAYSCALE_START_INDEX: u8 = 232;
const MAX_CUBE_LEVEL: f64 = 5.0;
const MAX_GRAYSCALE_STEP: f64 = 23.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RgbValue {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnsiValue {
    pub index: u8,
}

mod rgb_value_impl {
    use super::{AnsiValue, RgbValue, nearest_extended_color};

    impl From<(u8, u8, u8)> for RgbValue {
        fn from((red, green, blue): (u8, u8, u8)) -> Self { Self { red, green, blue } }
    }

    impl RgbValue {
        #[must_use]
        pub fn as_ansi(&self) -> AnsiValue {
            nearest_extended_color(self.red, self.green, self.blue)
        }
    }

    impl From<RgbValue> for AnsiValue {
        fn from(rgb_value: RgbValue) -> Self { rgb_value.as_ansi() }
    }
}

/// Returns the extended palette entry closest to the given RGB color. This is a pure
/// function.
///
/// When all three channels are equal the color is gray, and it can live either on the
/// color cube's diagonal or on the grayscale ramp. The representation with the smaller
/// remainder (`value % 51` vs `value % 10.625`) wins, and a tie goes to the cube.
#[must_use]
pub fn nearest_extended_color(red: u8, green: u8, blue: u8) -> AnsiValue {
    if red == green && red == blue {
        let value = f64::from(red);
        if value % CUBE_STEP <= value % GRAYSCALE_STEP {
            let level = cube_level(red);
            AnsiValue {
                index: cube_index(level, level, level),
            }
        } else {
            AnsiValue {
                index: GRAYSCALE_START_INDEX + grayscale_step(red),
            }
        }
    } else {
        AnsiValue {
            index: cube_index(cube_level(red), cube_level(green), cube_level(blue)),
        }
    }
}

/// Rounded to the nearest of the 6 cube levels, halves away from zero.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn cube_level(channel: u8) -> u8 {
    (f64::from(channel) / CUBE_STEP).round().clamp(0.0, MAX_CUBE_LEVEL) as u8
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn grayscale_step(channel: u8) -> u8 {
    (f64::from(channel) / GRAYSCALE_STEP)
        .round()
        .clamp(0.0, MAX_GRAYSCALE_STEP) as u8
}

fn cube_index(red_level: u8, green_level: u8, blue_level: u8) -> u8 {
    CUBE_START_INDEX + 36 * red_level + 6 * green_level + blue_level
}
