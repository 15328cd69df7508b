// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! SGR (Select Graphic Rendition) escape sequences.
//!
//! More info:
//! - <https://doc.rust-lang.org/reference/tokens.html#ascii-escapes>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#SGR>

use std::fmt::{Display, Formatter, Result};

use crate::MAX_BASE_COLOR_INDEX;

pub const CSI: &str = "\x1b[";
pub const SGR: &str = "m";

/// Restores every display attribute to the terminal default.
pub const SGR_RESET: &str = "\x1b[0m";

pub const FOREGROUND_BASE_OFFSET: u8 = 30;
pub const BACKGROUND_BASE_OFFSET: u8 = 40;

/// A complete, standalone escape sequence.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SgrCode {
    Reset,
    /// Base foreground, `ESC[3<n>m`.
    ForegroundBase(u8),
    /// Base background, `ESC[4<n>m`.
    BackgroundBase(u8),
    ForegroundAnsi256(u8),
    BackgroundAnsi256(u8),
}

/// The numeric foreground field only, without `CSI` or the final `m`. Attribute
/// parameters are chained in front of it inside one sequence.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ForegroundParam(pub u8);

pub mod sgr_code_impl {
    use super::{BACKGROUND_BASE_OFFSET, CSI, Display, FOREGROUND_BASE_OFFSET,
                ForegroundParam, Formatter, MAX_BASE_COLOR_INDEX, Result, SGR, SgrCode};

    impl SgrCode {
        /// Base or extended code, whichever range `index` falls in.
        #[must_use]
        pub fn foreground(index: u8) -> Self {
            if index <= MAX_BASE_COLOR_INDEX {
                SgrCode::ForegroundBase(index)
            } else {
                SgrCode::ForegroundAnsi256(index)
            }
        }

        #[must_use]
        pub fn background(index: u8) -> Self {
            if index <= MAX_BASE_COLOR_INDEX {
                SgrCode::BackgroundBase(index)
            } else {
                SgrCode::BackgroundAnsi256(index)
            }
        }
    }

    impl Display for SgrCode {
        #[rustfmt::skip]
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            match *self {
                SgrCode::Reset                    => write!(f, "{CSI}0{SGR}"),
                SgrCode::ForegroundBase(index)    => write!(f, "{CSI}{}{SGR}", FOREGROUND_BASE_OFFSET + index),
                SgrCode::BackgroundBase(index)    => write!(f, "{CSI}{}{SGR}", BACKGROUND_BASE_OFFSET + index),
                SgrCode::ForegroundAnsi256(index) => write!(f, "{CSI}38;5;{index}{SGR}"),
                SgrCode::BackgroundAnsi256(index) => write!(f, "{CSI}48;5;{index}{SGR}"),
            }
        }
    }

    impl Display for ForegroundParam {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            let ForegroundParam(index) = *self;
            if index <= MAX_BASE_COLOR_INDEX {
                write!(f, "{}", FOREGROUND_BASE_OFFSET + index)
            } else {
                write!(f, "38;5;{index}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{ForegroundParam, SGR_RESET, SgrCode};

    #[test]
    fn reset() {
        assert_eq!(SgrCode::Reset.to_string(), "\x1b[0m");
        assert_eq!(SgrCode::Reset.to_string(), SGR_RESET);
    }

    #[test]
    fn fg_color_base() {
        assert_eq!(SgrCode::ForegroundBase(0).to_string(), "\x1b[30m");
        assert_eq!(SgrCode::ForegroundBase(7).to_string(), "\x1b[37m");
    }

    #[test]
    fn bg_color_base() {
        assert_eq!(SgrCode::BackgroundBase(0).to_string(), "\x1b[40m");
        assert_eq!(SgrCode::BackgroundBase(7).to_string(), "\x1b[47m");
    }

    #[test]
    fn fg_color_ansi256() {
        assert_eq!(SgrCode::ForegroundAnsi256(150).to_string(), "\x1b[38;5;150m");
    }

    #[test]
    fn bg_color_ansi256() {
        assert_eq!(SgrCode::BackgroundAnsi256(150).to_string(), "\x1b[48;5;150m");
    }

    #[test]
    fn range_selects_the_code() {
        assert_eq!(SgrCode::foreground(7), SgrCode::ForegroundBase(7));
        assert_eq!(SgrCode::foreground(8), SgrCode::ForegroundAnsi256(8));
        assert_eq!(SgrCode::background(2), SgrCode::BackgroundBase(2));
        assert_eq!(SgrCode::background(255), SgrCode::BackgroundAnsi256(255));
    }

    #[test]
    fn foreground_param() {
        assert_eq!(ForegroundParam(1).to_string(), "31");
        assert_eq!(ForegroundParam(200).to_string(), "38;5;200");
    }
}
