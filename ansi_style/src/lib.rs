// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_ansi_style
//!
//! Render text in a terminal with ANSI SGR escape sequences: a foreground color, an
//! optional background color, and a set of display-mode attributes (bold, underline,
//! blink, inverse, ...).
//!
//! - The 8 base colors (`0..=7`) use the classic `30..=37` / `40..=47` codes and can be
//!   combined with attributes.
//! - The 240 extended colors (`16..=255`) use the `38;5;n` / `48;5;n` codes. Attributes
//!   are not rendered with them, and inverse is emulated by swapping the colors.
//! - Any RGB triple can be mapped to the closest extended color with
//!   [`nearest_extended_color()`].
//!
//! All output goes to a caller supplied [`std::io::Write`] sink.
//!
//! ```rust
//! use r3bl_ansi_style::{ResetPolicy, StyleDescriptor};
//!
//! let style = StyleDescriptor::try_new("yellow")?.with_background("blue")?;
//! assert_eq!(
//!     style.paint("hello", ResetPolicy::ResetAfter),
//!     "\x1b[33m\x1b[44mhello\x1b[0m"
//! );
//! # Ok::<(), r3bl_ansi_style::AnsiStyleError>(())
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod attribute;
pub mod cli;
pub mod color_spec;
pub mod demo;
pub mod error;
pub mod log;
pub mod nearest_color;
pub mod palette;
pub mod sgr;
pub mod style_descriptor;

#[cfg(test)]
mod test_fixtures;

// Re-export.
pub use attribute::*;
pub use color_spec::*;
pub use demo::*;
pub use error::*;
pub use nearest_color::*;
pub use palette::*;
pub use sgr::*;
pub use style_descriptor::*;
