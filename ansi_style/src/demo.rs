// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Palette dumps for checking by eye what the terminal can display. Each one lists the 8
//! base colors, and then all 240 extended colors (`16..=255`), 6 swatches per line. If
//! the extended swatches all look alike, the terminal does not support 256 colors.

use std::io::Write;

use strum::IntoEnumIterator;

use crate::{Attribute, BaseColor, CUBE_START_INDEX, SGR_RESET, SgrCode, StyleDescriptor,
            StyleResult};

const SWATCHES_PER_LINE: usize = 6;
const SAMPLE: &str = " Sample Text ";

const EXTENDED_HEADER: &str = "EXTENDED COLORS:\n###  Sample          ###  Sample          \
                               ###  Sample          ###  Sample          \
                               ###  Sample          ###  Sample\n";

/// Foreground colors, each sampled on the default background and on white.
///
/// # Errors
///
/// Propagates failures of the output sink.
pub fn show_foreground_colors(out: &mut impl Write) -> StyleResult<()> {
    let on_white = SgrCode::BackgroundBase(BaseColor::White.index());

    write!(out, "\nSYSTEM COLORS:\n")?;
    writeln!(out, "  Name   | Normal Sample            | Bright Sample")?;
    writeln!(out, "---------+--------------------------+------------------------")?;
    for color in BaseColor::iter() {
        let normal = StyleDescriptor::try_new(color)?;
        let bright = StyleDescriptor::try_new(color)?.with_attributes([Attribute::Bold])?;
        writeln!(
            out,
            "  {name:<7}|{normal}{SAMPLE}{on_white}{SAMPLE}{SGR_RESET}|{bright}{SAMPLE}{on_white} Sample Text{SGR_RESET}",
            name = color.upper_case_name(),
            normal = normal.rendered_prefix(),
            bright = bright.rendered_prefix(),
        )?;
    }
    writeln!(out)?;

    write_extended_swatches(out, |index| {
        format!(
            " {}Sample {on_white}Sample {SGR_RESET}",
            SgrCode::foreground(index)
        )
    })
}

/// Background colors, each sampled with the default foreground and with black.
///
/// # Errors
///
/// Propagates failures of the output sink.
pub fn show_background_colors(out: &mut impl Write) -> StyleResult<()> {
    let in_black = SgrCode::ForegroundBase(BaseColor::Black.index());

    write!(out, "\nSYSTEM COLORS:\n")?;
    writeln!(out, "  Name   | Sample")?;
    writeln!(out, "---------+-------------------------")?;
    for color in BaseColor::iter() {
        writeln!(
            out,
            "  {name:<7}|{background}{SAMPLE}{in_black}{SAMPLE}{SGR_RESET}",
            name = color.upper_case_name(),
            background = SgrCode::BackgroundBase(color.index()),
        )?;
    }
    writeln!(out)?;

    write_extended_swatches(out, |index| {
        format!(
            " {}Sample {in_black}Sample {SGR_RESET}",
            SgrCode::background(index)
        )
    })
}

/// Index right aligned to 3 characters, then the swatch, then 3 spaces of gutter.
fn write_extended_swatches(
    out: &mut impl Write,
    fn_swatch: impl Fn(u8) -> String,
) -> StyleResult<()> {
    out.write_all(EXTENDED_HEADER.as_bytes())?;
    for (count, index) in (CUBE_START_INDEX..=u8::MAX).enumerate() {
        write!(out, "{index:>3}{}   ", fn_swatch(index))?;
        if (count + 1) % SWATCHES_PER_LINE == 0 {
            writeln!(out)?;
        }
    }
    Ok(())
}
