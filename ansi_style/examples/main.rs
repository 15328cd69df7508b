// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use r3bl_ansi_style::{Attribute, BaseColor, ResetPolicy, RgbValue, StyleDescriptor,
                      StyleResult, show_background_colors, show_foreground_colors};

fn main() -> StyleResult<()> {
    let mut out = std::io::stdout().lock();

    // Print a string w/ base colors and attributes.
    {
        StyleDescriptor::try_new(BaseColor::White)?
            .with_background(BaseColor::Green)?
            .with_attributes([Attribute::Bold, Attribute::Underline, Attribute::BlinkSlow])?
            .print_line(&mut out, "Bold, underlined and blinking", ResetPolicy::ResetAfter)?;

        StyleDescriptor::try_new("yellow")?
            .with_attributes(["dull", "italic"])?
            .print_line(&mut out, "Dull and italic", ResetPolicy::ResetAfter)?;
    }

    // Extended colors drop the attributes, and inverse swaps the colors instead.
    {
        let mut style = StyleDescriptor::try_new(208_u8)?.with_background(BaseColor::Blue)?;
        style.print_line(&mut out, "Orange on blue", ResetPolicy::ResetAfter)?;
        style.set_inverse(true);
        style.print_line(&mut out, "Blue on orange", ResetPolicy::ResetAfter)?;
        println!("{}", style.describe());
    }

    // Map RGB colors to the closest extended palette entry.
    {
        for rgb_value in [
            RgbValue::from((50, 50, 50)),
            RgbValue::from((100, 200, 1)),
            RgbValue::from((200, 50, 50)),
        ] {
            let msg = format!("{rgb_value:?} -> {}", rgb_value.as_ansi().index);
            StyleDescriptor::try_new(rgb_value)?.print_line(
                &mut out,
                &msg,
                ResetPolicy::ResetAfter,
            )?;
        }
    }

    // Leave the terminal styled, then reset it explicitly.
    {
        let style = StyleDescriptor::try_new(BaseColor::Cyan)?;
        style.print(&mut out, "Still cyan... ", ResetPolicy::LeaveStyled)?;
        style.reset(&mut out)?;
        println!();
    }

    show_foreground_colors(&mut out)?;
    show_background_colors(&mut out)?;

    Ok(())
}
