// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Errors produced while resolving style inputs and writing styled output. See
//! [`AnsiStyleError`] for details.

/// Errors from [`StyleDescriptor`] construction, its mutators, and its print operations.
///
/// | Variant                 | Cause                                                   |
/// | :---------------------- | :------------------------------------------------------ |
/// | [`InvalidColorName`]    | Color name is not one of the 8 base palette names       |
/// | [`InvalidColorValue`]   | Numeric color is negative or larger than 255            |
/// | [`InvalidAttribute`]    | Attribute name is unknown, or its index is not in 0..=7 |
/// | [`WriteOutput`]         | The injected output sink failed to accept bytes         |
///
/// [`InvalidAttribute`]: Self::InvalidAttribute
/// [`InvalidColorName`]: Self::InvalidColorName
/// [`InvalidColorValue`]: Self::InvalidColorValue
/// [`StyleDescriptor`]: crate::StyleDescriptor
/// [`WriteOutput`]: Self::WriteOutput
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum AnsiStyleError {
    #[error("🎨 Unknown color name: '{name}'")]
    #[diagnostic(
        code(r3bl_ansi_style::invalid_color_name),
        help(
            "Use one of: black, red, green, yellow, blue, purple, cyan, white \
             (case is ignored), or a number from 0 to 255"
        )
    )]
    InvalidColorName { name: String },

    #[error("🔢 Color value {value} is outside of the range 0..=255")]
    #[diagnostic(
        code(r3bl_ansi_style::invalid_color_value),
        help("Values 0-7 are base colors, 8-255 are extended (256 color) palette entries")
    )]
    InvalidColorValue { value: i64 },

    #[error("✨ Unknown attribute: '{attribute}'")]
    #[diagnostic(
        code(r3bl_ansi_style::invalid_attribute),
        help(
            "Use an index from 0 to 7, or one of: normal, bold, bright, dull, faint, \
             italic, underline, blink, blink_slow, blink_fast, blink_dos, inverse"
        )
    )]
    InvalidAttribute { attribute: String },

    #[error("Could not write styled output")]
    #[diagnostic(code(r3bl_ansi_style::write_output))]
    WriteOutput(#[from] std::io::Error),
}

pub type StyleResult<T> = Result<T, AnsiStyleError>;

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::AnsiStyleError;

    #[test]
    fn messages_name_the_rejected_input() {
        let error = AnsiStyleError::InvalidColorName {
            name: "magenta".into(),
        };
        assert_eq!(error.to_string(), "🎨 Unknown color name: 'magenta'");

        let error = AnsiStyleError::InvalidColorValue { value: 256 };
        assert_eq!(
            error.to_string(),
            "🔢 Color value 256 is outside of the range 0..=255"
        );

        let error = AnsiStyleError::InvalidAttribute {
            attribute: "9".into(),
        };
        assert_eq!(error.to_string(), "✨ Unknown attribute: '9'");
    }

    #[test]
    fn io_errors_convert() {
        let io_error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let error: AnsiStyleError = io_error.into();
        assert!(matches!(error, AnsiStyleError::WriteOutput(_)));
    }
}
