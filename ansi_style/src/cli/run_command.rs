// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::Write;

use miette::IntoDiagnostic;

use super::{CLICommand, PaletteLayer, StyleOption};
use crate::{ResetPolicy, SgrCode, StyleDescriptor, StyleResult, nearest_extended_color,
            show_background_colors, show_foreground_colors};

/// Runs one command, writing everything it prints to `out`.
///
/// # Errors
///
/// Returns an error if a color or attribute argument does not resolve, or if `out`
/// fails.
pub fn run_command(command: &CLICommand, out: &mut impl Write) -> miette::Result<()> {
    // % is Display, ? is Debug.
    tracing::debug!(message = "Running command", command = ?command);

    match command {
        CLICommand::Print {
            style,
            no_reset,
            no_newline,
            text,
        } => {
            let descriptor = try_build_style(style)?;
            let policy = if *no_reset {
                ResetPolicy::LeaveStyled
            } else {
                ResetPolicy::ResetAfter
            };
            if *no_newline {
                descriptor.print(out, text, policy)?;
            } else {
                descriptor.print_line(out, text, policy)?;
            }
        }
        CLICommand::Reset => {
            write!(out, "{}", SgrCode::Reset).into_diagnostic()?;
        }
        CLICommand::Describe { style } => {
            let descriptor = try_build_style(style)?;
            writeln!(out, "{}", descriptor.describe()).into_diagnostic()?;
        }
        CLICommand::Palette { layer } => match layer {
            PaletteLayer::Fg => show_foreground_colors(out)?,
            PaletteLayer::Bg => show_background_colors(out)?,
        },
        CLICommand::Rgb { red, green, blue } => {
            let ansi_value = nearest_extended_color(*red, *green, *blue);
            write!(out, "{} ", ansi_value.index).into_diagnostic()?;
            StyleDescriptor::try_new(ansi_value.index)?.print_line(
                out,
                "Sample Text",
                ResetPolicy::ResetAfter,
            )?;
        }
    }

    out.flush().into_diagnostic()
}

/// Attributes are applied one at a time, so inverse gets the color swap treatment when
/// either color is extended.
fn try_build_style(style: &StyleOption) -> StyleResult<StyleDescriptor> {
    let mut descriptor = StyleDescriptor::try_new(&style.fg)?;
    if let Some(background) = &style.bg {
        descriptor.set_background(background)?;
    }
    for attribute in &style.attributes {
        descriptor.set_attribute_spec(attribute, true)?;
    }
    Ok(descriptor)
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::run_command;
    use crate::cli::CLIArg;

    fn run(args: &[&str]) -> miette::Result<String> {
        let cli_arg = CLIArg::try_parse_from(
            std::iter::once("ansi_style").chain(args.iter().copied()),
        )
        .unwrap();
        let mut out: Vec<u8> = vec![];
        run_command(&cli_arg.command, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test_case(
        &["print", "--fg", "white", "--bg", "green", "-a", "bold", "-a", "underline", "-a", "blink", "test"],
        "\x1b[1;4;5;37m\x1b[42mtest\x1b[0m\n"
    )]
    #[test_case(&["print", "--fg", "red", "--no-newline", "hi"], "\x1b[31mhi\x1b[0m")]
    #[test_case(&["print", "--fg", "200", "--no-reset", "hi"], "\x1b[38;5;200mhi\n")]
    #[test_case(&["print", "--fg", "2", "-a", "4", "x"], "\x1b[4;32mx\x1b[0m\n")]
    #[test_case(&["reset"], "\x1b[0m")]
    #[test_case(&["rgb", "255", "0", "0"], "196 \x1b[38;5;196mSample Text\x1b[0m\n")]
    fn test_output(args: &[&str], expected: &str) {
        assert_eq!(run(args).unwrap(), expected);
    }

    #[test]
    fn inverse_on_extended_colors_swaps() {
        let output = run(&[
            "print", "--fg", "100", "--bg", "blue", "-a", "inverse", "x",
        ])
        .unwrap();
        assert_eq!(output, "\x1b[34m\x1b[48;5;100mx\x1b[0m\n");
    }

    #[test]
    fn describe_lists_resolved_values() {
        let output = run(&["describe", "--fg", "PURPLE", "-a", "bright", "-a", "blink"])
            .unwrap();
        assert_eq!(
            output,
            "foreground: Purple\nbackground: none\nattributes: [Bold/Bright, Blink (slow)]\n"
        );
    }

    #[test]
    fn palette_dumps() {
        let output = run(&["palette", "bg"]).unwrap();
        assert!(output.starts_with("\nSYSTEM COLORS:\n  Name   | Sample\n"));
    }

    #[test_case(&["print", "--fg", "magenta", "x"])]
    #[test_case(&["print", "--fg", "white", "--bg", "256", "x"])]
    #[test_case(&["print", "--fg", "-1", "x"])]
    #[test_case(&["describe", "--fg", "white", "-a", "sparkle"])]
    fn test_rejected_input(args: &[&str]) {
        assert!(run(args).is_err());
    }

    #[test]
    fn rgb_rejects_out_of_range_channels() {
        let result = CLIArg::try_parse_from(["ansi_style", "rgb", "256", "0", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn logging_flag_is_global() {
        let cli_arg = CLIArg::try_parse_from(["ansi_style", "reset", "-l"]).unwrap();
        assert!(cli_arg.global_options.enable_logging);
    }
}
