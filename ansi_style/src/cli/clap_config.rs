// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::{Args, Parser, Subcommand, ValueEnum};

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "ansi_style")]
#[command(about = "🎨 Print text in color, with ANSI escape sequences")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version} 💻\n\nUSAGE 📓:\n  ansi_style [\x1b[32mCommand\x1b[0m] [\x1b[34mOptions\x1b[0m]\n\n{all-args}\n",
    subcommand_help_heading("Command")
)]
pub struct CLIArg {
    #[command(subcommand)]
    pub command: CLICommand,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `log.txt` for debugging"
    )]
    pub enable_logging: bool,
}

/// Colors are a base color name (case is ignored) or a number from 0 to 255.
/// Attributes are a name or a number from 0 to 7.
#[derive(Debug, Args)]
pub struct StyleOption {
    #[arg(
        long,
        value_name = "COLOR",
        allow_hyphen_values = true,
        help = "Foreground color, eg: `white`, `RED`, `208`"
    )]
    pub fg: String,

    #[arg(
        long,
        value_name = "COLOR",
        allow_hyphen_values = true,
        help = "Background color, leave out to keep the terminal's default"
    )]
    pub bg: Option<String>,

    #[arg(
        long = "attribute",
        short = 'a',
        value_name = "ATTR",
        help = "Display attribute, repeat for more, eg: `-a bold -a underline`"
    )]
    pub attributes: Vec<String>,
}

#[derive(Debug, Subcommand)]
pub enum CLICommand {
    #[clap(about = "🖍️ Print styled text\n💡 Eg: `ansi_style print --fg white --bg green -a bold hello`")]
    Print {
        #[command(flatten)]
        style: StyleOption,

        #[arg(
            long,
            help = "Leave the terminal styled after the text, undo it later with `reset`"
        )]
        no_reset: bool,

        #[arg(long, help = "Don't print a newline after the text")]
        no_newline: bool,

        #[arg(value_name = "TEXT")]
        text: String,
    },

    #[clap(about = "🧹 Restore the terminal's default colors and attributes")]
    Reset,

    #[clap(about = "🔍 Show how a style's colors and attributes were resolved")]
    Describe {
        #[command(flatten)]
        style: StyleOption,
    },

    #[clap(about = "🌈 Dump the base and extended palette, to check what the terminal supports")]
    Palette {
        #[arg(value_name = "LAYER")]
        layer: PaletteLayer,
    },

    #[clap(about = "🎯 Find the extended palette entry closest to an RGB color")]
    Rgb { red: u8, green: u8, blue: u8 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PaletteLayer {
    #[clap(help = "Foreground colors")]
    Fg,
    #[clap(help = "Background colors")]
    Bg,
}
