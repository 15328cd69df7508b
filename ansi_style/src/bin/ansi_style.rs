// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::Parser;
use r3bl_ansi_style::{cli::{CLIArg, run_command},
                      log::try_initialize_logging_global};

fn main() -> miette::Result<()> {
    // If no args are passed, the following line will fail, and help will be printed
    // thanks to `arg_required_else_help(true)` in the `CLIArg` struct.
    let cli_arg = CLIArg::parse();

    let enable_logging = cli_arg.global_options.enable_logging;
    if enable_logging {
        try_initialize_logging_global(tracing_core::LevelFilter::DEBUG)?;
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    }

    let result = run_command(&cli_arg.command, &mut std::io::stdout().lock());

    if enable_logging {
        tracing::debug!(message = "Stop logging...", is_ok = %result.is_ok());
    }

    result
}
