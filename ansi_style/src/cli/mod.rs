// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Include.
pub mod clap_config;
pub mod run_command;

// Reexport.
pub use clap_config::*;
pub use run_command::*;
