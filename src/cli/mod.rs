// envprobe: API key environment diagnostics
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! envprobe [global options] [command]
//! check      (default)
//! options
//! files
//! version
//! ```

pub mod global;


use crate::cli::global::GlobalOptions;
use clap::{Parser, Subcommand};

/// Checks that API key environment variables and the app configuration
/// resolve.
#[derive(Debug, Parser)]
#[command(
    name = "envprobe",
    author,
    version,
    about = "API key environment diagnostics",
    long_about = "Checks that the API keys used for stock material and LLM requests\n\
                  are visible in the environment, and that the application config\n\
                  and the material service resolve.\n\n\
                  Running `envprobe` without a command performs the check.",
    after_help = "ENVIRONMENT:\n\n\
                  PEXELS_API_KEYS, PIXABAY_API_KEYS  comma-separated stock material keys\n\
                  OPENAI_API_KEY                     LLM key\n\
                  ENVPROBE_<SECTION>__<KEY>          overrides a config.toml value\n\n\
                  A .env file in the current directory or one of its parents is\n\
                  loaded first; variables already set in the environment win."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Checks .env loading, API key variables and config resolution.
    Check,

    /// Lists all config options and their values, secrets masked.
    Options,

    /// Lists the config files used.
    Files,

    /// Shows the version.
    Version,
}

impl Cli {
    /// The command to run, `check` when none was given.
    #[must_use]
    pub fn resolved_command(&self) -> Command {
        self.command.unwrap_or(Command::Check)
    }
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
