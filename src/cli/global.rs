// envprobe: API key environment diagnostics
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! ```text
//! --config FILE     ← config.toml location (or ENVPROBE_CONFIG)
//! --env-file FILE   ← load this .env instead of searching
//! --no-dotenv       ← skip .env loading
//! --log-level N     ← Console verbosity (0-6)
//! --file-log-level  ← File verbosity (defaults to --log-level)
//! --log-file FILE   ← Also log to FILE
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::config::file::CONFIG_FILE;
use crate::dotenv::DotenvSource;

/// Global options available for all commands.
#[derive(Debug, Clone, Args)]
pub struct GlobalOptions {
    /// Path to the application config file.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        env = "ENVPROBE_CONFIG",
        default_value = CONFIG_FILE
    )]
    pub config: PathBuf,

    /// Loads this .env file instead of searching the current directory and
    /// its parents.
    #[arg(long = "env-file", value_name = "FILE", conflicts_with = "no_dotenv")]
    pub env_file: Option<PathBuf>,

    /// Skips .env file loading.
    #[arg(long = "no-dotenv")]
    pub no_dotenv: bool,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

impl GlobalOptions {
    /// Where the dotenv step should look.
    #[must_use]
    pub fn dotenv_source(&self) -> DotenvSource {
        if self.no_dotenv {
            DotenvSource::Disabled
        } else {
            self.env_file
                .clone()
                .map_or(DotenvSource::Search, DotenvSource::File)
        }
    }
}
