// envprobe: API key environment diagnostics
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Command Dispatch
//!   Check | Options | Files | Version
//! ```

use std::process::ExitCode;

use envprobe::cli::global::GlobalOptions;
use envprobe::cli::{self, Command};
use envprobe::cmd::check::{CheckOptions, run_check_command};
use envprobe::cmd::config::{run_files_command, run_options_command};
use envprobe::config;
use envprobe::logging::init_logging;
use envprobe::logging::{LogConfig, LogLevel};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = build_log_config(&cli.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli)
}

fn build_log_config(global: &GlobalOptions) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(LogLevel::INFO);

    let file_level = global
        .file_log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(console_level);

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .build()
}

fn dispatch_command(cli: &cli::Cli) -> ExitCode {
    let result = match cli.resolved_command() {
        Command::Check => {
            let options = CheckOptions::builder()
                .with_dotenv(cli.global.dotenv_source())
                .with_config_file(cli.global.config.clone())
                .build();
            run_check_command(&options)
        }
        Command::Options => config::load(&cli.global.config).map(|config| run_options_command(&config)),
        Command::Files => config::loader_for(&cli.global.config)
            .map(|loader| run_files_command(&loader.format_loaded_files())),
        Command::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
