// envprobe: API key environment diagnostics
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The environment check: dotenv, probe, smoke test, summary.

use std::io::Write;
use std::path::PathBuf;

use bon::Builder;

use crate::config;
use crate::dotenv::{self, DotenvOutcome, DotenvSource};
use crate::error::Result;
use crate::probe::{self, REGISTRY, VarReport};
use crate::service::material::MaterialService;
use crate::smoke::{self, SmokeOutcome};

/// Inputs of a check run.
#[derive(Debug, Clone, Builder)]
pub struct CheckOptions {
    #[builder(setters(name = with_dotenv), default)]
    dotenv: DotenvSource,
    #[builder(setters(name = with_config_file), default = PathBuf::from(config::file::CONFIG_FILE))]
    config_file: PathBuf,
}

/// Everything the check found, in report order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub dotenv: DotenvOutcome,
    pub vars: Vec<VarReport>,
    pub smoke: SmokeOutcome,
}

impl CheckReport {
    /// Write the status lines to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn render<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "Testing environment variable functionality...")?;
        writeln!(out, "{}", self.dotenv)?;

        writeln!(out, "\nEnvironment variable status:")?;
        for var in &self.vars {
            writeln!(out, "{var}")?;
        }

        writeln!(out, "{}", self.smoke)?;

        writeln!(out, "\nEnvironment variable test completed!")?;
        out.flush()
    }
}

/// Perform the check against the real process environment.
///
/// The dotenv step runs first so probed variables include file-provided
/// defaults.
#[must_use]
pub fn collect(options: &CheckOptions) -> CheckReport {
    let dotenv = dotenv::load(&options.dotenv);
    let vars = probe::probe_env(REGISTRY);
    let smoke = smoke::run(
        || config::load(&options.config_file),
        |config| Ok(MaterialService::resolve(config, probe::process_lookup)?),
    );

    CheckReport {
        dotenv,
        vars,
        smoke,
    }
}

/// Run the check and print the report to stdout.
///
/// # Errors
///
/// Returns an error only if stdout cannot be written.
pub fn run_check_command(options: &CheckOptions) -> Result<()> {
    let report = collect(options);
    let mut stdout = std::io::stdout().lock();
    report.render(&mut stdout)?;
    Ok(())
}
