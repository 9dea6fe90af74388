// envprobe: API key environment diagnostics
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration smoke test.
//!
//! ```text
//! resolve_config() --Err--> ConfigFailed   (service never attempted)
//!        |
//!        Ok
//!        v
//! resolve_service(&config) --Err--> ServiceFailed
//!        |
//!        Ok --> Passed
//! ```
//!
//! Only resolvability is checked; the key retrieval function is never called.

use std::fmt;

use crate::config::AppConfig;
use crate::error::Result;
use crate::service::material::MaterialService;

/// Outcome of the two-step resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SmokeOutcome {
    /// The configuration could not be resolved.
    ConfigFailed(String),
    /// The configuration resolved but the material service did not.
    ServiceFailed(String),
    Passed,
}

impl SmokeOutcome {
    #[must_use]
    pub const fn config_loaded(&self) -> bool {
        !matches!(self, Self::ConfigFailed(_))
    }

    #[must_use]
    pub const fn passed(&self) -> bool {
        matches!(self, Self::Passed)
    }
}

impl fmt::Display for SmokeOutcome {
    /// Renders the status block, starting with a blank line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let failure = match self {
            Self::ConfigFailed(message) => return write!(f, "\n✗ Configuration loading failed: {message}"),
            Self::ServiceFailed(message) => Some(message),
            Self::Passed => None,
        };

        writeln!(f, "\n✓ Configuration module loaded successfully")?;
        writeln!(f, "\nTesting API key retrieval from material service...")?;
        match failure {
            Some(message) => write!(f, "✗ Configuration loading failed: {message}"),
            None => write!(f, "✓ Material service API key function available"),
        }
    }
}

/// Resolve the configuration, then the material service.
///
/// Errors are captured in the outcome, never returned.
pub fn run<C, S>(resolve_config: C, resolve_service: S) -> SmokeOutcome
where
    C: FnOnce() -> Result<AppConfig>,
    S: FnOnce(&AppConfig) -> Result<MaterialService>,
{
    let config = match resolve_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("configuration resolution failed: {e:#}");
            return SmokeOutcome::ConfigFailed(format!("{e:#}"));
        }
    };
    tracing::debug!(file = %config.config_file.display(), "configuration resolved");

    match resolve_service(&config) {
        Ok(_service) => SmokeOutcome::Passed,
        Err(e) => {
            tracing::warn!("material service resolution failed: {e:#}");
            SmokeOutcome::ServiceFailed(format!("{e:#}"))
        }
    }
}
