// envprobe: API key environment diagnostics
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable probing and secret masking.
//!
//! ```text
//! REGISTRY (ordered)          lookup(name)
//!   PEXELS_API_KEYS     -->   Some("abcd...") --> Set { "abcd****ijkl" }
//!   PIXABAY_API_KEYS    -->   Some("")        --> NotSet
//!   OPENAI_API_KEY      -->   None            --> NotSet
//! ```
//!
//! Masking keeps 4 characters at each end when the value is longer than 8
//! characters; anything shorter collapses to `***`.

use std::fmt;

/// A variable the probe checks, with a human-readable description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvVarSpec {
    pub name: &'static str,
    pub description: &'static str,
}

/// Variables checked by the default run, in report order.
pub const REGISTRY: &[EnvVarSpec] = &[
    EnvVarSpec {
        name: "PEXELS_API_KEYS",
        description: "Pexels API Keys",
    },
    EnvVarSpec {
        name: "PIXABAY_API_KEYS",
        description: "Pixabay API Keys",
    },
    EnvVarSpec {
        name: "OPENAI_API_KEY",
        description: "OpenAI API Key",
    },
];

/// Number of characters kept visible at each end of a masked value.
const VISIBLE_EDGE: usize = 4;

/// Mask a secret for display.
///
/// Lengths are counted in characters, not bytes.
///
/// ```
/// use envprobe::probe::mask;
///
/// assert_eq!(mask("123456789"), "1234*6789");
/// assert_eq!(mask("abcdefgh"), "***");
/// ```
#[must_use]
pub fn mask(value: &str) -> String {
    let len = value.chars().count();
    if len <= VISIBLE_EDGE * 2 {
        return "***".to_string();
    }

    let head: String = value.chars().take(VISIBLE_EDGE).collect();
    let tail: String = value.chars().skip(len - VISIBLE_EDGE).collect();
    format!("{head}{}{tail}", "*".repeat(len - VISIBLE_EDGE * 2))
}

/// Presence of a single variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VarStatus {
    /// Set and non-empty; holds the masked value.
    Set { masked: String },
    NotSet,
}

/// Probe result for one registry entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarReport {
    pub spec: EnvVarSpec,
    pub status: VarStatus,
}

impl VarReport {
    #[must_use]
    pub const fn is_set(&self) -> bool {
        matches!(self.status, VarStatus::Set { .. })
    }
}

impl fmt::Display for VarReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.status {
            VarStatus::Set { masked } => write!(f, "✓ {}: {masked}", self.spec.name),
            VarStatus::NotSet => write!(f, "✗ {}: Not set", self.spec.name),
        }
    }
}

/// Probe every entry of `registry` through `lookup`, preserving order.
///
/// Empty values are reported the same as missing ones.
#[must_use]
pub fn probe_with<F>(registry: &[EnvVarSpec], lookup: F) -> Vec<VarReport>
where
    F: Fn(&str) -> Option<String>,
{
    registry
        .iter()
        .map(|spec| {
            let status = match lookup(spec.name) {
                Some(value) if !value.is_empty() => VarStatus::Set {
                    masked: mask(&value),
                },
                _ => VarStatus::NotSet,
            };
            let report = VarReport {
                spec: *spec,
                status,
            };
            tracing::debug!(
                var = spec.name,
                description = spec.description,
                set = report.is_set(),
                "probed"
            );
            report
        })
        .collect()
}

/// Probe the registry against the current process environment.
#[must_use]
pub fn probe_env(registry: &[EnvVarSpec]) -> Vec<VarReport> {
    probe_with(registry, process_lookup)
}

/// Reads a variable from the process environment.
///
/// Values that are not valid unicode are converted lossily so a present
/// variable is never mistaken for an unset one.
#[must_use]
pub fn process_lookup(name: &str) -> Option<String> {
    std::env::var_os(name).map(|value| value.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests;
