// envprobe: API key environment diagnostics
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Optional `.env` file loading.
//!
//! ```text
//! DotenvSource::Search  --> ./.env, ../.env, ... (first hit)
//! DotenvSource::File(p) --> p
//! DotenvSource::Disabled
//!          |
//!          v
//!    load() --> DotenvOutcome (never an error)
//! ```
//!
//! Variables already present in the process environment are never
//! overwritten. Without the `dotenv` feature every load reports
//! [`DotenvOutcome::Unsupported`].

use std::fmt;
#[cfg(feature = "dotenv")]
use std::path::Path;
use std::path::PathBuf;

#[cfg(feature = "dotenv")]
use crate::error::DotenvError;

/// Where to look for the `.env` file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DotenvSource {
    /// Search the current directory and its ancestors for `.env`.
    #[default]
    Search,
    File(PathBuf),
    Disabled,
}

/// Result of the load attempt, reported rather than propagated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DotenvOutcome {
    /// File found and merged into the environment.
    Loaded(PathBuf),
    /// Loader available but no file to load.
    NotFound,
    /// Built without the `dotenv` feature.
    Unsupported,
    Disabled,
    /// File present but unreadable or malformed.
    Failed(String),
}

impl DotenvOutcome {
    /// Whether the run continues with loader support available.
    #[must_use]
    pub const fn is_supported(&self) -> bool {
        matches!(self, Self::Loaded(_) | Self::NotFound)
    }
}

impl fmt::Display for DotenvOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loaded(_) | Self::NotFound => write!(f, "✓ .env file loading supported"),
            Self::Unsupported => write!(f, "⚠ dotenv support not compiled in"),
            Self::Disabled => write!(f, "⚠ .env file loading disabled"),
            Self::Failed(message) => write!(f, "⚠ Failed to load .env file: {message}"),
        }
    }
}

/// Load the `.env` file described by `source`.
#[must_use]
pub fn load(source: &DotenvSource) -> DotenvOutcome {
    let outcome = match source {
        DotenvSource::Disabled => DotenvOutcome::Disabled,
        _ => load_from(source),
    };

    match &outcome {
        DotenvOutcome::Loaded(path) => {
            tracing::info!(path = %path.display(), "loaded environment variables from .env file");
        }
        DotenvOutcome::NotFound => tracing::debug!("no .env file found, skipping"),
        DotenvOutcome::Unsupported => {
            tracing::info!("dotenv support not compiled in, skipping .env file loading");
        }
        DotenvOutcome::Disabled => tracing::debug!(".env file loading disabled"),
        DotenvOutcome::Failed(message) => {
            tracing::warn!("failed to load .env file: {message}");
        }
    }

    outcome
}

#[cfg(feature = "dotenv")]
const DOTENV_FILE: &str = ".env";

#[cfg(feature = "dotenv")]
fn load_from(source: &DotenvSource) -> DotenvOutcome {
    match source {
        DotenvSource::File(path) => load_file(path),
        _ => match std::env::current_dir() {
            Ok(cwd) => search_from(&cwd),
            Err(err) => DotenvOutcome::Failed(
                DotenvError::Io {
                    path: DOTENV_FILE.to_string(),
                    source: err,
                }
                .to_string(),
            ),
        },
    }
}

/// Load the first `.env` file found in `start` or one of its ancestors.
#[cfg(feature = "dotenv")]
fn search_from(start: &Path) -> DotenvOutcome {
    start
        .ancestors()
        .map(|dir| dir.join(DOTENV_FILE))
        .find(|candidate| candidate.is_file())
        .map_or(DotenvOutcome::NotFound, |path| load_file(&path))
}

#[cfg(feature = "dotenv")]
fn load_file(path: &Path) -> DotenvOutcome {
    match dotenvy::from_path(path) {
        Ok(()) => DotenvOutcome::Loaded(path.to_path_buf()),
        Err(e) if e.not_found() => DotenvOutcome::NotFound,
        Err(e) => DotenvOutcome::Failed(to_dotenv_error(e, path).to_string()),
    }
}

#[cfg(not(feature = "dotenv"))]
const fn load_from(_source: &DotenvSource) -> DotenvOutcome {
    DotenvOutcome::Unsupported
}

#[cfg(feature = "dotenv")]
fn to_dotenv_error(err: dotenvy::Error, path: &Path) -> DotenvError {
    let path = path.display().to_string();
    match err {
        dotenvy::Error::Io(source) => DotenvError::Io { path, source },
        other => DotenvError::Parse {
            path,
            message: other.to_string(),
        },
    }
}
