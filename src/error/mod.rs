// envprobe: API key environment diagnostics
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//! anyhow::Error (Result<T>)
//!        ^
//!        |  `?` converts any of:
//!   +----+----+--------+
//!   |         |        |
//! Config   Dotenv   Service
//!
//!   Config   ReadError, ParseError, NotFound, IsDirectory
//!   Dotenv   Parse, Io
//!   Service  MissingApiKey, BlankApiKey
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Configuration file not found.
    #[error("config file not found: {0}")]
    NotFound(String),

    /// Configuration path points at a directory.
    #[error("config path is a directory: {0}")]
    IsDirectory(String),
}

// --- Dotenv Errors ---

/// Errors raised while loading a `.env` file.
#[derive(Debug, Error)]
pub enum DotenvError {
    /// A line of the file could not be parsed.
    #[error("failed to parse '{path}': {message}")]
    Parse { path: String, message: String },

    /// The file exists but could not be read.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// --- Service Errors ---

/// Material service errors.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// No API key configured for the provider.
    #[error("{cfg_key} is not set, set it in {config_file} or the environment")]
    MissingApiKey { cfg_key: String, config_file: String },

    /// A configured key list contains an empty entry.
    #[error("{cfg_key} has a blank entry at index {index}")]
    BlankApiKey { cfg_key: String, index: usize },
}
