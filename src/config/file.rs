// envprobe: API key environment diagnostics
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Config file bootstrap and decoding.
//!
//! ```text
//! config.toml missing?  --> copy config.example.toml (same dir) if present
//! config.toml is a dir? --> ConfigError::IsDirectory
//! read bytes --> strip UTF-8 BOM --> &str
//! ```

use encoding_rs::UTF_8;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Default config file name.
pub const CONFIG_FILE: &str = "config.toml";

/// Template copied into place when the config file is missing.
pub const EXAMPLE_FILE: &str = "config.example.toml";

/// Path of the example file that sits next to `config_file`.
#[must_use]
pub fn example_path(config_file: &Path) -> PathBuf {
    config_file.with_file_name(EXAMPLE_FILE)
}

/// Make sure `config_file` is a regular file, seeding it from the example.
///
/// A missing file without an example is left alone; reading it later
/// reports [`ConfigError::NotFound`].
///
/// # Errors
///
/// Returns [`ConfigError::IsDirectory`] if the path is a directory, or
/// [`ConfigError::ReadError`] if the example cannot be copied.
pub fn ensure_config_file(config_file: &Path) -> Result<(), ConfigError> {
    if config_file.is_dir() {
        return Err(ConfigError::IsDirectory(config_file.display().to_string()));
    }

    if config_file.is_file() {
        return Ok(());
    }

    let example = example_path(config_file);
    if example.is_file() {
        std::fs::copy(&example, config_file).map_err(|source| ConfigError::ReadError {
            path: example.display().to_string(),
            source,
        })?;
        tracing::info!(
            from = %example.display(),
            to = %config_file.display(),
            "copied example config"
        );
    }

    Ok(())
}

/// Read a TOML file as UTF-8, dropping a leading byte order mark.
///
/// # Errors
///
/// Returns [`ConfigError::NotFound`] for a missing file,
/// [`ConfigError::ReadError`] for other I/O failures and
/// [`ConfigError::ParseError`] for invalid UTF-8.
pub fn read_toml(path: &Path) -> Result<String, ConfigError> {
    let bytes = std::fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => ConfigError::NotFound(path.display().to_string()),
        _ => ConfigError::ReadError {
            path: path.display().to_string(),
            source,
        },
    })?;

    let (content, had_errors) = UTF_8.decode_with_bom_removal(&bytes);
    if had_errors {
        return Err(ConfigError::ParseError {
            path: path.display().to_string(),
            message: "file is not valid UTF-8".to_string(),
        });
    }

    Ok(content.into_owned())
}
