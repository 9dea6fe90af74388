// envprobe: API key environment diagnostics
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration loading from multiple sources.
//!
//! # Loader Pipeline
//!
//! ```text
//! ConfigLoader::new()
//!   .add_toml_file(path)?
//!   .add_toml_str()
//!   .with_env_prefix()
//!        |
//!        v
//!    build() --> AppConfig
//! ```

use config::{File, FileFormat};
use std::path::{Path, PathBuf};

use super::AppConfig;
use super::file::read_toml;
use crate::error::{ConfigError, Result};

/// Builder for loading configuration from multiple sources.
pub struct ConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env_prefix: Option<String>,
    env_source: Option<config::Map<String, String>>,
    files: Vec<(String, PathBuf)>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            env_source: None,
            files: Vec::new(),
        }
    }

    /// Adds a TOML configuration file to the loader.
    ///
    /// The file is read immediately so a byte order mark can be stripped
    /// before parsing.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable or not UTF-8.
    pub fn add_toml_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let p = path.as_ref();
        let content = read_toml(p)?;
        self.builder = self
            .builder
            .add_source(File::from_str(&content, FileFormat::Toml));
        self.files.push(("file".to_string(), p.to_path_buf()));
        Ok(self)
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self.files
            .push(("string".to_string(), PathBuf::from("<string>")));
        self
    }

    /// Enables `PREFIX_SECTION__KEY` environment overrides.
    ///
    /// API key lists are split on commas, the same way the material service
    /// splits `PEXELS_API_KEYS`.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Reads environment overrides from `vars` instead of the process
    /// environment.
    #[must_use]
    pub fn with_env_source(mut self, vars: config::Map<String, String>) -> Self {
        self.env_source = Some(vars);
        self
    }

    /// Builds the configuration from all added sources.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError::ParseError`] if any source has invalid TOML
    /// syntax or the merged values do not match [`AppConfig`].
    pub fn build(self) -> Result<AppConfig> {
        let origin = self.primary_file();
        let builder = match &self.env_prefix {
            Some(prefix) => self.builder.add_source(
                config::Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("app.pexels_api_keys")
                    .with_list_parse_key("app.pixabay_api_keys")
                    .source(self.env_source.clone()),
            ),
            None => self.builder,
        };

        let parse_error = |e: config::ConfigError| ConfigError::ParseError {
            path: origin.display().to_string(),
            message: e.to_string(),
        };
        let cfg = builder.build().map_err(parse_error)?;
        let mut config: AppConfig = cfg.try_deserialize().map_err(parse_error)?;
        config.config_file = origin;
        Ok(config)
    }

    #[must_use]
    pub fn format_loaded_files(&self) -> Vec<String> {
        self.files
            .iter()
            .enumerate()
            .map(|(i, (source, path))| format!("{}. [{}] {}", i + 1, source, path.display()))
            .collect()
    }

    /// Last file source, used to name the origin in errors and messages.
    fn primary_file(&self) -> PathBuf {
        self.files
            .last()
            .map_or_else(|| PathBuf::from("<defaults>"), |(_, path)| path.clone())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
