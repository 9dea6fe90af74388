// envprobe: API key environment diagnostics
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Application configuration.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. config.toml (seeded from config.example.toml when missing)
//! 3. ENVPROBE_* env vars
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! ENVPROBE_APP__LLM_PROVIDER=openai  → app.llm_provider = "openai"
//! ENVPROBE_LISTEN_PORT=9000          → listen_port = 9000
//! ENVPROBE_UI__HIDE_LOG=true         → ui.hide_log = true
//! ENVPROBE_APP__PEXELS_API_KEYS=a,b  → app.pexels_api_keys = ["a", "b"]
//! ```

pub mod file;
pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::probe::mask;

use loader::ConfigLoader;
use types::{AppSection, AzureConfig, ProxyConfig, SiliconflowConfig, UiConfig, WhisperConfig};

/// Prefix of environment variables that override config values.
pub const ENV_PREFIX: &str = "ENVPROBE";

/// Complete application configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub app: AppSection,
    pub whisper: WhisperConfig,
    pub proxy: ProxyConfig,
    pub azure: AzureConfig,
    pub siliconflow: SiliconflowConfig,
    pub ui: UiConfig,
    pub log_level: String,
    pub listen_host: String,
    pub listen_port: u16,
    pub project_name: String,
    pub project_description: String,
    pub project_version: String,
    /// File the configuration was loaded from.
    #[serde(skip)]
    pub config_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app: AppSection::default(),
            whisper: WhisperConfig::default(),
            proxy: ProxyConfig::default(),
            azure: AzureConfig::default(),
            siliconflow: SiliconflowConfig::default(),
            ui: UiConfig::default(),
            log_level: "DEBUG".to_string(),
            listen_host: "0.0.0.0".to_string(),
            listen_port: 8080,
            project_name: "MoneyPrinterTurbo".to_string(),
            project_description:
                "<a href='https://github.com/harry0703/MoneyPrinterTurbo'>https://github.com/harry0703/MoneyPrinterTurbo</a>"
                    .to_string(),
            project_version: "1.2.6".to_string(),
            config_file: PathBuf::from(file::CONFIG_FILE),
        }
    }
}

impl AppConfig {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use envprobe::config::AppConfig;
    ///
    /// let config = AppConfig::builder()
    ///     .add_toml_file("config.toml")?
    ///     .with_env_prefix("ENVPROBE")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `AppConfig` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Format configuration options for display.
    ///
    /// Secrets are masked; output is sorted by key.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_app_options(&mut options);
        self.format_service_options(&mut options);
        self.format_server_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_app_options(&self, options: &mut BTreeMap<String, String>) {
        let app = &self.app;
        options.insert("app.pexels_api_keys".into(), mask_keys(&app.pexels_api_keys));
        options.insert(
            "app.pixabay_api_keys".into(),
            mask_keys(&app.pixabay_api_keys),
        );
        options.insert("app.llm_provider".into(), app.llm_provider.clone());
        options.insert("app.openai_api_key".into(), mask_secret(&app.openai_api_key));
        options.insert("app.openai_base_url".into(), app.openai_base_url.clone());
        options.insert(
            "app.openai_model_name".into(),
            app.openai_model_name.clone(),
        );
        options.insert("app.imagemagick_path".into(), app.imagemagick_path.clone());
        options.insert("app.ffmpeg_path".into(), app.ffmpeg_path.clone());

        for (key, value) in &app.extra {
            let rendered = match value {
                serde_json::Value::String(s) if is_secret_key(key) => mask_secret(s),
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            options.insert(format!("app.{key}"), rendered);
        }
    }

    fn format_service_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("whisper.model_size".into(), self.whisper.model_size.clone());
        options.insert("whisper.device".into(), self.whisper.device.clone());
        options.insert(
            "whisper.compute_type".into(),
            self.whisper.compute_type.clone(),
        );
        options.insert("proxy.http".into(), self.proxy.http.clone());
        options.insert("proxy.https".into(), self.proxy.https.clone());
        options.insert(
            "azure.speech_key".into(),
            mask_secret(&self.azure.speech_key),
        );
        options.insert(
            "azure.speech_region".into(),
            self.azure.speech_region.clone(),
        );
        options.insert(
            "siliconflow.api_key".into(),
            mask_secret(&self.siliconflow.api_key),
        );
        options.insert("ui.hide_log".into(), self.ui.hide_log.to_string());
        options.insert("ui.language".into(), self.ui.language.clone());
    }

    fn format_server_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("log_level".into(), self.log_level.clone());
        options.insert("listen_host".into(), self.listen_host.clone());
        options.insert("listen_port".into(), self.listen_port.to_string());
        options.insert("project_name".into(), self.project_name.clone());
        options.insert("project_version".into(), self.project_version.clone());
    }
}

/// Loader for `config_file` with the standard sources attached.
///
/// Seeds the file from the example template first, so the returned loader
/// already lists it.
///
/// # Errors
///
/// Returns an error if the path is a directory, the example cannot be
/// copied, or the file cannot be read.
pub fn loader_for(config_file: &Path) -> Result<ConfigLoader> {
    file::ensure_config_file(config_file)?;
    tracing::info!("load config from file: {}", config_file.display());
    Ok(ConfigLoader::new()
        .add_toml_file(config_file)?
        .with_env_prefix(ENV_PREFIX))
}

/// Resolve the application configuration from `config_file`.
///
/// # Errors
///
/// Returns an error if the file is missing (and no example exists), is a
/// directory, or does not parse.
pub fn load(config_file: &Path) -> Result<AppConfig> {
    let config = loader_for(config_file)?.build()?;
    tracing::info!("{} v{}", config.project_name, config.project_version);
    Ok(config)
}

fn is_secret_key(key: &str) -> bool {
    let key = key.to_ascii_lowercase();
    ["key", "token", "secret", "password"]
        .iter()
        .any(|marker| key.contains(marker))
}

fn mask_secret(value: &str) -> String {
    if value.is_empty() {
        String::new()
    } else {
        mask(value)
    }
}

fn mask_keys(keys: &[String]) -> String {
    keys.iter()
        .map(|key| mask(key))
        .collect::<Vec<_>>()
        .join(", ")
}
