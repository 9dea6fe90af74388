// envprobe: API key environment diagnostics
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration section types.
//!
//! # Config Structure
//!
//! ```text
//! AppConfig
//!   [app]          API keys, LLM provider, tool paths, extra keys
//!   [whisper]      subtitle model
//!   [proxy]        http / https
//!   [azure]        speech key / region
//!   [siliconflow]  api key
//!   [ui]           hide_log, language
//! ```
//!
//! Unknown keys are tolerated everywhere; `[app]` keeps them in `extra`.

use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

/// `[app]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppSection {
    /// Pexels keys, either a single string or a list.
    #[serde(deserialize_with = "one_or_many")]
    pub pexels_api_keys: Vec<String>,
    /// Pixabay keys, either a single string or a list.
    #[serde(deserialize_with = "one_or_many")]
    pub pixabay_api_keys: Vec<String>,
    pub llm_provider: String,
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub openai_model_name: String,
    pub imagemagick_path: String,
    pub ffmpeg_path: String,
    /// Every other key of the section, kept verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// `[whisper]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WhisperConfig {
    pub model_size: String,
    pub device: String,
    pub compute_type: String,
}

impl Default for WhisperConfig {
    fn default() -> Self {
        Self {
            model_size: "large-v3".to_string(),
            device: "CPU".to_string(),
            compute_type: "int8".to_string(),
        }
    }
}

/// `[proxy]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProxyConfig {
    pub http: String,
    pub https: String,
}

/// `[azure]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AzureConfig {
    pub speech_key: String,
    pub speech_region: String,
}

/// `[siliconflow]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SiliconflowConfig {
    pub api_key: String,
}

/// `[ui]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub hide_log: bool,
    pub language: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

/// An empty string, or a list holding only one, means no keys.
fn one_or_many<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(key) if key.is_empty() => Vec::new(),
        OneOrMany::One(key) => vec![key],
        OneOrMany::Many(keys) if keys.len() == 1 && keys[0].is_empty() => Vec::new(),
        OneOrMany::Many(keys) => keys,
    })
}
