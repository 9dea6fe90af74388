// envprobe: API key environment diagnostics
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Stock material API key retrieval.
//!
//! ```text
//! PEXELS_API_KEYS="k1,k2"   (env, wins when non-empty)
//! app.pexels_api_keys       (config fallback)
//!          |
//!          v
//! get_api_key(Pexels) --> round-robin over keys
//! ```

use std::fmt;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::config::AppConfig;
use crate::error::ServiceError;

/// Stock material providers that need an API key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    Pexels,
    Pixabay,
}

impl Provider {
    pub const ALL: [Self; 2] = [Self::Pexels, Self::Pixabay];

    /// Key in the `[app]` config section.
    #[must_use]
    pub const fn cfg_key(self) -> &'static str {
        match self {
            Self::Pexels => "pexels_api_keys",
            Self::Pixabay => "pixabay_api_keys",
        }
    }

    /// Environment variable holding comma-separated keys.
    #[must_use]
    pub const fn env_var(self) -> &'static str {
        match self {
            Self::Pexels => "PEXELS_API_KEYS",
            Self::Pixabay => "PIXABAY_API_KEYS",
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Pexels => 0,
            Self::Pixabay => 1,
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pexels => write!(f, "pexels"),
            Self::Pixabay => write!(f, "pixabay"),
        }
    }
}

/// Hands out API keys for material search requests.
#[derive(Debug)]
pub struct MaterialService {
    keys: [Vec<String>; 2],
    config_file: PathBuf,
    requested: AtomicUsize,
}

impl MaterialService {
    /// Build the service from `config`, preferring keys from `env`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::BlankApiKey`] if a configured key list has an
    /// empty entry.
    pub fn resolve<F>(config: &AppConfig, env: F) -> Result<Self, ServiceError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut keys: [Vec<String>; 2] = [Vec::new(), Vec::new()];
        for provider in Provider::ALL {
            keys[provider.index()] = match env(provider.env_var()) {
                Some(raw) if !raw.trim().is_empty() => split_env_keys(&raw),
                _ => {
                    let configured = match provider {
                        Provider::Pexels => &config.app.pexels_api_keys,
                        Provider::Pixabay => &config.app.pixabay_api_keys,
                    };
                    if let Some(index) = configured.iter().position(|k| k.trim().is_empty()) {
                        return Err(ServiceError::BlankApiKey {
                            cfg_key: provider.cfg_key().to_string(),
                            index,
                        });
                    }
                    configured.clone()
                }
            };
            tracing::debug!(
                provider = %provider,
                count = keys[provider.index()].len(),
                "resolved api keys"
            );
        }

        Ok(Self {
            keys,
            config_file: config.config_file.clone(),
            requested: AtomicUsize::new(0),
        })
    }

    /// Number of keys available for `provider`.
    #[must_use]
    pub fn key_count(&self, provider: Provider) -> usize {
        self.keys[provider.index()].len()
    }

    /// Next API key for `provider`.
    ///
    /// A single key is always returned as-is. With several keys the request
    /// counter is bumped before indexing, so the first call yields the second
    /// key. The counter is shared across providers.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::MissingApiKey`] if no key is configured.
    pub fn get_api_key(&self, provider: Provider) -> Result<String, ServiceError> {
        match self.keys[provider.index()].as_slice() {
            [] => Err(ServiceError::MissingApiKey {
                cfg_key: provider.cfg_key().to_string(),
                config_file: self.config_file.display().to_string(),
            }),
            [key] => Ok(key.clone()),
            keys => {
                let requested = self.requested.fetch_add(1, Ordering::Relaxed) + 1;
                Ok(keys[requested % keys.len()].clone())
            }
        }
    }
}

fn split_env_keys(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .map(str::to_string)
        .collect()
}
