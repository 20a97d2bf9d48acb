// SPDX-License-Identifier: MPL-2.0
//! This module handles the subsystem's configuration, including loading and
//! saving settings to a `settings.toml` file.
//!
//! The base address of the backend is the one value every deployment has to
//! provide. It can come from the settings file or from the
//! `PORTFOLIO_BACKEND_URL` environment variable, which wins when set.
//!
//! # Examples
//!
//! ```no_run
//! use portfolio_telemetry::config::{self, Config};
//!
//! let config = config::load().unwrap_or_default();
//! let endpoints = config.endpoints().expect("backend url should be valid");
//! println!("contact form posts to {}", endpoints.contact());
//! ```

mod defaults;

pub use defaults::*;

use crate::domain::timing::{DwellDelay, FadeDelay, RequestTimeout, ToastDuration};
use crate::error::Result;
use crate::infrastructure::http::Endpoints;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "PortfolioTelemetry";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub backend_url: String,
    pub user_agent: String,
    pub section_dwell_ms: u64,
    pub toast_duration_ms: u64,
    pub toast_fade_ms: u64,
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            section_dwell_ms: DEFAULT_SECTION_DWELL_MS,
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
            toast_fade_ms: DEFAULT_TOAST_FADE_MS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Replaces the backend address when an override is present and non-blank.
    pub fn apply_backend_override(&mut self, value: Option<String>) {
        if let Some(url) = value.map(|v| v.trim().to_string()) {
            if !url.is_empty() {
                self.backend_url = url;
            }
        }
    }

    /// Builds the collaborator endpoints from the configured base address.
    pub fn endpoints(&self) -> Result<Endpoints> {
        Endpoints::new(&self.backend_url)
    }

    #[must_use]
    pub fn section_dwell(&self) -> DwellDelay {
        DwellDelay::from_millis(self.section_dwell_ms)
    }

    #[must_use]
    pub fn toast_duration(&self) -> ToastDuration {
        ToastDuration::from_millis(self.toast_duration_ms)
    }

    #[must_use]
    pub fn toast_fade(&self) -> FadeDelay {
        FadeDelay::from_millis(self.toast_fade_ms)
    }

    #[must_use]
    pub fn request_timeout(&self) -> RequestTimeout {
        RequestTimeout::from_secs(self.request_timeout_secs)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the settings file from the platform config directory, then applies
/// the environment override.
pub fn load() -> Result<Config> {
    let mut config = match get_default_config_path() {
        Some(path) if path.exists() => load_from_path(&path)?,
        _ => Config::default(),
    };
    config.apply_backend_override(std::env::var(BACKEND_URL_ENV).ok());
    Ok(config)
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
