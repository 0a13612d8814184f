//! Server configuration.
//!
//! Values come from `<config_dir>/site-sandbox/config.json` when it exists,
//! then from environment variables:
//! - `SITE_SANDBOX_HOST` - Bind address (default: `127.0.0.1`)
//! - `SITE_SANDBOX_PORT` - HTTP port (default: `17020`)
//! - `SITE_SANDBOX_API_KEY` - Require `Authorization: Bearer <key>` on the API
//! - `SITE_SANDBOX_CORS_ORIGINS` - Comma-separated allowed origins
//! - `SITE_SANDBOX_URL` - API base URL used by the CLI client

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use tower_http::cors::{AllowOrigin, CorsLayer};

const APP_NAME: &str = "site-sandbox";
const CONFIG_FILE: &str = "config.json";

pub const DEFAULT_PORT: u16 = 17020;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SandboxConfig {
    pub host: String,
    pub port: u16,
    pub api_key: Option<String>,
    pub cors_origins: Option<Vec<String>>,
    /// Base URL the CLI uses to reach a running server.
    pub server_url: Option<String>,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            api_key: None,
            cors_origins: None,
            server_url: None,
        }
    }
}

impl SandboxConfig {
    /// Load the config file and apply environment overrides.
    /// Falls back to defaults if the file is missing or unreadable.
    pub fn load() -> Self {
        let base = match config_path().and_then(|path| Self::load_from(&path)) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load config, using defaults: {:#}", e);
                Self::default()
            }
        };
        base.with_overrides(|key| std::env::var(key).ok())
    }

    /// Read a config file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).context("Failed to read config file")?;
        serde_json::from_str(&content).context("Failed to parse config file")
    }

    /// Apply `SITE_SANDBOX_*` overrides using `lookup` to read each variable.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(host) = lookup("SITE_SANDBOX_HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("SITE_SANDBOX_PORT").and_then(|p| p.parse().ok()) {
            self.port = port;
        }
        if let Some(key) = lookup("SITE_SANDBOX_API_KEY").filter(|k| !k.is_empty()) {
            self.api_key = Some(key);
        }
        if let Some(origins) = lookup("SITE_SANDBOX_CORS_ORIGINS") {
            self.cors_origins = Some(origins.split(',').map(|s| s.trim().to_string()).collect());
        }
        if let Some(url) = lookup("SITE_SANDBOX_URL") {
            self.server_url = Some(url);
        }
        self
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Base URL for the CLI client, derived from host and port when unset.
    pub fn api_url(&self) -> String {
        self.server_url
            .clone()
            .unwrap_or_else(|| format!("http://{}/api/v1", self.bind_addr()))
    }

    /// Permissive CORS unless explicit origins are configured.
    pub fn cors_layer(&self) -> CorsLayer {
        match &self.cors_origins {
            Some(origins) => {
                let origins: Vec<HeaderValue> =
                    origins.iter().filter_map(|o| o.parse().ok()).collect();
                CorsLayer::new().allow_origin(AllowOrigin::list(origins))
            }
            None => CorsLayer::permissive(),
        }
    }
}

fn config_path() -> Result<PathBuf> {
    let mut path =
        config_dir().ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
    path.push(APP_NAME);
    path.push(CONFIG_FILE);
    Ok(path)
}
