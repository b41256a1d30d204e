// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of WattCast.
//
// Licensed under the Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International
// (CC BY-NC-ND 4.0). You may use and share this file for non-commercial purposes only and you may not
// create derivatives. See <https://creativecommons.org/licenses/by-nc-nd/4.0/>.
//
// This software is provided "AS IS", without warranty of any kind.
//
// For commercial licensing, please contact: info@solare.cz

use std::path::Path;

use anyhow::{Context, Result, bail};
use axum::http::HeaderValue;
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

/// Config file read when no path is given on the command line
pub const DEFAULT_CONFIG_PATH: &str = "wattcast.toml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub cors: CorsSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    /// Origins allowed to call the API; `"*"` allows any origin
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

fn default_bind_address() -> String {
    "0.0.0.0".to_owned()
}

fn default_port() -> u16 {
    8000
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".to_owned()]
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            port: default_port(),
        }
    }
}

impl Default for CorsSettings {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
        }
    }
}

impl ServerConfig {
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(Path::new(path))
            .with_context(|| format!("Failed to read config file: {path}"))?;
        let config: Self =
            toml::from_str(&content).context("Failed to parse config TOML")?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if given, otherwise [`DEFAULT_CONFIG_PATH`] if it exists,
    /// otherwise built-in defaults
    pub fn load(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::from_file(DEFAULT_CONFIG_PATH),
            None => {
                info!(path = DEFAULT_CONFIG_PATH, "No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.bind_address, self.server.port)
    }

    fn validate(&self) -> Result<()> {
        if self.server.bind_address.trim().is_empty() {
            bail!("server.bind_address must not be empty");
        }
        for origin in &self.cors.allowed_origins {
            if origin != "*" && HeaderValue::from_str(origin).is_err() {
                bail!("cors.allowed_origins contains an invalid origin: {origin:?}");
            }
        }
        Ok(())
    }
}

impl CorsSettings {
    /// CORS layer allowing any method and header from the configured origins
    #[must_use]
    pub fn layer(&self) -> CorsLayer {
        let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

        if self.allowed_origins.iter().any(|origin| origin == "*") {
            return layer.allow_origin(Any);
        }

        let origins: Vec<HeaderValue> = self
            .allowed_origins
            .iter()
            .filter_map(|origin| HeaderValue::from_str(origin).ok())
            .collect();
        layer.allow_origin(origins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:8000");
        assert_eq!(config.cors.allowed_origins, vec!["http://localhost:3000"]);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let file = write_config("[server]\nport = 9100\n");
        let config = ServerConfig::from_file(file.path().to_str().unwrap()).unwrap();

        assert_eq!(config.server.port, 9100);
        assert_eq!(config.server.bind_address, "0.0.0.0");
        assert_eq!(config.cors.allowed_origins, vec!["http://localhost:3000"]);
    }

    #[test]
    fn test_full_file() {
        let file = write_config(
            r#"
[server]
bind_address = "127.0.0.1"
port = 8080

[cors]
allowed_origins = ["http://localhost:3000", "https://example.org"]
"#,
        );
        let config = ServerConfig::from_file(file.path().to_str().unwrap()).unwrap();

        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.cors.allowed_origins.len(), 2);
    }

    #[test]
    fn test_empty_bind_address_rejected() {
        let file = write_config("[server]\nbind_address = \"\"\n");
        let err = ServerConfig::from_file(file.path().to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("bind_address"));
    }

    #[test]
    fn test_invalid_origin_rejected() {
        let file = write_config("[cors]\nallowed_origins = [\"http://bad\\norigin\"]\n");
        let err = ServerConfig::from_file(file.path().to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("invalid origin"));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let err = ServerConfig::load(Some("/nonexistent/wattcast.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        let file = write_config("[server\nport = ");
        assert!(ServerConfig::from_file(file.path().to_str().unwrap()).is_err());
    }
}
