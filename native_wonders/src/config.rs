//! Client configuration persisted as TOML.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::api::CsrfToken;

/// Client configuration.
///
/// Fields:
/// - server: game server base URL
/// - game_id: the game to attach to
/// - poll_interval_ms / request_timeout_ms: watch cadence and per-request cap
/// - csrf_token / csrf_param: forwarded on mutating requests when set
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    pub server: String,
    pub game_id: u64,
    pub poll_interval_ms: u64,
    pub request_timeout_ms: u64,
    #[serde(default)]
    pub csrf_token: Option<String>,
    #[serde(default)]
    pub csrf_param: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: "http://localhost:8080".to_string(),
            game_id: 1,
            poll_interval_ms: 2000,
            request_timeout_ms: 10_000,
            csrf_token: None,
            csrf_param: None,
        }
    }
}

impl Config {
    /// Load configuration from `path`. If the file does not exist, create
    /// it with defaults and return the default config.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if path.exists() {
            let s = fs::read_to_string(path)
                .with_context(|| format!("reading config file '{}'", path.display()))?;
            let cfg: Config = toml::from_str(&s)
                .with_context(|| format!("parsing TOML config '{}'", path.display()))?;
            Ok(cfg)
        } else {
            if let Some(parent) = path.parent() {
                if !parent.exists() {
                    fs::create_dir_all(parent).with_context(|| {
                        format!("creating config directory '{}'", parent.display())
                    })?;
                }
            }
            let cfg = Config::default();
            let toml_text = toml::to_string_pretty(&cfg)
                .with_context(|| "serializing default config to TOML")?;
            fs::write(path, toml_text)
                .with_context(|| format!("writing default config to '{}'", path.display()))?;
            Ok(cfg)
        }
    }

    /// Save the current config state back to the provided path (overwrites).
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating config directory '{}'", parent.display()))?;
            }
        }
        let toml_text =
            toml::to_string_pretty(&self).with_context(|| "serializing config to TOML")?;
        fs::write(path, toml_text)
            .with_context(|| format!("writing config to '{}'", path.display()))?;
        Ok(())
    }

    /// Validate the configured server address and normalize it to a base
    /// URL without a trailing slash.
    pub fn base_url(&self) -> Result<String> {
        let url = Url::parse(&self.server)
            .or_else(|_| Url::parse(&format!("http://{}", self.server)))
            .with_context(|| format!("invalid server address '{}'", self.server))?;
        match url.scheme() {
            "http" | "https" => {}
            other => anyhow::bail!("unsupported URL scheme: {}", other),
        }
        Ok(url.as_str().trim_end_matches('/').to_string())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// CSRF token and parameter name, when a token is configured. The
    /// parameter name defaults to the server framework's `_csrf`.
    pub fn csrf(&self) -> Option<CsrfToken> {
        self.csrf_token.as_ref().map(|token| CsrfToken {
            param: self
                .csrf_param
                .clone()
                .unwrap_or_else(|| "_csrf".to_string()),
            token: token.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_round_trip() {
        let cfg = Config {
            csrf_token: Some("tok".into()),
            ..Default::default()
        };
        let text = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed.server, cfg.server);
        assert_eq!(parsed.game_id, 1);
        assert_eq!(parsed.csrf_token.as_deref(), Some("tok"));
    }

    #[test]
    fn base_url_accepts_bare_host_and_strips_trailing_slash() {
        let cfg = Config {
            server: "localhost:8080".to_string(),
            ..Default::default()
        };
        assert_eq!(cfg.base_url().unwrap(), "http://localhost:8080");
        let cfg = Config {
            server: "https://example.com/".to_string(),
            ..Default::default()
        };
        assert_eq!(cfg.base_url().unwrap(), "https://example.com");
    }

    #[test]
    fn base_url_rejects_non_http_schemes() {
        let cfg = Config {
            server: "ftp://example.com".to_string(),
            ..Default::default()
        };
        assert!(cfg.base_url().is_err());
    }

    #[test]
    fn csrf_param_defaults_to_underscore_csrf() {
        let cfg = Config {
            csrf_token: Some("tok".into()),
            ..Default::default()
        };
        let csrf = cfg.csrf().unwrap();
        assert_eq!(csrf.param, "_csrf");
        assert_eq!(csrf.token, "tok");
        assert!(Config::default().csrf().is_none());
    }
}
