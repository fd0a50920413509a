//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0:?}")]
    InvalidPort(String),
    #[error("ADMIN_API_UPSTREAM must be an http(s) URL, got {0:?}")]
    InvalidUpstream(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpstreamTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Admin API origin that `/api/*` is forwarded to. Forwarding answers
    /// 503 when unset.
    pub upstream: Option<String>,
    pub timeouts: UpstreamTimeouts,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `ADMIN_API_UPSTREAM`: admin API origin, e.g. `http://localhost:5000`
    /// - `ADMIN_API_TIMEOUT_SECS`: default 30
    /// - `ADMIN_API_CONNECT_TIMEOUT_SECS`: default 10
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT").map(|v| v.trim().to_owned()).filter(|v| !v.is_empty()) {
            None => DEFAULT_PORT,
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
        };

        let upstream = match lookup("ADMIN_API_UPSTREAM").map(|v| v.trim().to_owned()).filter(|v| !v.is_empty()) {
            None => None,
            Some(raw) if raw.starts_with("http://") || raw.starts_with("https://") => {
                Some(raw.trim_end_matches('/').to_owned())
            }
            Some(raw) => return Err(ConfigError::InvalidUpstream(raw)),
        };

        let timeouts = UpstreamTimeouts {
            request_secs: parse_secs(lookup("ADMIN_API_TIMEOUT_SECS"), DEFAULT_UPSTREAM_TIMEOUT_SECS),
            connect_secs: parse_secs(lookup("ADMIN_API_CONNECT_TIMEOUT_SECS"), DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { port, upstream, timeouts })
    }
}

fn parse_secs(raw: Option<String>, default: u64) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(default)
}
