//! Server configuration, loaded from a TOML file with serde defaults.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use time::Duration;

/// Errors raised while loading the configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub oauth: OAuthSettings,
    /// Clients and users registered at startup.
    #[serde(default)]
    pub seed: SeedConfig,
}

impl AppConfig {
    /// Loads the configuration from `path`.
    ///
    /// A missing file yields the defaults so the server can boot without a
    /// config in development; a present but malformed file is an error.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let cfg = if Path::new(path).exists() {
            let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                path: path.to_string(),
                source,
            })?;
            toml::from_str(&raw).map_err(|source| ConfigError::Parse {
                path: path.to_string(),
                source,
            })?
        } else {
            Self::default()
        };
        cfg.validate().map_err(ConfigError::Invalid)?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("server.port must be > 0".into());
        }
        let lvl = self.logging.level.to_ascii_lowercase();
        let valid_levels = ["trace", "debug", "info", "warn", "error", "off"];
        if !valid_levels.contains(&lvl.as_str()) {
            return Err(format!("logging.level must be one of {valid_levels:?}"));
        }
        if self.oauth.code_lifetime_secs == 0 {
            return Err("oauth.code_lifetime_secs must be > 0".into());
        }
        if self.oauth.token_lifetime_secs == 0 {
            return Err("oauth.token_lifetime_secs must be > 0".into());
        }
        if i64::try_from(self.oauth.code_lifetime_secs).is_err()
            || i64::try_from(self.oauth.token_lifetime_secs).is_err()
        {
            return Err("oauth lifetimes must fit in 64-bit signed seconds".into());
        }
        let mut seen = std::collections::HashSet::new();
        for client in &self.seed.clients {
            if client.client_id.is_empty() || client.redirect_uri.is_empty() {
                return Err("seed.clients entries require client_id and redirect_uri".into());
            }
            if !seen.insert(client.client_id.as_str()) {
                return Err(format!("duplicate seed client_id: {}", client.client_id));
            }
        }
        for user in &self.seed.users {
            if user.email.is_empty() || user.password.is_empty() {
                return Err("seed.users entries require email and password".into());
            }
        }
        Ok(())
    }

    pub fn addr(&self) -> SocketAddr {
        use std::net::{IpAddr, Ipv4Addr};
        let host: IpAddr = self
            .server
            .host
            .parse()
            .unwrap_or(IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)));
        SocketAddr::from((host, self.server.port))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".into()
}
fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".into()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Lifetimes for issued credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OAuthSettings {
    /// Authorization code lifetime in seconds.
    #[serde(default = "default_code_lifetime_secs")]
    pub code_lifetime_secs: u64,
    /// Bearer token lifetime in seconds.
    #[serde(default = "default_token_lifetime_secs")]
    pub token_lifetime_secs: u64,
}

fn default_code_lifetime_secs() -> u64 {
    600
}
fn default_token_lifetime_secs() -> u64 {
    3600
}

impl Default for OAuthSettings {
    fn default() -> Self {
        Self {
            code_lifetime_secs: default_code_lifetime_secs(),
            token_lifetime_secs: default_token_lifetime_secs(),
        }
    }
}

impl OAuthSettings {
    // Out-of-range values are rejected by validate(); saturate rather than
    // wrap if a caller skips it.
    pub fn code_lifetime(&self) -> Duration {
        Duration::seconds(i64::try_from(self.code_lifetime_secs).unwrap_or(i64::MAX))
    }

    pub fn token_lifetime(&self) -> Duration {
        Duration::seconds(i64::try_from(self.token_lifetime_secs).unwrap_or(i64::MAX))
    }
}

/// Initial data registered when the server starts.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SeedConfig {
    #[serde(default)]
    pub clients: Vec<SeedClient>,
    #[serde(default)]
    pub users: Vec<SeedUser>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedClient {
    pub client_id: String,
    #[serde(default)]
    pub name: String,
    pub redirect_uri: String,
    #[serde(default)]
    pub secret: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedUser {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn parses_seed_tables() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [server]
            port = 9000

            [[seed.clients]]
            client_id = "errornot"
            name = "ErrorNot"
            redirect_uri = "http://127.0.0.1:8888/login"

            [[seed.users]]
            email = "pruyssen@af83.com"
            password = "1234"
            "#,
        )
        .unwrap();

        assert_eq!(cfg.server.port, 9000);
        assert_eq!(cfg.seed.clients.len(), 1);
        assert_eq!(cfg.seed.clients[0].client_id, "errornot");
        assert_eq!(cfg.seed.users[0].email, "pruyssen@af83.com");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_bad_log_level() {
        let mut cfg = AppConfig::default();
        cfg.logging.level = "loud".into();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_duplicate_client_ids() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [[seed.clients]]
            client_id = "a"
            redirect_uri = "http://localhost/cb"

            [[seed.clients]]
            client_id = "a"
            redirect_uri = "http://localhost/other"
            "#,
        )
        .unwrap();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_zero_lifetimes() {
        let mut cfg = AppConfig::default();
        cfg.oauth.code_lifetime_secs = 0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_overflowing_lifetimes() {
        let mut cfg = AppConfig::default();
        cfg.oauth.token_lifetime_secs = u64::MAX;
        assert!(cfg.validate().is_err());
        // Even unvalidated, the duration saturates instead of wrapping.
        assert!(cfg.oauth.token_lifetime().is_positive());
    }
}
