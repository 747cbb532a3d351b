//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `TRUSTLENS_*` environment variables.
//! Oracle provider API keys are read by `genai` from its own variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::net::IpAddr;
use std::time::Duration;

/// Default oracle model used when `TRUSTLENS_ORACLE_MODEL` is not set.
pub const DEFAULT_ORACLE_MODEL: &str = "gemini-2.0-flash";

/// Default ledger node URL used when `TRUSTLENS_LEDGER_URL` is not set.
pub const DEFAULT_LEDGER_URL: &str = "http://localhost:9200";

/// Default per-call oracle time budget, in seconds.
pub const DEFAULT_ORACLE_TIMEOUT_SECS: u64 = 120;

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `TRUSTLENS_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8080`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Model name passed to the oracle client. Default: `gemini-2.0-flash`.
    pub oracle_model: String,

    /// Time budget for one oracle call. Default: 120 s.
    pub oracle_timeout: Duration,

    /// Ledger node base URL. Default: `http://localhost:9200`.
    pub ledger_url: String,

    /// Bearer token for the ledger node, if it requires one.
    pub ledger_api_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            oracle_model: DEFAULT_ORACLE_MODEL.to_string(),
            oracle_timeout: Duration::from_secs(DEFAULT_ORACLE_TIMEOUT_SECS),
            ledger_url: DEFAULT_LEDGER_URL.to_string(),
            ledger_api_key: None,
        }
    }
}

impl Config {
    pub const ENV_PORT: &'static str = "TRUSTLENS_PORT";
    const ENV_BIND_ADDR: &'static str = "TRUSTLENS_BIND_ADDR";
    const ENV_ORACLE_MODEL: &'static str = "TRUSTLENS_ORACLE_MODEL";
    const ENV_ORACLE_TIMEOUT_SECS: &'static str = "TRUSTLENS_ORACLE_TIMEOUT_SECS";
    const ENV_LEDGER_URL: &'static str = "TRUSTLENS_LEDGER_URL";
    const ENV_LEDGER_API_KEY: &'static str = "TRUSTLENS_LEDGER_API_KEY";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let oracle_model = Self::parse_string_from_env(Self::ENV_ORACLE_MODEL, defaults.oracle_model);
        let oracle_timeout = Self::parse_timeout_from_env(defaults.oracle_timeout)?;
        let ledger_url = Self::parse_string_from_env(Self::ENV_LEDGER_URL, defaults.ledger_url);
        let ledger_api_key = Self::parse_optional_string_from_env(Self::ENV_LEDGER_API_KEY);

        Ok(Self {
            port,
            bind_addr,
            oracle_model,
            oracle_timeout,
            ledger_url,
            ledger_api_key,
        })
    }

    /// Checks invariants that parsing alone does not enforce.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.oracle_model.trim().is_empty() {
            return Err(ConfigError::EmptyValue {
                name: Self::ENV_ORACLE_MODEL,
            });
        }

        if self.oracle_timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout {
                value: self.oracle_timeout.as_secs().to_string(),
            });
        }

        let url = self.ledger_url.trim();
        if url.is_empty() {
            return Err(ConfigError::EmptyValue {
                name: Self::ENV_LEDGER_URL,
            });
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidUrl {
                name: Self::ENV_LEDGER_URL,
                value: self.ledger_url.clone(),
            });
        }

        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_timeout_from_env(default: Duration) -> Result<Duration, ConfigError> {
        match env::var(Self::ENV_ORACLE_TIMEOUT_SECS) {
            Ok(value) => match value.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
                _ => Err(ConfigError::InvalidTimeout { value }),
            },
            Err(_) => Ok(default),
        }
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name).unwrap_or(default)
    }

    fn parse_optional_string_from_env(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}
