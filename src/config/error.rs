//! Configuration error types.

use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Port value is outside valid range (1-65535).
    #[error("invalid port '{value}': must be between 1 and 65535")]
    InvalidPort { value: String },

    /// Port string could not be parsed as a number.
    #[error("failed to parse port '{value}': {source}")]
    PortParseError {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Bind address string could not be parsed.
    #[error("failed to parse bind address '{value}': {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    /// Oracle timeout is not a positive whole number of seconds.
    #[error("invalid oracle timeout '{value}': must be a positive number of seconds")]
    InvalidTimeout { value: String },

    /// A setting that must not be blank was blank.
    #[error("{name} must not be empty")]
    EmptyValue { name: &'static str },

    /// A URL setting without an http(s) scheme.
    #[error("invalid URL for {name}: '{value}'")]
    InvalidUrl { name: &'static str, value: String },
}
