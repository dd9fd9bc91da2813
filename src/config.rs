//! Configuration loading and constants.
//!
//! Loads application configuration from an optional TOML file and defines
//! constants for the service identity, the simulated analysis latency,
//! logging defaults, and default paths. `AppConfig` is the root
//! configuration struct; when no config file exists the compiled-in
//! defaults apply, so the binary runs with zero configuration.

use const_format::formatcp;
use serde::Deserialize;
use std::io;
use std::path::Path;

// =============================================================================
// Service Identity
// =============================================================================

/// Human-readable service name, used in the root status message.
pub const SERVICE_NAME: &str = "AutoKube AI Backend";

/// Version string reported by the health endpoint. Pinned by the API
/// contract, independent of the package version.
pub const SERVICE_VERSION: &str = "1.0.0";

/// Fixed status message returned by `GET /` (compile-time concatenation).
pub const ROOT_STATUS_MESSAGE: &str = formatcp!("{} is running", SERVICE_NAME);

// =============================================================================
// Diagnosis Behavior
// =============================================================================

/// Simulated analysis latency applied to every diagnose request, in
/// milliseconds. Unconditional and not configurable.
pub const ANALYSIS_DELAY_MS: u64 = 500;

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default bind host
pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";

/// Default bind port
pub const DEFAULT_HTTP_PORT: u16 = 5000;

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "autokube_backend=debug,tower_http=debug";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HTTP_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_HTTP_PORT
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// A missing file is not an error: the service has no required settings,
    /// so the compiled-in defaults (bind 0.0.0.0:5000, text logs) are
    /// returned instead. A file that exists but cannot be read or parsed is
    /// still a startup error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(ConfigError::Io(e)),
        };
        let config = toml::from_str(&contents)?;
        Ok(config)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
