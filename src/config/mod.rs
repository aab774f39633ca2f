//!
//! Configuration structures for wiring up an application or service.
//!
//! A configuration can be created in several ways:
//! - From a TOML file via `Config::from_toml_file`
//! - From a TOML string via `str::parse`
//! - Constructed programmatically via the builder methods on `Config`
//!
//! Configuration is split into logical sections, each represented by their
//! own struct:
//!
//! - `HttpConfig` for HTTP server settings
//! - `LoggingConfig` for logging and tracing settings
//!

mod logging;

pub use logging::*;

use {
    crate::Result,
    serde::Deserialize,
    std::{fs, path::Path, str::FromStr},
};

/// Top-level service configuration.
///
/// ```rust
/// use axum_resource::Config;
///
/// let config: Config = r#"
///     [http]
///     bind_addr = "0.0.0.0"
///     bind_port = 3333
///
///     [logging]
///     format = "json"
/// "#.parse().unwrap();
///
/// assert_eq!(config.http.full_bind_addr(), "0.0.0.0:3333");
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Loads the configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        contents.parse()
    }

    /// Sets the bind address of the HttpConfig.
    pub fn with_bind_addr(mut self, addr: impl Into<String>) -> Self {
        self.http.bind_addr = addr.into();
        self
    }

    /// Sets the bind port of the HttpConfig.
    pub fn with_bind_port(mut self, port: u16) -> Self {
        self.http.bind_port = port;
        self
    }

    /// Sets the log format of the LoggingConfig.
    pub fn with_log_format(mut self, format: LogFormat) -> Self {
        self.logging.format = format;
        self
    }

    /// Ensures that the configuration is valid.
    /// Most configuration values are optional or have sensible defaults,
    /// so validation only has to reject values no server could bind to.
    pub fn validate(&self) -> Result<()> {
        self.http.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    ///
    /// Sets up the tracing subscriber for logging based on the LoggingConfig.
    ///
    /// NOTE: This should be called early during startup to ensure logging is
    ///       configured before any log messages are emitted.
    ///
    pub fn setup_tracing(&self) {
        use tracing_subscriber::{EnvFilter, prelude::*};
        let env_filter = EnvFilter::from_default_env();
        match self.logging.format {
            LogFormat::Json => {
                let _ = tracing_subscriber::registry()
                    .with(tracing_subscriber::fmt::layer().json())
                    .with(env_filter)
                    .try_init();
            }
            LogFormat::Default => {
                let _ = tracing_subscriber::registry()
                    .with(tracing_subscriber::fmt::layer())
                    .with(env_filter)
                    .try_init();
            }
            LogFormat::Compact => {
                let _ = tracing_subscriber::registry()
                    .with(tracing_subscriber::fmt::layer().compact())
                    .with(env_filter)
                    .try_init();
            }
            LogFormat::Pretty => {
                let _ = tracing_subscriber::registry()
                    .with(tracing_subscriber::fmt::layer().pretty())
                    .with(env_filter)
                    .try_init();
            }
        }
    }
}

impl FromStr for Config {
    type Err = crate::Error;
    fn from_str(s: &str) -> Result<Self> {
        let config = toml::from_str::<Config>(s)?;
        Ok(config)
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    /// Address the server binds to. Defaults to `127.0.0.1`.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Port the server binds to. Defaults to `3000`.
    #[serde(default = "default_bind_port")]
    pub bind_port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            bind_port: default_bind_port(),
        }
    }
}

impl HttpConfig {
    /// Returns the full `addr:port` string to bind the listener to.
    pub fn full_bind_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.bind_port)
    }

    pub fn validate(&self) -> Result<()> {
        if self.bind_addr.is_empty() {
            return Err(crate::Error::configuration("http.bind_addr is empty"));
        }
        Ok(())
    }
}

fn default_bind_addr() -> String {
    "127.0.0.1".to_string()
}

fn default_bind_port() -> u16 {
    3000
}
