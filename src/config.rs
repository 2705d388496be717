//! Application configuration loaded from environment variables.

use std::net::{IpAddr, SocketAddr};

use serde::Deserialize;

use crate::api::RouterOptions;
use crate::error::{Result, ScaffoldError};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Server Configuration ===
    /// Address to bind the HTTP server to.
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port.
    #[serde(default = "default_port")]
    pub port: u16,

    // === Logging ===
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Enable verbose logging.
    #[serde(default)]
    pub verbose: bool,

    // === Operational Surfaces ===
    /// Serve the OpenAPI document and Swagger UI.
    #[serde(default = "default_true")]
    pub enable_swagger: bool,

    /// Install the Prometheus recorder and serve `/metrics`.
    #[serde(default)]
    pub enable_metrics: bool,

    /// Attach a permissive CORS layer.
    #[serde(default = "default_true")]
    pub cors_permissive: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            rust_log: default_log_level(),
            verbose: false,
            enable_swagger: true,
            enable_metrics: false,
            cors_permissive: true,
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Ok(envy::from_env()?)
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(ScaffoldError::InvalidConfig(
                "PORT must be non-zero".to_string(),
            ));
        }

        if self.host.parse::<IpAddr>().is_err() {
            return Err(ScaffoldError::InvalidConfig(format!(
                "HOST must be an IP address, got {:?}",
                self.host
            )));
        }

        Ok(())
    }

    /// Socket address the server binds to.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self.host.parse()?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Router options derived from this configuration (metrics handle excluded).
    pub fn router_options(&self) -> RouterOptions {
        RouterOptions {
            swagger: self.enable_swagger,
            cors_permissive: self.cors_permissive,
            metrics: None,
        }
    }
}
