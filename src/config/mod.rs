// Configuration module entry point
// Loads settings from config.toml, environment variables, and defaults

mod types;

use std::net::SocketAddr;

use crate::logger;

pub use types::{Config, HttpConfig, LoggingConfig, ServerConfig, SiteConfig};

impl Config {
    /// Load configuration from the default "config.toml" location
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from specified file path (without extension)
    ///
    /// Precedence, lowest to highest: built-in defaults, the config file,
    /// `SERVER`-prefixed environment variables, and finally the bare `PORT`
    /// variable for the listening port.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("SERVER"))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("http.max_body_size", 65_536)? // 64KB
            .set_default("site.page", "static/index.html")?
            .build()?;

        let mut cfg: Self = settings.try_deserialize()?;

        if let Some(port) = port_from_env(std::env::var("PORT").ok()) {
            cfg.server.port = port;
        }

        Ok(cfg)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

/// Parse the `PORT` environment variable value.
///
/// Unset or empty values fall back to the configured port; a non-numeric
/// value is logged and ignored.
fn port_from_env(value: Option<String>) -> Option<u16> {
    let value = value?;
    if value.is_empty() {
        return None;
    }
    match value.parse::<u16>() {
        Ok(port) => Some(port),
        Err(_) => {
            logger::log_warning(&format!(
                "Invalid PORT value '{value}', using configured port"
            ));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_unset_or_empty() {
        assert_eq!(port_from_env(None), None);
        assert_eq!(port_from_env(Some(String::new())), None);
    }

    #[test]
    fn test_port_valid() {
        assert_eq!(port_from_env(Some("3000".to_string())), Some(3000));
        assert_eq!(port_from_env(Some("8080".to_string())), Some(8080));
    }

    #[test]
    fn test_port_invalid() {
        assert_eq!(port_from_env(Some("not-a-port".to_string())), None);
        assert_eq!(port_from_env(Some("99999".to_string())), None);
    }

    #[test]
    fn test_default_config() {
        let cfg = Config::load_from("nonexistent-config").expect("defaults should load");
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.logging.level, "info");
        assert!(cfg.logging.access_log);
        assert_eq!(cfg.http.max_body_size, 65_536);
        assert_eq!(cfg.site.page, "static/index.html");
    }
}
