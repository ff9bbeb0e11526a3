use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;

/// Application configuration and constants
pub struct Config {
    pub data_dir: Arc<PathBuf>,
    pub templates_dir: Arc<PathBuf>,
    pub port: u16,
    pub host: String,
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self {
            data_dir: Arc::new(PathBuf::from("data")),
            templates_dir: Arc::new(PathBuf::from("templates")),
            port: 8080,
            host: "0.0.0.0".to_string(),
        }
    }

    /// Create configuration with custom values
    pub fn with_custom(
        data_dir: PathBuf,
        templates_dir: PathBuf,
        port: Option<u16>,
        host: Option<String>,
    ) -> Self {
        Self {
            data_dir: Arc::new(data_dir),
            templates_dir: Arc::new(templates_dir),
            port: port.unwrap_or(8080),
            host: host.unwrap_or_else(|| "0.0.0.0".to_string()),
        }
    }

    /// Defaults overridden by `FABLE_DATA_DIR`, `FABLE_TEMPLATES_DIR`,
    /// `FABLE_HOST` and `FABLE_PORT`. An unparseable port falls back to
    /// the default rather than aborting startup.
    pub fn from_env() -> Self {
        let defaults = Self::new();
        let data_dir = std::env::var("FABLE_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| defaults.data_dir.as_ref().clone());
        let templates_dir = std::env::var("FABLE_TEMPLATES_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| defaults.templates_dir.as_ref().clone());
        let port = std::env::var("FABLE_PORT")
            .ok()
            .and_then(|p| p.parse().ok());
        let host = std::env::var("FABLE_HOST").ok();
        Self::with_custom(data_dir, templates_dir, port, host)
    }

    /// Get the socket address for binding
    pub fn socket_addr(&self) -> SocketAddr {
        let ip = self
            .host
            .parse()
            .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        SocketAddr::new(ip, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_data_layout() {
        let config = Config::new();
        assert_eq!(config.data_dir.as_ref(), &PathBuf::from("data"));
        assert_eq!(config.templates_dir.as_ref(), &PathBuf::from("templates"));
        assert_eq!(config.socket_addr().port(), 8080);
    }

    #[test]
    fn custom_values_override_defaults() {
        let config = Config::with_custom(
            PathBuf::from("/tmp/pages"),
            PathBuf::from("/tmp/tpl"),
            Some(9999),
            Some("127.0.0.1".to_string()),
        );
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:9999");
    }

    #[test]
    fn bad_host_falls_back_to_unspecified() {
        let config =
            Config::with_custom(PathBuf::from("d"), PathBuf::from("t"), None, Some("??".into()));
        assert_eq!(config.socket_addr().ip(), IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    }
}
