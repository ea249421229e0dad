// Configuration module entry point
// Loads layered configuration and holds the shared runtime state

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{Config, HealthConfig, HttpConfig};

/// Environment variable prefix, e.g. `UTILITY_API__SERVER__PORT=9000`
const ENV_PREFIX: &str = "UTILITY_API";

impl Config {
    /// Load configuration from specified file path (without extension)
    /// Default config file is "config.toml" when no path specified
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("http.server_name", "utility-api/0.1")?
            .set_default("http.enable_cors", false)?
            .set_default("http.max_body_size", 1_048_576)? // 1MB
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_defaults_without_file() {
        let cfg = Config::load_from("does/not/exist/config").unwrap();
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.logging.access_log_format, "combined");
        assert_eq!(cfg.performance.read_timeout, 30);
        assert_eq!(cfg.http.max_body_size, 1_048_576);
        assert!(cfg.health.enabled);
        assert_eq!(cfg.health.liveness_path, "/healthz");
    }

    #[test]
    fn test_socket_addr() {
        let mut cfg = Config::load_from("does/not/exist/config").unwrap();
        cfg.server.host = "0.0.0.0".to_string();
        cfg.server.port = 8081;
        assert_eq!(cfg.get_socket_addr().unwrap().port(), 8081);

        cfg.server.host = "not an address".to_string();
        assert!(cfg.get_socket_addr().is_err());
    }

    #[test]
    fn test_layering_env_over_file_over_defaults() {
        let base = std::env::temp_dir().join(format!("utility-api-layering-{}", std::process::id()));
        let file = base.with_extension("toml");
        std::fs::write(
            &file,
            "[server]\nhost = \"0.0.0.0\"\nport = 1\n\n\
             [http]\nserver_name = \"from-file\"\nenable_cors = true\n\n\
             [health]\nenabled = false\n",
        )
        .unwrap();

        std::env::set_var("UTILITY_API__SERVER__PORT", "9123");
        let loaded = Config::load_from(base.to_str().unwrap());
        std::env::remove_var("UTILITY_API__SERVER__PORT");
        std::fs::remove_file(&file).ok();
        let cfg = loaded.unwrap();

        // Environment beats the file
        assert_eq!(cfg.server.port, 9123);
        // File beats the defaults
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.http.server_name, "from-file");
        assert!(cfg.http.enable_cors);
        assert!(!cfg.health.enabled);
        // Omitted keys and sections keep their defaults
        assert_eq!(cfg.http.max_body_size, 1_048_576);
        assert_eq!(cfg.logging.level, "info");
        assert_eq!(cfg.performance.keep_alive_timeout, 75);
        assert_eq!(cfg.health.liveness_path, "/healthz");
    }

    #[test]
    fn test_connection_timeout_uses_larger_value() {
        let mut cfg = Config::load_from("does/not/exist/config").unwrap();
        cfg.performance.read_timeout = 5;
        cfg.performance.write_timeout = 12;
        assert_eq!(cfg.performance.connection_timeout().as_secs(), 12);
    }
}
