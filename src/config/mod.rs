// Configuration module entry point
// Manages application configuration and runtime state

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{Config, IrConfig};

/// Environment variable prefix, e.g. `AIRCON__SERVER__PORT=9000`
const ENV_PREFIX: &str = "AIRCON";

impl Config {
    /// Load configuration from specified file path (without extension)
    /// Default config file is "config.toml" when no path specified
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let defaults = IrConfig::default();

        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8081)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("ir.program", defaults.program)?
            .set_default("ir.verb", defaults.verb)?
            .set_default("ir.remote", defaults.remote)?
            .set_default("ir.wait_for_exit", defaults.wait_for_exit)?
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
    fn test_defaults_match_fixed_contract() {
        let cfg = Config::load_from("does-not-exist").expect("defaults load");
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 8081);
        assert_eq!(cfg.ir, IrConfig::default());
        assert_eq!(cfg.ir.program, "irsend");
        assert_eq!(cfg.ir.verb, "SEND_ONCE");
        assert_eq!(cfg.ir.remote, "LG_AC");
        assert!(cfg.ir.wait_for_exit);
        assert!(cfg.logging.access_log);
        assert_eq!(cfg.logging.access_log_format, "combined");
        assert!(cfg.performance.max_connections.is_none());
    }

    #[test]
    fn test_socket_addr() {
        let cfg = Config::load_from("does-not-exist").expect("defaults load");
        let addr = cfg.get_socket_addr().expect("valid address");
        assert_eq!(addr.to_string(), "0.0.0.0:8081");
    }

    #[test]
    fn test_invalid_host_is_reported() {
        let mut cfg = Config::load_from("does-not-exist").expect("defaults load");
        cfg.server.host = "not a host".to_string();
        let err = cfg.get_socket_addr().unwrap_err();
        assert!(err.starts_with("Invalid address"));
    }
}
