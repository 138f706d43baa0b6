// Configuration types module
// Defines all configuration-related data structures

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    pub ir: IrConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    /// Shown in the startup banner; no output is filtered by it
    pub level: String,
    pub access_log: bool,
    /// Access log format (`combined` or `json`, anything else is `combined`)
    #[serde(default = "default_access_log_format")]
    pub access_log_format: String,
    /// Access log file path (optional, stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

#[allow(clippy::missing_const_for_fn)]
fn default_access_log_format() -> String {
    "combined".to_string()
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
    pub max_connections: Option<u64>,
}

/// IR blaster invocation: `<program> <verb> <remote> <token>`
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct IrConfig {
    /// External transmitter binary (LIRC `irsend`)
    pub program: String,
    /// Send verb, e.g. `SEND_ONCE`
    pub verb: String,
    /// LIRC remote name of the air conditioner
    pub remote: String,
    /// Await the subprocess before answering the request
    #[serde(default = "default_wait_for_exit")]
    pub wait_for_exit: bool,
}

#[allow(clippy::missing_const_for_fn)]
fn default_wait_for_exit() -> bool {
    true
}

impl Default for IrConfig {
    fn default() -> Self {
        Self {
            program: "irsend".to_string(),
            verb: "SEND_ONCE".to_string(),
            remote: "LG_AC".to_string(),
            wait_for_exit: default_wait_for_exit(),
        }
    }
}
