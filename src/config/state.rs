// Application state module
// Shared per-process state handed to every connection

use std::sync::Arc;

use super::types::Config;
use crate::ir::IrTransmitter;

/// Application state
pub struct AppState {
    pub config: Config,
    pub transmitter: Arc<dyn IrTransmitter>,
}

impl AppState {
    pub fn new(config: &Config, transmitter: Arc<dyn IrTransmitter>) -> Self {
        Self {
            config: config.clone(),
            transmitter,
        }
    }

    pub const fn access_log_enabled(&self) -> bool {
        self.config.logging.access_log
    }
}
