//! IR transmitter module
//!
//! Turns a command token into an invocation of the external IR blaster
//! (`irsend SEND_ONCE LG_AC <token>` by default).

mod irsend;

pub use irsend::IrSend;

use crate::config::IrConfig;
use async_trait::async_trait;
use std::fmt;

/// One invocation of the IR blaster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IrCommand {
    pub program: String,
    pub verb: String,
    pub remote: String,
    /// First path segment, forwarded verbatim
    pub token: String,
}

impl IrCommand {
    pub fn new(ir: &IrConfig, token: &str) -> Self {
        Self {
            program: ir.program.clone(),
            verb: ir.verb.clone(),
            remote: ir.remote.clone(),
            token: token.to_string(),
        }
    }

    /// Positional arguments passed to the program
    pub fn args(&self) -> [&str; 3] {
        [self.verb.as_str(), self.remote.as_str(), self.token.as_str()]
    }

    /// Full command line, program first
    pub fn argv(&self) -> Vec<&str> {
        let mut argv = Vec::with_capacity(4);
        argv.push(self.program.as_str());
        argv.extend(self.args());
        argv
    }
}

/// Failure of a single transmission
#[derive(Debug)]
pub enum IrError {
    /// The program could not be started (missing binary, permissions)
    Spawn(std::io::Error),
    /// The program ran and exited unsuccessfully; `None` when killed by a signal
    Exit { code: Option<i32> },
}

impl fmt::Display for IrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spawn(e) => write!(f, "failed to spawn: {e}"),
            Self::Exit { code: Some(code) } => write!(f, "exited with status {code}"),
            Self::Exit { code: None } => write!(f, "terminated by signal"),
        }
    }
}

impl std::error::Error for IrError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Spawn(e) => Some(e),
            Self::Exit { .. } => None,
        }
    }
}

/// Sends IR commands to the air conditioner
#[async_trait]
pub trait IrTransmitter: Send + Sync {
    /// Run one transmission to completion
    async fn transmit(&self, command: &IrCommand) -> Result<(), IrError>;

    /// Human-readable name for this transmitter
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_line() {
        let cmd = IrCommand::new(&IrConfig::default(), "ON_COOL_F1_70_CLEAN");
        assert_eq!(cmd.args(), ["SEND_ONCE", "LG_AC", "ON_COOL_F1_70_CLEAN"]);
        assert_eq!(
            cmd.argv(),
            vec!["irsend", "SEND_ONCE", "LG_AC", "ON_COOL_F1_70_CLEAN"]
        );
    }

    #[test]
    fn test_token_is_not_rewritten() {
        let cmd = IrCommand::new(&IrConfig::default(), "a%20b ");
        assert_eq!(cmd.token, "a%20b ");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            IrError::Exit { code: Some(1) }.to_string(),
            "exited with status 1"
        );
        assert_eq!(
            IrError::Exit { code: None }.to_string(),
            "terminated by signal"
        );
        let spawn = IrError::Spawn(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no such file",
        ));
        assert!(spawn.to_string().starts_with("failed to spawn"));
    }
}
