//! LIRC `irsend` subprocess transmitter

use super::{IrCommand, IrError, IrTransmitter};
use async_trait::async_trait;
use tokio::process::Command;

/// Spawns the configured program and waits for it to exit.
///
/// Standard streams are inherited from the server; no timeout is applied.
#[derive(Debug, Default, Clone, Copy)]
pub struct IrSend;

#[async_trait]
impl IrTransmitter for IrSend {
    async fn transmit(&self, command: &IrCommand) -> Result<(), IrError> {
        let status = Command::new(&command.program)
            .args(command.args())
            .status()
            .await
            .map_err(IrError::Spawn)?;

        if status.success() {
            Ok(())
        } else {
            Err(IrError::Exit {
                code: status.code(),
            })
        }
    }

    fn name(&self) -> &'static str {
        "irsend"
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::config::IrConfig;

    fn command_for(program: &str) -> IrCommand {
        let ir = IrConfig {
            program: program.to_string(),
            ..IrConfig::default()
        };
        IrCommand::new(&ir, "POWER_OFF")
    }

    #[tokio::test]
    async fn test_successful_exit() {
        let result = IrSend.transmit(&command_for("true")).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_nonzero_exit() {
        let result = IrSend.transmit(&command_for("false")).await;
        assert!(matches!(result, Err(IrError::Exit { code: Some(1) })));
    }

    #[tokio::test]
    async fn test_missing_binary() {
        let result = IrSend
            .transmit(&command_for("/nonexistent/aircon-pi-irsend"))
            .await;
        assert!(matches!(result, Err(IrError::Spawn(_))));
    }
}
