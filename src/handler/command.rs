//! Command dispatch module
//!
//! Extracts the command token from the request path and hands it to the IR transmitter.

use crate::config::AppState;
use crate::ir::IrCommand;
use crate::logger;
use std::sync::Arc;

/// First `/`-separated segment of the request target, exactly as received.
///
/// The query string is not stripped: `/POWER_OFF?x=1` yields `POWER_OFF?x=1`
/// and `/?x=1` yields `?x=1`. Returns `None` when the segment is empty (`//`)
/// or the target has no `/` at all (`*`).
pub fn command_token(target: &str) -> Option<&str> {
    target.split('/').nth(1).filter(|token| !token.is_empty())
}

/// Send `token` to the IR blaster.
///
/// The outcome is only logged. With `ir.wait_for_exit` the call returns after
/// the subprocess exits, otherwise the wait runs in a detached task.
pub async fn dispatch(token: &str, state: &Arc<AppState>) {
    let command = IrCommand::new(&state.config.ir, token);
    logger::log_command_dispatch(&command);

    if state.config.ir.wait_for_exit {
        let result = state.transmitter.transmit(&command).await;
        logger::log_command_outcome(&command, &result);
    } else {
        let transmitter = Arc::clone(&state.transmitter);
        tokio::spawn(async move {
            let result = transmitter.transmit(&command).await;
            logger::log_command_outcome(&command, &result);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_is_first_segment() {
        assert_eq!(command_token("/POWER_OFF"), Some("POWER_OFF"));
        assert_eq!(command_token("/ON_HEAT_F1_74_CLEAN/"), Some("ON_HEAT_F1_74_CLEAN"));
        assert_eq!(command_token("/a/b/c"), Some("a"));
    }

    #[test]
    fn test_token_is_not_decoded() {
        assert_eq!(command_token("/POWER%20OFF"), Some("POWER%20OFF"));
        assert_eq!(command_token("/ x"), Some(" x"));
    }

    #[test]
    fn test_query_is_part_of_token() {
        assert_eq!(command_token("/POWER_OFF?x=1"), Some("POWER_OFF?x=1"));
        assert_eq!(command_token("/?x=1"), Some("?x=1"));
        assert_eq!(command_token("/a?b=/c"), Some("a?b="));
    }

    #[test]
    fn test_empty_segment() {
        assert_eq!(command_token("//"), None);
        assert_eq!(command_token("//POWER_OFF"), None);
        assert_eq!(command_token("*"), None);
        assert_eq!(command_token(""), None);
    }
}
