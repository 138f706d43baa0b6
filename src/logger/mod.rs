//! Logger module
//!
//! Provides logging utilities for the command server including:
//! - Server lifecycle logging
//! - Access logging with multiple formats
//! - IR dispatch diagnostics
//! - File-based logging support

mod format;
pub mod writer;

pub use format::AccessLogEntry;

use crate::config::Config;
use crate::ir::{IrCommand, IrError};
use std::net::SocketAddr;

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> std::io::Result<()> {
    writer::init(
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

/// Write to info/access log
fn write_info(message: &str) {
    match writer::get() {
        Some(w) => w.write_info(message),
        None => println!("{message}"),
    }
}

/// Write to error log
fn write_error(message: &str) {
    match writer::get() {
        Some(w) => w.write_error(message),
        None => eprintln!("{message}"),
    }
}

/// Write to access log specifically
fn write_access(message: &str) {
    match writer::get() {
        Some(w) => w.write_access(message),
        None => println!("{message}"),
    }
}

pub fn log_server_start(addr: &SocketAddr, config: &Config, transmitter: &str) {
    write_info("======================================");
    write_info("AirCon command server started");
    write_info(&format!("Listening on: http://{addr}"));
    write_info(&format!("Log level: {}", config.logging.level));
    write_info(&format!(
        "IR command: {} {} {} <token> (via {transmitter})",
        config.ir.program, config.ir.verb, config.ir.remote
    ));
    if !config.ir.wait_for_exit {
        write_info("IR dispatch: detached (responses do not wait for the blaster)");
    }
    if let Some(workers) = config.server.workers {
        write_info(&format!("Worker threads: {workers}"));
    }
    if let Some(ref path) = config.logging.access_log_file {
        write_info(&format!("Access log: {path}"));
    }
    if let Some(ref path) = config.logging.error_log_file {
        write_info(&format!("Error log: {path}"));
    }
    write_info("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    write_info(&format!("[Connection] Accepted from: {peer_addr}"));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    write_access(&entry.format(format));
}

/// Announce an IR invocation before it runs
pub fn log_command_dispatch(command: &IrCommand) {
    let line = format_dispatch(command);
    #[cfg(test)]
    DISPATCH_LINES.with(|lines| lines.borrow_mut().push(line.clone()));
    write_info(&line);
}

#[cfg(test)]
thread_local! {
    static DISPATCH_LINES: std::cell::RefCell<Vec<String>> =
        const { std::cell::RefCell::new(Vec::new()) };
}

/// Dispatch lines written so far on the current thread
#[cfg(test)]
pub fn dispatch_lines() -> Vec<String> {
    DISPATCH_LINES.with(|lines| lines.borrow().clone())
}

/// Report how an IR invocation ended. Failures never reach the client.
pub fn log_command_outcome(command: &IrCommand, result: &Result<(), IrError>) {
    if let Err(e) = result {
        log_warning(&format!("IR command '{}' failed: {e}", command.token));
    }
}

pub fn log_shutdown(reason: &str) {
    write_info(&format!("\n[Shutdown] {reason}, stopping server"));
}

pub fn log_shutdown_complete() {
    write_info("[Shutdown] Server stopped");
}

fn format_dispatch(command: &IrCommand) -> String {
    format!("executing {:?}", command.argv())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IrConfig;

    #[test]
    fn test_dispatch_line() {
        let cmd = IrCommand::new(&IrConfig::default(), "POWER_OFF");
        assert_eq!(
            format_dispatch(&cmd),
            r#"executing ["irsend", "SEND_ONCE", "LG_AC", "POWER_OFF"]"#
        );
    }
}
