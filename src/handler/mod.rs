//! Request handler module
//!
//! Serves the control panel and forwards every other path to the IR blaster.

pub mod command;
pub mod panel;
pub mod router;

// Re-export main entry point
pub use router::handle_request;
