//! HTTP protocol layer module
//!
//! Response builders, decoupled from request dispatch.

pub mod response;

// Re-export commonly used types
pub use response::{
    build_400_response, build_501_response, build_ack_response, build_html_response,
};
