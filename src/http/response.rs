//! HTTP response building module
//!
//! Provides builders for the few responses the command server sends.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Content type sent with both the control panel and command acknowledgements
pub const CONTENT_TYPE_HTML: &str = "text/html";

/// Both responses must be re-fetched on every tap
pub const CACHE_CONTROL: &str = "no-cache";

/// Acknowledgement body for every forwarded command
pub const ACK_BODY: &str = "OK";

/// Build the control panel response
pub fn build_html_response(content: &'static str) -> Response<Full<Bytes>> {
    build_uncached_response(Bytes::from_static(content.as_bytes()), "HTML")
}

/// Build the `OK` acknowledgement sent after a command is dispatched
pub fn build_ack_response() -> Response<Full<Bytes>> {
    build_uncached_response(Bytes::from_static(ACK_BODY.as_bytes()), "200")
}

fn build_uncached_response(body: Bytes, label: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(200)
        .header("Content-Type", CONTENT_TYPE_HTML)
        .header("Cache-Control", CACHE_CONTROL)
        .header("Content-Length", body.len())
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error(label, &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 400 Bad Request response
pub fn build_400_response(reason: &str) -> Response<Full<Bytes>> {
    let body = format!("400 Bad Request: {reason}");
    Response::builder()
        .status(400)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from(body)))
        .unwrap_or_else(|e| {
            log_build_error("400", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 501 Not Implemented response for any method other than GET
pub fn build_501_response(method: &hyper::Method) -> Response<Full<Bytes>> {
    let body = format!("501 Unsupported method ('{method}')");
    Response::builder()
        .status(501)
        .header("Content-Type", "text/plain")
        .header("Allow", "GET")
        .body(Full::new(Bytes::from(body)))
        .unwrap_or_else(|e| {
            log_build_error("501", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
