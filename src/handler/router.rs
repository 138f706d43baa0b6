//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation, then a two-way
//! match on the request target (`/` serves the control panel, anything else is a command).

use crate::config::AppState;
use crate::handler::{command, panel};
use crate::http;
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Main entry point for HTTP request handling
///
/// The request body is never read, so any body type is accepted.
pub async fn handle_request<B>(
    req: Request<B>,
    peer_addr: SocketAddr,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();

    let (response, command) = route_request(&req, &state).await;

    if state.access_log_enabled() {
        let mut entry = access_entry(&req, peer_addr, &response, started);
        entry.command = command.map(ToString::to_string);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Dispatch on the raw request target (path plus query, as received).
///
/// Only an exact `/` is the panel; `/?x=1` forwards `?x=1`. Returns the
/// forwarded token alongside the response.
async fn route_request<'r, B>(
    req: &'r Request<B>,
    state: &Arc<AppState>,
) -> (Response<Full<Bytes>>, Option<&'r str>) {
    if *req.method() != Method::GET {
        logger::log_warning(&format!("Method not implemented: {}", req.method()));
        return (http::build_501_response(req.method()), None);
    }

    let target = req.uri().path_and_query().map_or("/", |pq| pq.as_str());
    if target == "/" {
        return (http::build_html_response(panel::CONTROL_PANEL_HTML), None);
    }

    match command::command_token(target) {
        Some(token) => {
            command::dispatch(token, state).await;
            (http::build_ack_response(), Some(token))
        }
        None => {
            logger::log_warning(&format!("No command in request target '{target}'"));
            (http::build_400_response("empty command"), None)
        }
    }
}

fn access_entry<B>(
    req: &Request<B>,
    peer_addr: SocketAddr,
    response: &Response<Full<Bytes>>,
    started: Instant,
) -> AccessLogEntry {
    let mut entry = AccessLogEntry::new(
        peer_addr.ip().to_string(),
        req.method().to_string(),
        req.uri().path().to_string(),
    );
    entry.query = req.uri().query().map(ToString::to_string);
    entry.http_version = match req.version() {
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        _ => "1.1",
    }
    .to_string();
    entry.status = response.status().as_u16();
    entry.body_bytes = response
        .body()
        .size_hint()
        .exact()
        .and_then(|n| usize::try_from(n).ok())
        .unwrap_or(0);
    entry.referer = header_value(req, "referer");
    entry.user_agent = header_value(req, "user-agent");
    entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
    entry
}

fn header_value<B>(req: &Request<B>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}
