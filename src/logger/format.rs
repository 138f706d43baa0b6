//! Access log format module
//!
//! Two formats are supported:
//! - `combined`: Apache/Nginx combined line with the forwarded command appended
//! - `json`: one JSON object per request
//!
//! Any other value falls back to `combined`.

use chrono::{DateTime, Local};

/// One served request, as written to the access log
#[derive(Debug, Clone)]
pub struct AccessLogEntry {
    pub remote_addr: String,
    pub time: DateTime<Local>,
    pub method: String,
    pub path: String,
    /// Query string without the leading `?`
    pub query: Option<String>,
    pub http_version: String,
    pub status: u16,
    pub body_bytes: usize,
    pub referer: Option<String>,
    pub user_agent: Option<String>,
    /// Token handed to the IR blaster, `None` for the panel and rejected requests
    pub command: Option<String>,
    pub request_time_us: u64,
}

impl AccessLogEntry {
    /// Entry stamped with the current local time, status 200 and nothing forwarded
    pub fn new(remote_addr: String, method: String, path: String) -> Self {
        Self {
            remote_addr,
            time: Local::now(),
            method,
            path,
            query: None,
            http_version: "1.1".to_string(),
            status: 200,
            body_bytes: 0,
            referer: None,
            user_agent: None,
            command: None,
            request_time_us: 0,
        }
    }

    pub fn format(&self, format: &str) -> String {
        if format == "json" {
            self.format_json()
        } else {
            self.format_combined()
        }
    }

    /// `$remote_addr - - [$time_local] "$request" $status $bytes "$referer" "$agent" "$command"`
    fn format_combined(&self) -> String {
        format!(
            "{} - - [{}] \"{}\" {} {} \"{}\" \"{}\" \"{}\"",
            self.remote_addr,
            self.time.format("%d/%b/%Y:%H:%M:%S %z"),
            self.request_line(),
            self.status,
            self.body_bytes,
            self.referer.as_deref().unwrap_or("-"),
            self.user_agent.as_deref().unwrap_or("-"),
            self.command.as_deref().unwrap_or("-"),
        )
    }

    fn format_json(&self) -> String {
        serde_json::json!({
            "remote_addr": self.remote_addr,
            "time": self.time.to_rfc3339(),
            "method": self.method,
            "path": self.path,
            "query": self.query,
            "http_version": self.http_version,
            "status": self.status,
            "body_bytes": self.body_bytes,
            "referer": self.referer,
            "user_agent": self.user_agent,
            "command": self.command,
            "request_time_us": self.request_time_us,
        })
        .to_string()
    }

    fn request_line(&self) -> String {
        match &self.query {
            Some(q) => format!("{} {}?{q} HTTP/{}", self.method, self.path, self.http_version),
            None => format!("{} {} HTTP/{}", self.method, self.path, self.http_version),
        }
    }
}
