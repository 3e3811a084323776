//! Logger module
//!
//! Provides logging utilities for the HTTP server including:
//! - Server lifecycle logging
//! - Timestamped access logging
//! - Error and warning logging

use crate::config::Config;
use chrono::Local;
use std::net::SocketAddr;

/// Write to info/access log
fn write_info(message: &str) {
    println!("{message}");
}

/// Write to error log
fn write_error(message: &str) {
    eprintln!("{message}");
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    write_info("======================================");
    write_info("Async server started successfully");
    write_info(&format!("Listening on: http://{addr}"));
    write_info(&format!("Log level: {}", config.logging.level));
    if let Some(workers) = config.server.workers {
        write_info(&format!("Worker threads: {workers}"));
    }
    if config.http.allowed_origins.is_empty() {
        write_info("CORS: no origins allowed");
    } else {
        write_info(&format!(
            "CORS allowed origins: {}",
            config.http.allowed_origins
        ));
    }
    write_info("Using Tokio runtime for concurrency");
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

/// Log a request line in access-log format
pub fn log_request(method: &hyper::Method, path: &str) {
    write_info(&format!(
        "[{}] \"{method} {path}\"",
        Local::now().format("%d/%b/%Y:%H:%M:%S %z")
    ));
}

/// Log the response status for an access-logged request
pub fn log_response(status: u16) {
    write_info(&format!("[Response] {status}"));
}
