//! Logger module
//!
//! Timestamped logging helpers for the server: lifecycle lines, access
//! logging, and error/warning output. Info goes to stdout, warnings and
//! errors to stderr.

use std::net::SocketAddr;

use chrono::Local;
use hyper::Method;

use crate::config::Config;

/// Write to info/access log
fn write_info(message: &str) {
    println!("[{}] {message}", timestamp());
}

/// Write to error log
fn write_error(message: &str) {
    eprintln!("[{}] {message}", timestamp());
}

fn timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    write_info("======================================");
    write_info("Contact server started successfully");
    write_info(&format!("Listening on: http://{addr}"));
    write_info(&format!("Log level: {}", config.logging.level));
    write_info(&format!("Landing page: {}", config.site.page));
    if let Some(workers) = config.server.workers {
        write_info(&format!("Worker threads: {workers}"));
    }
    write_info("======================================");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    write_info(&format!("[Connection] Accepted from: {peer_addr}"));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_request(method: &Method, path: &str) {
    write_info(&format!("[Request] {method} {path}"));
}

/// Log a received contact-form submission
pub fn log_submission(name: &str, email: &str, message: &str) {
    write_info(&format!(
        "[Contact] New submission: {name}, {email}, {message}"
    ));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}
