//! TCP liveness probe
//!
//! A probe is one bounded-time connect attempt, nothing more: no retries,
//! no backoff, and every failure kind (refused, timeout, resolution error)
//! collapses into "not alive". The probe never returns an error to its
//! caller, and the connection, if established, is closed immediately.

use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

/// Status line printed before the connect attempt
pub fn attempt_line(host: &str, port: u16) -> String {
    format!("Attempting to connect to {host} on port {port}")
}

/// Status line printed when the connection succeeds
pub fn connected_line(host: &str, port: u16) -> String {
    format!("Connected to {host} on port {port}")
}

/// Status line printed when the connection fails
pub fn failed_line(host: &str, port: u16, err: &str) -> String {
    format!("Connection to {host} on port {port} failed: {err}")
}

/// Check whether something is accepting TCP connections on `host:port`.
///
/// Performs a single connect attempt bounded by `timeout` and reports the
/// result on stdout. Returns `true` only if the connection was established;
/// any socket-level failure returns `false`.
pub fn is_alive(host: &str, port: u16, timeout: Duration) -> bool {
    println!("{}", attempt_line(host, port));
    tracing::debug!(host, port, ?timeout, "probing endpoint");

    // Resolution failure is just another way of being unreachable
    let addr = match (host, port).to_socket_addrs() {
        Ok(mut addrs) => match addrs.next() {
            Some(addr) => addr,
            None => {
                println!("{}", failed_line(host, port, "address resolved to nothing"));
                return false;
            }
        },
        Err(e) => {
            println!("{}", failed_line(host, port, &e.to_string()));
            return false;
        }
    };

    match TcpStream::connect_timeout(&addr, timeout) {
        Ok(stream) => {
            println!("{}", connected_line(host, port));
            // Close immediately; close errors are deliberately swallowed
            drop(stream);
            true
        }
        Err(e) => {
            println!("{}", failed_line(host, port, &e.to_string()));
            false
        }
    }
}
