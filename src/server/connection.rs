// Connection handling module
// Accepts TCP connections and serves them over HTTP/1.1

use std::sync::Arc;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use tokio::net::{TcpListener, TcpStream};

use crate::config::Config;
use crate::handler;
use crate::logger;

/// Accept connections forever, spawning a task per connection.
///
/// Accept errors are logged and the loop continues; only the caller
/// terminating the future stops the server.
pub async fn accept_loop(
    listener: TcpListener,
    state: Arc<Config>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        match listener.accept().await {
            Ok((stream, peer_addr)) => {
                if state.logging.access_log {
                    logger::log_connection_accepted(&peer_addr);
                }
                handle_connection(stream, Arc::clone(&state));
            }
            Err(e) => {
                logger::log_error(&format!("Failed to accept connection: {e}"));
            }
        }
    }
}

/// Handle a single connection in a spawned task.
///
/// Wraps the TCP stream in `TokioIo`, serves it as an HTTP/1.1 connection
/// with keep-alive, and dispatches every request to the router. Each
/// connection is fully independent; a failure here never affects others.
fn handle_connection(stream: TcpStream, state: Arc<Config>) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let conn = http1::Builder::new().keep_alive(true).serve_connection(
            io,
            service_fn(move |req| {
                let state_clone = Arc::clone(&state);
                async move { handler::handle_request(req, state_clone).await }
            }),
        );

        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
    });
}
