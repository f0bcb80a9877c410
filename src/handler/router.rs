//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: the contact API path goes to
//! the contact handler, every other path serves the landing page.

use std::convert::Infallible;
use std::sync::Arc;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};

use crate::config::Config;
use crate::handler::{contact, static_page};
use crate::http;
use crate::logger;

/// Path of the contact-form API endpoint
pub const CONTACT_PATH: &str = "/api/contact";

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<Config>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let path = req.uri().path().to_string();

    if state.logging.access_log {
        logger::log_request(req.method(), &path);
    }

    // Reject submissions declaring an oversized body before reading anything.
    // Preflight and page requests carry no body worth checking.
    if req.method() == Method::POST {
        let content_length = req
            .headers()
            .get("content-length")
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string);
        if let Some(resp) = check_body_size(content_length.as_deref(), state.http.max_body_size) {
            return Ok(resp);
        }
    }

    let response = if path == CONTACT_PATH {
        contact::handle_contact(req).await
    } else {
        static_page::serve_page(&state.site.page).await
    };

    Ok(response)
}

/// Validate the Content-Length header and return 413 if the limit is exceeded
fn check_body_size(content_length: Option<&str>, max_body_size: u64) -> Option<Response<Full<Bytes>>> {
    let size_str = content_length?;
    match size_str.parse::<u64>() {
        Ok(size) if size > max_body_size => {
            logger::log_warning(&format!(
                "Request body too large: {size} bytes (max: {max_body_size})"
            ));
            Some(http::build_413_response())
        }
        Err(_) => {
            logger::log_warning(&format!(
                "Invalid Content-Length value: '{size_str}', skipping size check"
            ));
            None
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_content_length_passes() {
        assert!(check_body_size(None, 1024).is_none());
    }

    #[test]
    fn test_within_limit_passes() {
        assert!(check_body_size(Some("512"), 1024).is_none());
        assert!(check_body_size(Some("1024"), 1024).is_none());
    }

    #[test]
    fn test_over_limit_rejected() {
        let resp = check_body_size(Some("2048"), 1024).expect("should reject");
        assert_eq!(resp.status(), 413);
    }

    #[test]
    fn test_invalid_content_length_skips_check() {
        assert!(check_body_size(Some("abc"), 1024).is_none());
    }
}
