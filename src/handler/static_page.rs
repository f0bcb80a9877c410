//! Static page module
//!
//! Serves the single landing page file for every non-API route.

use std::io::ErrorKind;
use std::path::Path;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use tokio::fs;

use crate::http::{self, mime};
use crate::logger;

/// Serve the configured landing page regardless of request path
pub async fn serve_page(page_path: &str) -> Response<Full<Bytes>> {
    match fs::read(page_path).await {
        Ok(content) => {
            let content_type =
                mime::get_content_type(Path::new(page_path).extension().and_then(|e| e.to_str()));
            http::build_page_response(content, content_type)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            logger::log_warning(&format!("Landing page not found: '{page_path}'"));
            http::build_404_response()
        }
        Err(e) => {
            logger::log_error(&format!("Failed to read landing page '{page_path}': {e}"));
            http::build_500_response()
        }
    }
}
