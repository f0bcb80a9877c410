//! HTTP protocol layer module
//!
//! Response builders and MIME detection, decoupled from business logic.

pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_404_response, build_405_response, build_413_response, build_500_response,
    build_bad_request_response, build_page_response, build_preflight_response, json_response,
};
