//! Request handler module
//!
//! Responsible for request routing dispatch and business logic processing:
//! the contact-form API and the static landing page.

pub mod contact;
pub mod router;
pub mod static_page;

// Re-export main entry point
pub use router::handle_request;
