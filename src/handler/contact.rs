//! Contact form handler module
//!
//! Handles `POST /api/contact`: decodes the JSON submission, validates
//! required fields, logs it, waits a fixed processing delay, and replies
//! with a JSON acknowledgement.

use std::time::Duration;

use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::{Method, Request, Response, StatusCode};
use serde::{Deserialize, Serialize};

use crate::http;
use crate::logger;

/// Fixed delay before acknowledging a valid submission
const PROCESSING_DELAY: Duration = Duration::from_secs(1);

const SUCCESS_MESSAGE: &str = "Сообщение успешно отправлено!";
const VALIDATION_MESSAGE: &str = "Все поля обязательны для заполнения";
const INVALID_BODY_MESSAGE: &str = "Неверный формат данных";
const METHOD_NOT_ALLOWED_MESSAGE: &str = "Метод не поддерживается";

/// Contact form submission
///
/// Absent fields decode to empty strings and are rejected by validation
/// rather than by the JSON parser.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// All three fields are required to be non-empty
    fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty() && !self.message.is_empty()
    }
}

/// API acknowledgement body
#[derive(Debug, Serialize)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
}

/// Handle a request to the contact API path
pub async fn handle_contact(req: Request<hyper::body::Incoming>) -> Response<Full<Bytes>> {
    let method = req.method().clone();
    match method {
        // CORS preflight: empty 200, no further processing
        Method::OPTIONS => http::build_preflight_response(),
        Method::POST => {
            let Ok(collected) = req.collect().await else {
                return http::build_bad_request_response(INVALID_BODY_MESSAGE);
            };
            process_submission(&collected.to_bytes()).await
        }
        method => {
            logger::log_warning(&format!("Method not allowed on contact API: {method}"));
            http::build_405_response(METHOD_NOT_ALLOWED_MESSAGE)
        }
    }
}

/// Parse, validate, log, delay, and acknowledge a submission body
async fn process_submission(body: &[u8]) -> Response<Full<Bytes>> {
    let form: ContactForm = match serde_json::from_slice(body) {
        Ok(f) => f,
        Err(_) => return http::build_bad_request_response(INVALID_BODY_MESSAGE),
    };

    if !form.is_complete() {
        return http::json_response(
            StatusCode::BAD_REQUEST,
            &ApiResponse {
                success: false,
                message: VALIDATION_MESSAGE.to_string(),
            },
        );
    }

    logger::log_submission(&form.name, &form.email, &form.message);

    // Simulated processing latency, success path only
    tokio::time::sleep(PROCESSING_DELAY).await;

    http::json_response(
        StatusCode::OK,
        &ApiResponse {
            success: true,
            message: SUCCESS_MESSAGE.to_string(),
        },
    )
}
