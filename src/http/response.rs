//! HTTP response building module
//!
//! Provides builders for the responses the server sends. Every response
//! carries permissive CORS headers so the landing page and the API can be
//! called from any origin.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

use crate::logger;

type Builder = hyper::http::response::Builder;

/// Attach CORS headers for the static responder (any path)
fn static_cors(builder: Builder) -> Builder {
    builder
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "GET, POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
}

/// Attach CORS headers for the contact API
fn api_cors(builder: Builder) -> Builder {
    builder
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
}

/// Build 200 OK response with the landing page contents
pub fn build_page_response(content: Vec<u8>, content_type: &str) -> Response<Full<Bytes>> {
    let content_length = content.len();

    static_cors(Response::builder())
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .body(Full::new(Bytes::from(content)))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 404 Not Found response (landing page file missing)
pub fn build_404_response() -> Response<Full<Bytes>> {
    static_cors(Response::builder())
        .status(404)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("404 Not Found")))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from("404 Not Found")))
        })
}

/// Build 500 Internal Server Error response (landing page unreadable)
pub fn build_500_response() -> Response<Full<Bytes>> {
    static_cors(Response::builder())
        .status(500)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("500 Internal Server Error")))
        .unwrap_or_else(|e| {
            log_build_error("500", &e);
            Response::new(Full::new(Bytes::from("500 Internal Server Error")))
        })
}

/// Build 413 Payload Too Large response
pub fn build_413_response() -> Response<Full<Bytes>> {
    static_cors(Response::builder())
        .status(413)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("413 Payload Too Large")))
        .unwrap_or_else(|e| {
            log_build_error("413", &e);
            Response::new(Full::new(Bytes::from("413 Payload Too Large")))
        })
}

/// Build 200 OK preflight response (CORS OPTIONS request, empty body)
pub fn build_preflight_response() -> Response<Full<Bytes>> {
    api_cors(Response::builder())
        .status(200)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("OPTIONS", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 405 Method Not Allowed response
pub fn build_405_response(message: &str) -> Response<Full<Bytes>> {
    api_cors(Response::builder())
        .status(405)
        .header("Content-Type", "text/plain; charset=utf-8")
        .header("Allow", "POST, OPTIONS")
        .body(Full::new(Bytes::from(message.to_string())))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 400 Bad Request response with a plain-text body
pub fn build_bad_request_response(message: &str) -> Response<Full<Bytes>> {
    api_cors(Response::builder())
        .status(400)
        .header("Content-Type", "text/plain; charset=utf-8")
        .body(Full::new(Bytes::from(message.to_string())))
        .unwrap_or_else(|e| {
            log_build_error("400", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build JSON response for the contact API
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response<Full<Bytes>> {
    let json = match serde_json::to_string(body) {
        Ok(j) => j,
        Err(e) => {
            logger::log_error(&format!("Failed to serialize response: {e}"));
            return api_cors(Response::builder())
                .status(StatusCode::INTERNAL_SERVER_ERROR)
                .header("Content-Type", "application/json")
                .body(Full::new(Bytes::from(
                    r#"{"success":false,"message":"Internal server error"}"#,
                )))
                .unwrap_or_else(|_| Response::new(Full::new(Bytes::from("Error"))));
        }
    };

    api_cors(Response::builder())
        .status(status)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(json)))
        .unwrap_or_else(|e| {
            log_build_error("JSON", &e);
            Response::new(Full::new(Bytes::from("Error")))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    fn header<'a>(resp: &'a Response<Full<Bytes>>, name: &str) -> Option<&'a str> {
        resp.headers().get(name).and_then(|v| v.to_str().ok())
    }

    #[test]
    fn test_every_api_response_has_cors_origin() {
        let responses = vec![
            build_preflight_response(),
            build_405_response("nope"),
            build_bad_request_response("bad"),
            json_response(StatusCode::OK, &serde_json::json!({"success": true})),
        ];
        for resp in &responses {
            assert_eq!(header(resp, "Access-Control-Allow-Origin"), Some("*"));
            assert_eq!(
                header(resp, "Access-Control-Allow-Methods"),
                Some("POST, OPTIONS")
            );
            assert_eq!(
                header(resp, "Access-Control-Allow-Headers"),
                Some("Content-Type")
            );
        }
    }

    #[test]
    fn test_static_responses_have_cors() {
        let responses = vec![
            build_page_response(b"<html></html>".to_vec(), "text/html; charset=utf-8"),
            build_404_response(),
            build_500_response(),
            build_413_response(),
        ];
        for resp in &responses {
            assert_eq!(header(resp, "Access-Control-Allow-Origin"), Some("*"));
            assert_eq!(
                header(resp, "Access-Control-Allow-Methods"),
                Some("GET, POST, OPTIONS")
            );
        }
    }

    #[tokio::test]
    async fn test_preflight_is_empty_200() {
        let resp = build_preflight_response();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert!(body.is_empty());
    }

    #[test]
    fn test_405_response() {
        let resp = build_405_response("Метод не поддерживается");
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(header(&resp, "Allow"), Some("POST, OPTIONS"));
        assert_eq!(
            header(&resp, "Content-Type"),
            Some("text/plain; charset=utf-8")
        );
    }

    #[tokio::test]
    async fn test_json_response_body() {
        let resp = json_response(
            StatusCode::OK,
            &serde_json::json!({"success": true, "message": "ok"}),
        );
        assert_eq!(header(&resp, "Content-Type"), Some("application/json"));
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["message"], "ok");
    }

    #[test]
    fn test_page_response_content_type() {
        let resp = build_page_response(b"hello".to_vec(), "text/html; charset=utf-8");
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            header(&resp, "Content-Type"),
            Some("text/html; charset=utf-8")
        );
        assert_eq!(header(&resp, "Content-Length"), Some("5"));
    }
}
