//! HTTP response builders.
//!
//! One builder per status the server can produce. Builder failures degrade
//! to an empty response with an error log line instead of panicking.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Exact status payload. External monitors match on these bytes, so the
/// literal (spacing and the `server` value included) must not change.
pub const STATUS_PAYLOAD: &str = r#"{"status": "online", "server": "python"}"#;

/// Build the `/api/status` response.
pub fn status_payload(is_head: bool) -> Response<Full<Bytes>> {
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from_static(STATUS_PAYLOAD.as_bytes())
    };

    Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .header("Content-Length", STATUS_PAYLOAD.len())
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("status", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build a 302 redirect. The body stays empty and no content headers are
/// attached; the client only needs `Location`.
pub fn redirect(target: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(302)
        .header("Location", target)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("302", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build a 404 Not Found response.
pub fn not_found() -> Response<Full<Bytes>> {
    Response::builder()
        .status(404)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("404 Not Found")))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from("404 Not Found")))
        })
}

/// Build a 405 Method Not Allowed response.
pub fn method_not_allowed() -> Response<Full<Bytes>> {
    Response::builder()
        .status(405)
        .header("Content-Type", "text/plain")
        .header("Allow", "GET, HEAD, OPTIONS")
        .body(Full::new(Bytes::from("405 Method Not Allowed")))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(Full::new(Bytes::from("405 Method Not Allowed")))
        })
}

/// Build an OPTIONS response.
pub fn options() -> Response<Full<Bytes>> {
    Response::builder()
        .status(204)
        .header("Allow", "GET, HEAD, OPTIONS")
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("OPTIONS", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build a 200 response carrying a file's bytes.
pub fn file_response(
    content: Vec<u8>,
    content_type: &'static str,
    etag: &str,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let content_length = content.len();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(content)
    };

    Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .header("ETag", etag)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build a 304 Not Modified response.
pub fn not_modified(etag: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(304)
        .header("ETag", etag)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("304", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn status_payload_is_the_exact_literal() {
        let response = status_payload(false);
        assert_eq!(response.status(), 200);
        assert_eq!(
            response.headers().get("Content-Type").unwrap(),
            "application/json"
        );
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], br#"{"status": "online", "server": "python"}"#);
    }

    #[tokio::test]
    async fn head_status_advertises_full_length_with_empty_body() {
        let response = status_payload(true);
        assert_eq!(response.status(), 200);
        assert_eq!(
            response.headers().get("Content-Length").unwrap(),
            &STATUS_PAYLOAD.len().to_string()
        );
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert!(body.is_empty());
    }

    #[test]
    fn status_payload_parses_as_json() {
        let value: serde_json::Value = serde_json::from_str(STATUS_PAYLOAD).unwrap();
        assert_eq!(value["status"], "online");
        assert_eq!(value["server"], "python");
    }

    #[tokio::test]
    async fn redirect_carries_only_location() {
        let response = redirect("/login-central-regulacao.html");
        assert_eq!(response.status(), 302);
        assert_eq!(
            response.headers().get("Location").unwrap(),
            "/login-central-regulacao.html"
        );
        assert!(response.headers().get("Content-Type").is_none());
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn head_file_response_has_headers_but_no_body() {
        let etag = "\"abc\"";
        let response = file_response(b"body{}".to_vec(), "text/css", etag, true);
        assert_eq!(response.status(), 200);
        assert_eq!(response.headers().get("Content-Type").unwrap(), "text/css");
        assert_eq!(response.headers().get("Content-Length").unwrap(), "6");
        assert_eq!(response.headers().get("ETag").unwrap(), etag);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert!(body.is_empty());
    }

    #[test]
    fn not_found_status() {
        assert_eq!(not_found().status(), 404);
        assert_eq!(method_not_allowed().status(), 405);
        assert_eq!(options().status(), 204);
    }
}
