//! HTTP response building module
//!
//! Builders for the handful of status codes this server emits. No caching
//! headers: every response is computed fresh so repeated requests are
//! byte-identical.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use crate::config::HttpConfig;

/// Build 200 OK response for a served file
///
/// `HEAD` requests get the full headers (including `Content-Length`) with an
/// empty body.
pub fn build_file_response(
    data: Vec<u8>,
    content_type: &str,
    http_config: &HttpConfig,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let content_length = data.len();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(data)
    };

    let mut builder = Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .header("Server", &http_config.server_name);

    if http_config.enable_cors {
        builder = builder.header("Access-Control-Allow-Origin", "*");
    }

    builder.body(Full::new(body)).unwrap_or_else(|e| {
        log_build_error("200", &e);
        Response::new(Full::new(Bytes::new()))
    })
}

/// Build 403 Forbidden response
pub fn build_403_response() -> Response<Full<Bytes>> {
    plain_response(403, "403 Forbidden")
}

/// Build 404 Not Found response
pub fn build_404_response() -> Response<Full<Bytes>> {
    plain_response(404, "404 Not Found")
}

/// Build 405 Method Not Allowed response
pub fn build_405_response() -> Response<Full<Bytes>> {
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

/// Build 413 Payload Too Large response
pub fn build_413_response() -> Response<Full<Bytes>> {
    plain_response(413, "413 Payload Too Large")
}

/// Build 500 Internal Server Error response
pub fn build_500_response() -> Response<Full<Bytes>> {
    plain_response(500, "500 Internal Server Error")
}

/// Build OPTIONS response (preflight request)
pub fn build_options_response(enable_cors: bool) -> Response<Full<Bytes>> {
    let mut builder = Response::builder()
        .status(204)
        .header("Allow", "GET, HEAD, OPTIONS");

    if enable_cors {
        builder = builder
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "GET, HEAD, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .header("Access-Control-Max-Age", "86400");
    }

    builder.body(Full::new(Bytes::new())).unwrap_or_else(|e| {
        log_build_error("OPTIONS", &e);
        Response::new(Full::new(Bytes::new()))
    })
}

/// Build a plain-text error response
fn plain_response(status: u16, message: &'static str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(status)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from(message)))
        .unwrap_or_else(|e| {
            log_build_error(message, &e);
            Response::new(Full::new(Bytes::from(message)))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_http_config() -> HttpConfig {
        HttpConfig {
            server_name: "spaserve/test".to_string(),
            enable_cors: false,
            max_body_size: 1024,
        }
    }

    #[test]
    fn test_file_response_has_length_and_server() {
        let resp = build_file_response(b"console.log(1)".to_vec(), "application/javascript", &test_http_config(), false);
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Length"], "14");
        assert_eq!(resp.headers()["Content-Type"], "application/javascript");
        assert_eq!(resp.headers()["Server"], "spaserve/test");
        assert!(resp.headers().get("Access-Control-Allow-Origin").is_none());
    }

    #[test]
    fn test_head_response_keeps_declared_length() {
        use hyper::body::Body as _;
        let resp = build_file_response(b"<html>App</html>".to_vec(), "text/html; charset=utf-8", &test_http_config(), true);
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Length"], "16");
        assert_eq!(resp.body().size_hint().exact(), Some(0));
    }

    #[test]
    fn test_cors_header_when_enabled() {
        let mut cfg = test_http_config();
        cfg.enable_cors = true;
        let resp = build_file_response(b"x".to_vec(), "text/plain", &cfg, false);
        assert_eq!(resp.headers()["Access-Control-Allow-Origin"], "*");

        let preflight = build_options_response(true);
        assert_eq!(preflight.status(), 204);
        assert_eq!(preflight.headers()["Access-Control-Allow-Methods"], "GET, HEAD, OPTIONS");
    }

    #[test]
    fn test_error_statuses() {
        assert_eq!(build_403_response().status(), 403);
        assert_eq!(build_404_response().status(), 404);
        assert_eq!(build_405_response().status(), 405);
        assert_eq!(build_413_response().status(), 413);
        assert_eq!(build_500_response().status(), 500);
        assert_eq!(build_405_response().headers()["Allow"], "GET, HEAD, OPTIONS");
    }
}
