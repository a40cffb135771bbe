//! Request handling.
//!
//! Wraps the static-file serving primitive with the fixed development
//! header policy and per-request console logging. Composition over a
//! plain function, not a customized server type: the policy is applied
//! to whatever response the file serving produced.

pub mod static_files;

use std::convert::Infallible;
use std::net::SocketAddr;

use http_body_util::Full;
use hyper::body::{Body as _, Bytes};
use hyper::{Method, Request, Response};

use crate::config::ServerConfig;
use crate::http::{self, headers};
use crate::logger;

/// Main entry point for request handling.
///
/// Per-request failures surface as HTTP status codes; nothing on this
/// path can bring the server process down.
pub async fn handle_request<B>(
    req: Request<B>,
    config: &ServerConfig,
    peer: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let target = request_target(req.uri());
    let version = req.version();

    let mut response = dispatch(&method, &path, config).await;

    // Every response carries the development headers, whatever its status.
    headers::apply_dev_headers(response.headers_mut());

    let body_bytes = response.body().size_hint().exact().unwrap_or(0);
    logger::log_request(
        &peer,
        &method,
        &target,
        version,
        response.status().as_u16(),
        body_bytes,
    );

    Ok(response)
}

/// The request target as it appeared on the request line, query string
/// included; only the bare path takes part in file resolution.
fn request_target(uri: &hyper::Uri) -> String {
    uri.path_and_query()
        .map_or_else(|| uri.path().to_owned(), ToString::to_string)
}

/// Route by method: GET and HEAD hit the filesystem, OPTIONS gets the
/// standard preflight response, everything else is rejected.
async fn dispatch(method: &Method, path: &str, config: &ServerConfig) -> Response<Full<Bytes>> {
    match *method {
        Method::GET => static_files::serve(config, path, false).await,
        Method::HEAD => static_files::serve(config, path, true).await,
        Method::OPTIONS => http::build_options_response(),
        _ => http::build_405_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::headers::DEV_HEADERS;
    use std::net::{IpAddr, Ipv4Addr};
    use tempfile::TempDir;

    fn test_config(root: &TempDir) -> ServerConfig {
        ServerConfig::new(8080, root.path().to_path_buf())
    }

    fn peer() -> SocketAddr {
        SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 54321)
    }

    fn request(method: Method, path: &str) -> Request<Full<Bytes>> {
        Request::builder()
            .method(method)
            .uri(path)
            .body(Full::new(Bytes::new()))
            .unwrap()
    }

    fn assert_dev_headers(response: &Response<Full<Bytes>>) {
        for (name, value) in DEV_HEADERS {
            assert_eq!(
                response.headers().get(name).map(|v| v.to_str().unwrap()),
                Some(value),
                "missing header {name} on {} response",
                response.status()
            );
        }
    }

    #[test]
    fn request_target_keeps_query_string() {
        let uri: hyper::Uri = "/test-panel.html?level=3&debug=1".parse().unwrap();
        assert_eq!(request_target(&uri), "/test-panel.html?level=3&debug=1");

        let bare: hyper::Uri = "/index.html".parse().unwrap();
        assert_eq!(request_target(&bare), "/index.html");
    }

    #[tokio::test]
    async fn query_string_does_not_affect_resolution() {
        let root = TempDir::new().unwrap();
        std::fs::write(root.path().join("game.js"), "let score = 0;").unwrap();

        let response = handle_request(
            request(Method::GET, "/game.js?cache=bust"),
            &test_config(&root),
            peer(),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), 200);
    }

    #[tokio::test]
    async fn ok_response_carries_all_dev_headers() {
        let root = TempDir::new().unwrap();
        std::fs::write(root.path().join("game.js"), "let score = 0;").unwrap();

        let response = handle_request(request(Method::GET, "/game.js"), &test_config(&root), peer())
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        assert_dev_headers(&response);
    }

    #[tokio::test]
    async fn not_found_response_carries_all_dev_headers() {
        let root = TempDir::new().unwrap();

        let response = handle_request(request(Method::GET, "/missing"), &test_config(&root), peer())
            .await
            .unwrap();

        assert_eq!(response.status(), 404);
        assert_dev_headers(&response);
    }

    #[tokio::test]
    async fn post_is_rejected_with_headers_intact() {
        let root = TempDir::new().unwrap();

        let response = handle_request(request(Method::POST, "/"), &test_config(&root), peer())
            .await
            .unwrap();

        assert_eq!(response.status(), 405);
        assert_dev_headers(&response);
    }

    #[tokio::test]
    async fn options_gets_preflight_with_headers() {
        let root = TempDir::new().unwrap();

        let response = handle_request(request(Method::OPTIONS, "/"), &test_config(&root), peer())
            .await
            .unwrap();

        assert_eq!(response.status(), 204);
        assert_dev_headers(&response);
    }

    #[tokio::test]
    async fn head_logs_zero_body_bytes_but_serves_length() {
        use hyper::body::Body as _;

        let root = TempDir::new().unwrap();
        std::fs::write(root.path().join("index.html"), "<html></html>").unwrap();

        let response = handle_request(request(Method::HEAD, "/"), &test_config(&root), peer())
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        assert_eq!(response.headers().get("Content-Length").unwrap(), "13");
        assert_eq!(response.body().size_hint().exact(), Some(0));
    }
}
