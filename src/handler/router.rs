//! Request routing.
//!
//! The dispatch order is an explicit table built once at startup: the
//! diagnostic endpoint, then the root redirect, then the static file
//! fallback. Method validation happens before any route is consulted.

use crate::config::{AppState, RoutesConfig};
use crate::handler::static_files;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

/// Path matcher for one route
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteMatch {
    /// Exact path equality
    Exact(String),
    /// The root path (`/` or empty)
    Root,
}

impl RouteMatch {
    fn matches(&self, path: &str) -> bool {
        match self {
            Self::Exact(expected) => path == expected,
            Self::Root => path == "/" || path.is_empty(),
        }
    }
}

/// What to do when a route matches
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteAction {
    /// Fixed JSON diagnostic payload
    Status,
    /// 302 to the given target
    Redirect(String),
    /// Resolve the path against the root directory
    ServeFile,
}

/// Ordered route table. Matchers are tried in insertion order; the
/// fallback action applies when none match.
pub struct RouteTable {
    routes: Vec<(RouteMatch, RouteAction)>,
    fallback: RouteAction,
}

impl RouteTable {
    pub fn new(cfg: &RoutesConfig) -> Self {
        Self {
            routes: vec![
                (
                    RouteMatch::Exact(cfg.status_path.clone()),
                    RouteAction::Status,
                ),
                (
                    RouteMatch::Root,
                    RouteAction::Redirect(cfg.login_page.clone()),
                ),
            ],
            fallback: RouteAction::ServeFile,
        }
    }

    /// Find the action for a request path.
    pub fn resolve(&self, path: &str) -> &RouteAction {
        self.routes
            .iter()
            .find(|(matcher, _)| matcher.matches(path))
            .map_or(&self.fallback, |(_, action)| action)
    }
}

/// Request context passed to route handlers
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub is_head: bool,
    pub if_none_match: Option<String>,
}

/// Main entry point for HTTP request handling.
///
/// The body type is generic because no route ever reads a request body.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let version = version_label(req.version());
    let is_head = method == Method::HEAD;

    if let Some(response) = check_http_method(&method) {
        log_handled(&state, peer_addr, &method, &path, version, &response);
        return Ok(response);
    }

    let ctx = RequestContext {
        path: &path,
        is_head,
        if_none_match: req
            .headers()
            .get("if-none-match")
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string),
    };

    let response = dispatch(&ctx, &state).await;
    log_handled(&state, peer_addr, &method, &path, version, &response);
    Ok(response)
}

/// Dispatch through the route table.
pub async fn dispatch(ctx: &RequestContext<'_>, state: &AppState) -> Response<Full<Bytes>> {
    match state.routes.resolve(ctx.path) {
        RouteAction::Status => http::status_payload(ctx.is_head),
        RouteAction::Redirect(target) => http::redirect(target),
        RouteAction::ServeFile => static_files::serve(ctx, &state.root_dir).await,
    }
}

/// Only reads pass through; OPTIONS is answered, everything else is 405.
fn check_http_method(method: &Method) -> Option<Response<Full<Bytes>>> {
    match *method {
        Method::GET | Method::HEAD => None,
        Method::OPTIONS => Some(http::options()),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::method_not_allowed())
        }
    }
}

/// Write the access log line for a finished request.
fn log_handled(
    state: &AppState,
    peer_addr: SocketAddr,
    method: &Method,
    path: &str,
    version: &'static str,
    response: &Response<Full<Bytes>>,
) {
    if !state.config.logging.access_log {
        return;
    }
    let mut entry = AccessLogEntry::new(
        peer_addr.ip().to_string(),
        method.to_string(),
        path.to_string(),
    );
    entry.http_version = version.to_string();
    entry.status = response.status().as_u16();
    entry.body_bytes = usize::try_from(response.body().size_hint().exact().unwrap_or(0))
        .unwrap_or(usize::MAX);
    logger::log_access(&entry, &state.config.logging.access_log_format);
}

const fn version_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_10 => "1.0",
        _ => "1.1",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use http_body_util::BodyExt;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicU32, Ordering};

    static DIR_SEQ: AtomicU32 = AtomicU32::new(0);

    fn test_state() -> (Arc<AppState>, PathBuf) {
        let dir = std::env::temp_dir().join(format!(
            "ubs-router-test-{}-{}",
            std::process::id(),
            DIR_SEQ.fetch_add(1, Ordering::SeqCst)
        ));
        std::fs::create_dir_all(&dir).unwrap();
        let mut config = Config::default();
        config.server.root_dir = Some(dir.to_string_lossy().into_owned());
        let state = Arc::new(AppState::new(config).unwrap());
        (state, dir)
    }

    fn peer() -> SocketAddr {
        "127.0.0.1:40000".parse().unwrap()
    }

    #[test]
    fn table_order_is_status_then_root_then_fallback() {
        let table = RouteTable::new(&RoutesConfig::default());
        assert_eq!(table.resolve("/api/status"), &RouteAction::Status);
        assert_eq!(
            table.resolve("/"),
            &RouteAction::Redirect("/login-central-regulacao.html".to_string())
        );
        assert_eq!(
            table.resolve(""),
            &RouteAction::Redirect("/login-central-regulacao.html".to_string())
        );
        assert_eq!(table.resolve("/index.html"), &RouteAction::ServeFile);
        assert_eq!(table.resolve("/api/status2"), &RouteAction::ServeFile);
    }

    #[test]
    fn method_gate() {
        assert!(check_http_method(&Method::GET).is_none());
        assert!(check_http_method(&Method::HEAD).is_none());
        assert_eq!(check_http_method(&Method::OPTIONS).unwrap().status(), 204);
        assert_eq!(check_http_method(&Method::POST).unwrap().status(), 405);
        assert_eq!(check_http_method(&Method::DELETE).unwrap().status(), 405);
    }

    #[tokio::test]
    async fn get_status_returns_the_literal() {
        let (state, dir) = test_state();
        let req = Request::builder()
            .method(Method::GET)
            .uri("/api/status")
            .body(Full::new(Bytes::new()))
            .unwrap();

        let response = handle_request(req, state, peer()).await.unwrap();
        assert_eq!(response.status(), 200);
        assert_eq!(
            response.headers().get("Content-Type").unwrap(),
            "application/json"
        );
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], br#"{"status": "online", "server": "python"}"#);
        std::fs::remove_dir_all(dir).unwrap();
    }

    #[tokio::test]
    async fn get_root_redirects_to_login() {
        let (state, dir) = test_state();
        let req = Request::builder()
            .method(Method::GET)
            .uri("/")
            .body(Full::new(Bytes::new()))
            .unwrap();

        let response = handle_request(req, state, peer()).await.unwrap();
        assert_eq!(response.status(), 302);
        assert_eq!(
            response.headers().get("Location").unwrap(),
            "/login-central-regulacao.html"
        );
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert!(body.is_empty());
        std::fs::remove_dir_all(dir).unwrap();
    }

    #[tokio::test]
    async fn get_existing_css_round_trips() {
        let (state, dir) = test_state();
        std::fs::write(dir.join("style.css"), b"body{}").unwrap();
        let req = Request::builder()
            .method(Method::GET)
            .uri("/style.css")
            .body(Full::new(Bytes::new()))
            .unwrap();

        let response = handle_request(req, state, peer()).await.unwrap();
        assert_eq!(response.status(), 200);
        assert_eq!(response.headers().get("Content-Type").unwrap(), "text/css");
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"body{}");
        std::fs::remove_dir_all(dir).unwrap();
    }

    #[tokio::test]
    async fn get_missing_file_is_404() {
        let (state, dir) = test_state();
        let req = Request::builder()
            .method(Method::GET)
            .uri("/does-not-exist.html")
            .body(Full::new(Bytes::new()))
            .unwrap();

        let response = handle_request(req, state, peer()).await.unwrap();
        assert_eq!(response.status(), 404);
        std::fs::remove_dir_all(dir).unwrap();
    }

    #[tokio::test]
    async fn post_is_rejected_before_routing() {
        let (state, dir) = test_state();
        let req = Request::builder()
            .method(Method::POST)
            .uri("/api/status")
            .body(Full::new(Bytes::new()))
            .unwrap();

        let response = handle_request(req, state, peer()).await.unwrap();
        assert_eq!(response.status(), 405);
        std::fs::remove_dir_all(dir).unwrap();
    }

    #[tokio::test]
    async fn conditional_get_returns_304() {
        let (state, dir) = test_state();
        std::fs::write(dir.join("app.js"), b"console.log(1);").unwrap();

        let req = Request::builder()
            .method(Method::GET)
            .uri("/app.js")
            .body(Full::new(Bytes::new()))
            .unwrap();
        let first = handle_request(req, Arc::clone(&state), peer()).await.unwrap();
        let etag = first.headers().get("ETag").unwrap().to_str().unwrap().to_string();

        let req = Request::builder()
            .method(Method::GET)
            .uri("/app.js")
            .header("If-None-Match", &etag)
            .body(Full::new(Bytes::new()))
            .unwrap();
        let second = handle_request(req, state, peer()).await.unwrap();
        assert_eq!(second.status(), 304);
        std::fs::remove_dir_all(dir).unwrap();
    }
}
