use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::{
    cmp::Ordering,
    path::PathBuf,
    sync::atomic::{AtomicU64, Ordering as AtomicOrdering},
    sync::Arc,
    time::{Instant, SystemTime, UNIX_EPOCH},
};
use tower_http::{
    services::{ServeDir, ServeFile},
    set_header::SetResponseHeaderLayer,
};
use url::Url;

use crate::content::{SiteContent, SITE};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DIST_DIR: &str = "dist";
const DEFAULT_STATIC_MAX_AGE_SECONDS: u64 = 300;
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const PORT_BOUNDS: (u64, u64) = (1, 65_535);
const STATIC_MAX_AGE_SECONDS_BOUNDS: (u64, u64) = (0, 365 * 24 * 60 * 60);
const REQUEST_ID_HEADER: &str = "x-request-id";

static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum LogLevel {
    Debug,
    Info,
    Warn,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(level: LogLevel) -> u8 {
            match level {
                LogLevel::Debug => 0,
                LogLevel::Info => 1,
                LogLevel::Warn => 2,
            }
        }

        rank(*self).cmp(&rank(*other))
    }
}

impl LogLevel {
    fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" => Some(Self::Warn),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
struct ServerConfig {
    port: u16,
    dist_dir: PathBuf,
    static_max_age_seconds: u64,
    log_level: LogLevel,
}

impl ServerConfig {
    fn from_env() -> Self {
        let port = parse_env_u64_with_bounds("PORT", u64::from(DEFAULT_PORT), PORT_BOUNDS);
        let static_max_age_seconds = parse_env_u64_with_bounds(
            "STATIC_MAX_AGE_SECONDS",
            DEFAULT_STATIC_MAX_AGE_SECONDS,
            STATIC_MAX_AGE_SECONDS_BOUNDS,
        );
        let dist_dir = parse_env_non_empty_string("SITE_DIST_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR));
        let log_level = parse_env_non_empty_string("LOG_LEVEL")
            .and_then(|value| LogLevel::parse(&value))
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self {
            port: u16::try_from(port).unwrap_or(DEFAULT_PORT),
            dist_dir,
            static_max_age_seconds,
            log_level,
        }
    }

    fn cache_control(&self) -> HeaderValue {
        cache_control(&format!("public, max-age={}", self.static_max_age_seconds))
    }
}

#[derive(Clone)]
pub struct AppState {
    config: Arc<ServerConfig>,
    content: SiteContent,
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env();
    let state = AppState {
        config: Arc::new(config.clone()),
        content: SITE,
    };

    for (link, reason) in invalid_links(state.content.outbound_links()) {
        log_event(
            &config,
            LogLevel::Warn,
            "content_link_invalid",
            serde_json::json!({ "link": link, "reason": reason }),
        );
    }

    let app = build_router(state);
    let bind_address = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;

    log_event(
        &config,
        LogLevel::Info,
        "server_start",
        serde_json::json!({
            "address": bind_address,
            "dist_dir": config.dist_dir.display().to_string(),
            "static_max_age_seconds": config.static_max_age_seconds,
        }),
    );

    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: AppState) -> Router {
    let dist_dir = &state.config.dist_dir;
    let static_service = ServeDir::new(dist_dir)
        .not_found_service(ServeFile::new(dist_dir.join("index.html")));
    let static_cache = SetResponseHeaderLayer::if_not_present(
        header::CACHE_CONTROL,
        state.config.cache_control(),
    );

    Router::new()
        .route("/api/content", get(get_content))
        .route("/healthz", get(get_health))
        .fallback_service(static_service)
        .layer(static_cache)
        .layer(middleware::from_fn_with_state(state.clone(), track_request))
        .with_state(state)
}

async fn get_content(State(state): State<AppState>) -> impl IntoResponse {
    let mut headers = HeaderMap::new();
    headers.insert(header::CACHE_CONTROL, state.config.cache_control());
    headers.insert(header::VARY, HeaderValue::from_static("Accept-Encoding"));
    (StatusCode::OK, headers, Json(state.content))
}

async fn get_health() -> impl IntoResponse {
    (
        [(header::CACHE_CONTROL, HeaderValue::from_static("no-store"))],
        Json(serde_json::json!({ "ok": true })),
    )
}

async fn track_request(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let started_at = Instant::now();
    let request_id = resolve_request_id(request.headers());
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    log_event(
        &state.config,
        LogLevel::Info,
        "request_finish",
        serde_json::json!({
            "request_id": request_id,
            "method": method.as_str(),
            "path": path,
            "status": response.status().as_u16(),
            "elapsed_ms": started_at.elapsed().as_millis() as u64,
        }),
    );

    response
}

/// Links that do not parse as absolute URLs, with the reason.
fn invalid_links<'a>(links: impl Iterator<Item = &'a str>) -> Vec<(&'a str, &'static str)> {
    links
        .filter_map(|link| match validate_link(link) {
            Ok(()) => None,
            Err(reason) => Some((link, reason)),
        })
        .collect()
}

fn validate_link(link: &str) -> Result<(), &'static str> {
    let parsed = Url::parse(link).map_err(|_| "not an absolute url")?;
    match parsed.scheme() {
        "http" | "https" if parsed.host_str().is_none() => Err("missing host"),
        "http" | "https" | "mailto" => Ok(()),
        _ => Err("unsupported scheme"),
    }
}

fn cache_control(value: &str) -> HeaderValue {
    HeaderValue::from_str(value).unwrap_or_else(|_| HeaderValue::from_static("no-store"))
}

fn parse_u64_with_bounds(value: Option<String>, default: u64, bounds: (u64, u64)) -> u64 {
    value
        .and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_env_u64_with_bounds(name: &str, default: u64, bounds: (u64, u64)) -> u64 {
    parse_u64_with_bounds(std::env::var(name).ok(), default, bounds)
}

fn parse_env_non_empty_string(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn now_unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis())
        .unwrap_or(0)
}

fn now_unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_secs())
        .unwrap_or(0)
}

fn generate_request_id() -> String {
    let counter = REQUEST_ID_COUNTER.fetch_add(1, AtomicOrdering::Relaxed);
    format!("req-{}-{counter}", now_unix_millis())
}

fn resolve_request_id(headers: &HeaderMap) -> String {
    let value = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|raw| raw.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string);

    value.unwrap_or_else(generate_request_id)
}

fn log_event(config: &ServerConfig, level: LogLevel, event: &str, fields: serde_json::Value) {
    if level < config.log_level {
        return;
    }

    let mut payload = serde_json::Map::new();
    payload.insert(
        "ts".to_string(),
        serde_json::Value::Number(serde_json::Number::from(now_unix_seconds())),
    );
    payload.insert("level".to_string(), serde_json::Value::String(level.as_str().to_string()));
    payload.insert("event".to_string(), serde_json::Value::String(event.to_string()));

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    println!("{}", serde_json::Value::Object(payload));
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use tower::ServiceExt;

    fn test_config() -> ServerConfig {
        ServerConfig {
            port: DEFAULT_PORT,
            dist_dir: PathBuf::from("/tmp/folio-test-dist-missing"),
            static_max_age_seconds: 60,
            log_level: LogLevel::Warn,
        }
    }

    fn test_state() -> AppState {
        AppState {
            config: Arc::new(test_config()),
            content: SITE,
        }
    }

    async fn send(path: &str, headers: &[(&str, &str)]) -> Response {
        send_to(test_state(), path, headers).await
    }

    async fn send_to(state: AppState, path: &str, headers: &[(&str, &str)]) -> Response {
        let mut request = axum::http::Request::builder().uri(path);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }
        build_router(state)
            .oneshot(request.body(Body::empty()).expect("valid request"))
            .await
            .expect("router is infallible")
    }

    #[test]
    fn bounded_parse_falls_back_on_garbage_and_out_of_range() {
        assert_eq!(parse_u64_with_bounds(Some(" 3000 ".to_string()), 8080, PORT_BOUNDS), 3000);
        assert_eq!(parse_u64_with_bounds(Some("0".to_string()), 8080, PORT_BOUNDS), 8080);
        assert_eq!(parse_u64_with_bounds(Some("70000".to_string()), 8080, PORT_BOUNDS), 8080);
        assert_eq!(parse_u64_with_bounds(Some("port".to_string()), 8080, PORT_BOUNDS), 8080);
        assert_eq!(parse_u64_with_bounds(None, 300, STATIC_MAX_AGE_SECONDS_BOUNDS), 300);
    }

    #[test]
    fn log_level_parsing_is_case_insensitive() {
        assert_eq!(LogLevel::parse("DEBUG"), Some(LogLevel::Debug));
        assert_eq!(LogLevel::parse(" warn "), Some(LogLevel::Warn));
        assert_eq!(LogLevel::parse("trace"), None);
        assert!(LogLevel::Debug < LogLevel::Info && LogLevel::Info < LogLevel::Warn);
    }

    #[test]
    fn supplied_request_id_is_reused() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static(" abc-123 "));
        assert_eq!(resolve_request_id(&headers), "abc-123");

        let generated = resolve_request_id(&HeaderMap::new());
        assert!(generated.starts_with("req-"));
    }

    #[test]
    fn site_links_are_all_valid() {
        assert!(invalid_links(SITE.outbound_links()).is_empty());
    }

    #[test]
    fn malformed_links_are_reported() {
        let links = ["https://github.com/ucupp19", "not a url", "ftp://example.com/file", "mailto:me@example.com"];
        let invalid = invalid_links(links.into_iter());
        assert_eq!(
            invalid,
            vec![
                ("not a url", "not an absolute url"),
                ("ftp://example.com/file", "unsupported scheme"),
            ]
        );
    }

    #[tokio::test]
    async fn content_endpoint_lists_sections_in_page_order() {
        let response = send("/api/content", &[]).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL).and_then(|value| value.to_str().ok()),
            Some("public, max-age=60")
        );

        let body = to_bytes(response.into_body(), 1024 * 1024).await.expect("readable body");
        let payload: serde_json::Value = serde_json::from_slice(&body).expect("json body");
        assert_eq!(
            payload["sections"],
            serde_json::json!(["home", "about", "tech", "projects", "certificates", "contact"])
        );
        assert_eq!(payload["projects"][0]["repositoryUrl"], "https://github.com/ucupp19/lyrics-visualizer");
        assert_eq!(payload["greetings"].as_array().map(Vec::len), Some(4));
    }

    #[tokio::test]
    async fn responses_echo_the_request_id() {
        let response = send("/healthz", &[(REQUEST_ID_HEADER, "trace-7")]).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(REQUEST_ID_HEADER).and_then(|value| value.to_str().ok()),
            Some("trace-7")
        );
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL).and_then(|value| value.to_str().ok()),
            Some("no-store")
        );
    }

    #[tokio::test]
    async fn missing_bundle_falls_through_to_not_found() {
        let response = send("/projects/LyricsAM.png", &[]).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));
    }

    #[tokio::test]
    async fn unknown_paths_serve_the_app_shell_with_not_found_status() {
        let dist_dir = std::env::temp_dir().join(format!("folio-test-dist-{}", std::process::id()));
        std::fs::create_dir_all(&dist_dir).expect("create dist dir");
        std::fs::write(dist_dir.join("index.html"), "<html>app</html>").expect("write index.html");

        let state = AppState {
            config: Arc::new(ServerConfig {
                dist_dir: dist_dir.clone(),
                ..test_config()
            }),
            content: SITE,
        };
        let response = send_to(state, "/certificates", &[]).await;

        // ServeDir keeps the 404 status when it answers from the not-found service.
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL).and_then(|value| value.to_str().ok()),
            Some("public, max-age=60")
        );
        let body = to_bytes(response.into_body(), 1024 * 1024).await.expect("readable body");
        assert_eq!(&body[..], b"<html>app</html>");

        let _ = std::fs::remove_dir_all(&dist_dir);
    }
}
