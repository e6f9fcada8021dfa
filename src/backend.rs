use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue},
    middleware::{self, Next},
    response::Response,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::{Path, PathBuf},
    sync::atomic::{AtomicU64, Ordering as AtomicOrdering},
    time::{Instant, SystemTime, UNIX_EPOCH},
};
use tower_http::services::{ServeDir, ServeFile};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_BIND_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_DIST_DIR: &str = "dist";
const DEFAULT_ASSET_MAX_AGE_SECONDS: u64 = 365 * 24 * 60 * 60;
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const ASSET_MAX_AGE_SECONDS_BOUNDS: (u64, u64) = (0, 365 * 24 * 60 * 60);
const UNFINGERPRINTED_MAX_AGE_SECONDS: u64 = 60 * 60;
const FINGERPRINT_MIN_HEX_LEN: usize = 8;
const FINGERPRINTED_EXTENSIONS: [&str; 3] = ["js", "wasm", "css"];
const REQUEST_ID_HEADER: &str = "x-request-id";

static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("{} has no index.html, run `trunk build --release` first", .0.display())]
    MissingBundle(PathBuf),
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server stopped unexpectedly: {0}")]
    Serve(#[source] std::io::Error),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum LogLevel {
    Debug,
    Info,
    Warn,
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
        match value.to_ascii_lowercase().as_str() {
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
    bind_host: IpAddr,
    dist_dir: PathBuf,
    asset_max_age_seconds: u64,
    log_level: LogLevel,
}

impl ServerConfig {
    fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let value = |name: &str| {
            lookup(name)
                .map(|raw| raw.trim().to_string())
                .filter(|raw| !raw.is_empty())
        };

        let port = value("PORT")
            .and_then(|raw| raw.parse::<u16>().ok())
            .filter(|port| *port != 0)
            .unwrap_or(DEFAULT_PORT);
        let bind_host = value("BIND_HOST")
            .and_then(|raw| raw.parse::<IpAddr>().ok())
            .unwrap_or(DEFAULT_BIND_HOST);
        let dist_dir = value("DIST_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR));
        let asset_max_age_seconds = value("ASSET_MAX_AGE_SECONDS")
            .and_then(|raw| raw.parse::<u64>().ok())
            .filter(|seconds| {
                (ASSET_MAX_AGE_SECONDS_BOUNDS.0..=ASSET_MAX_AGE_SECONDS_BOUNDS.1).contains(seconds)
            })
            .unwrap_or(DEFAULT_ASSET_MAX_AGE_SECONDS);
        let log_level = value("LOG_LEVEL")
            .and_then(|raw| LogLevel::parse(&raw))
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self {
            port,
            bind_host,
            dist_dir,
            asset_max_age_seconds,
            log_level,
        }
    }

    fn bind_address(&self) -> SocketAddr {
        SocketAddr::new(self.bind_host, self.port)
    }

    fn index_path(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }
}

#[derive(Clone)]
struct AppState {
    config: ServerConfig,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthPayload {
    ok: bool,
    name: &'static str,
    version: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CachePolicy {
    Revalidate,
    ShortLived,
    Immutable(u64),
}

impl CachePolicy {
    fn for_path(path: &str, asset_max_age_seconds: u64) -> Self {
        let file_name = path.rsplit('/').next().unwrap_or_default();
        let Some((stem, extension)) = file_name.rsplit_once('.') else {
            return Self::Revalidate;
        };

        if extension.eq_ignore_ascii_case("html") {
            return Self::Revalidate;
        }

        if FINGERPRINTED_EXTENSIONS.contains(&extension) && is_fingerprinted(stem) {
            if asset_max_age_seconds == 0 {
                return Self::Revalidate;
            }
            return Self::Immutable(asset_max_age_seconds);
        }

        Self::ShortLived
    }

    fn header_value(self) -> HeaderValue {
        match self {
            Self::Revalidate => HeaderValue::from_static("no-cache"),
            Self::ShortLived => cache_control(&format!(
                "public, max-age={UNFINGERPRINTED_MAX_AGE_SECONDS}"
            )),
            Self::Immutable(seconds) => {
                cache_control(&format!("public, max-age={seconds}, immutable"))
            }
        }
    }
}

/// Trunk appends `-<hash>` to bundle file stems, wasm-bindgen adds `_bg`.
fn is_fingerprinted(stem: &str) -> bool {
    let stem = stem.strip_suffix("_bg").unwrap_or(stem);
    stem.rsplit_once('-').is_some_and(|(_, hash)| {
        hash.len() >= FINGERPRINT_MIN_HEX_LEN && hash.chars().all(|c| c.is_ascii_hexdigit())
    })
}

fn cache_control(value: &str) -> HeaderValue {
    HeaderValue::from_str(value).unwrap_or_else(|_| HeaderValue::from_static("no-store"))
}

pub async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::from_env();
    ensure_bundle_exists(&config.dist_dir)?;

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|source| ServerError::Bind { address, source })?;

    log_event(
        &config,
        LogLevel::Info,
        "server_listening",
        serde_json::json!({
            "address": address.to_string(),
            "distDir": config.dist_dir.display().to_string(),
            "assetMaxAgeSeconds": config.asset_max_age_seconds,
        }),
    );

    let state = AppState {
        config: config.clone(),
    };
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    log_event(&config, LogLevel::Info, "server_shutdown", serde_json::json!({}));
    Ok(())
}

fn ensure_bundle_exists(dist_dir: &Path) -> Result<(), ServerError> {
    if dist_dir.join("index.html").is_file() {
        Ok(())
    } else {
        Err(ServerError::MissingBundle(dist_dir.to_path_buf()))
    }
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

fn router(state: AppState) -> Router {
    // Unknown paths are client routes; serve the app shell with 200.
    let static_service = ServeDir::new(&state.config.dist_dir)
        .fallback(ServeFile::new(state.config.index_path()));

    Router::new()
        .route("/healthz", get(health))
        .fallback_service(static_service)
        .layer(middleware::from_fn_with_state(state.clone(), observe_request))
        .with_state(state)
}

async fn health() -> Json<HealthPayload> {
    Json(HealthPayload {
        ok: true,
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn observe_request(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let started = Instant::now();
    let request_id = resolve_request_id(request.headers());
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;
    let status = response.status();
    let headers = response.headers_mut();

    if status.is_success() && !headers.contains_key(header::CACHE_CONTROL) {
        let policy = CachePolicy::for_path(&path, state.config.asset_max_age_seconds);
        headers.insert(header::CACHE_CONTROL, policy.header_value());
    }
    if let Ok(request_id_header) = HeaderValue::from_str(&request_id) {
        headers.insert(REQUEST_ID_HEADER, request_id_header);
    }

    let level = if status.is_server_error() {
        LogLevel::Warn
    } else {
        LogLevel::Info
    };
    log_event(
        &state.config,
        level,
        "http_request",
        serde_json::json!({
            "requestId": request_id,
            "method": method.as_str(),
            "path": path,
            "status": status.as_u16(),
            "durationMs": started.elapsed().as_millis() as u64,
        }),
    );

    response
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
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|raw| raw.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string)
        .unwrap_or_else(generate_request_id)
}

fn log_event(config: &ServerConfig, level: LogLevel, event: &str, fields: serde_json::Value) {
    if level < config.log_level {
        return;
    }

    println!("{}", render_log_line(level, event, fields));
}

fn render_log_line(level: LogLevel, event: &str, fields: serde_json::Value) -> serde_json::Value {
    let mut payload = serde_json::Map::new();
    payload.insert("ts".to_string(), serde_json::Value::from(now_unix_seconds()));
    payload.insert("level".to_string(), serde_json::Value::from(level.as_str()));
    payload.insert("event".to_string(), serde_json::Value::from(event));

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    serde_json::Value::Object(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::StatusCode};
    use std::{collections::HashMap, fs};
    use tower::ServiceExt;

    const INDEX_MARKER: &str = "<!-- noteshell shell -->";
    const WASM_ASSET: &str = "noteshell-landing-0f1e2d3c4b5a6978_bg.wasm";
    const JS_ASSET: &str = "noteshell-landing-0f1e2d3c4b5a6978.js";

    fn config_from(pairs: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        ServerConfig::from_lookup(|name| vars.get(name).cloned())
    }

    fn bundle_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().expect("temp dir");
        fs::write(dir.path().join("index.html"), format!("<html>{INDEX_MARKER}</html>"))
            .expect("write index");
        fs::write(dir.path().join(JS_ASSET), "export default 1;").expect("write js");
        fs::create_dir(dir.path().join("visuals")).expect("visuals dir");
        fs::write(dir.path().join("visuals/capture.svg"), "<svg/>").expect("write svg");
        dir
    }

    fn test_router(dist_dir: &Path) -> Router {
        let mut config = config_from(&[]);
        config.dist_dir = dist_dir.to_path_buf();
        config.log_level = LogLevel::Warn;
        router(AppState { config })
    }

    async fn send_get(router: Router, uri: &str) -> Response {
        router
            .oneshot(
                axum::http::Request::builder()
                    .uri(uri)
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("infallible")
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        String::from_utf8(bytes.to_vec()).expect("utf8 body")
    }

    fn cache_header(response: &Response) -> &str {
        response
            .headers()
            .get(header::CACHE_CONTROL)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
    }

    #[test]
    fn defaults_apply_without_environment() {
        let config = config_from(&[]);

        assert_eq!(config.bind_address(), "0.0.0.0:8080".parse::<SocketAddr>().expect("addr"));
        assert_eq!(config.dist_dir, PathBuf::from("dist"));
        assert_eq!(config.asset_max_age_seconds, DEFAULT_ASSET_MAX_AGE_SECONDS);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let config = config_from(&[
            ("PORT", "0"),
            ("BIND_HOST", "localhost"),
            ("DIST_DIR", "   "),
            ("ASSET_MAX_AGE_SECONDS", "999999999"),
            ("LOG_LEVEL", "chatty"),
        ]);

        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.bind_host, DEFAULT_BIND_HOST);
        assert_eq!(config.dist_dir, PathBuf::from(DEFAULT_DIST_DIR));
        assert_eq!(config.asset_max_age_seconds, DEFAULT_ASSET_MAX_AGE_SECONDS);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn valid_values_override_defaults() {
        let config = config_from(&[
            ("PORT", " 3000 "),
            ("BIND_HOST", "127.0.0.1"),
            ("DIST_DIR", "/srv/noteshell"),
            ("ASSET_MAX_AGE_SECONDS", "0"),
            ("LOG_LEVEL", "DEBUG"),
        ]);

        assert_eq!(config.bind_address(), "127.0.0.1:3000".parse::<SocketAddr>().expect("addr"));
        assert_eq!(config.index_path(), PathBuf::from("/srv/noteshell/index.html"));
        assert_eq!(config.asset_max_age_seconds, 0);
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn cache_policy_distinguishes_bundle_files() {
        assert_eq!(CachePolicy::for_path("/", 600), CachePolicy::Revalidate);
        assert_eq!(CachePolicy::for_path("/about", 600), CachePolicy::Revalidate);
        assert_eq!(CachePolicy::for_path("/index.html", 600), CachePolicy::Revalidate);
        assert_eq!(
            CachePolicy::for_path(&format!("/{JS_ASSET}"), 600),
            CachePolicy::Immutable(600)
        );
        assert_eq!(
            CachePolicy::for_path("/visuals/capture.svg", 600),
            CachePolicy::ShortLived
        );
        assert_eq!(CachePolicy::for_path("/main.css", 600), CachePolicy::ShortLived);
        assert_eq!(
            CachePolicy::for_path(&format!("/{JS_ASSET}"), 0),
            CachePolicy::Revalidate
        );
    }

    #[test]
    fn fingerprint_needs_a_hex_suffix() {
        assert!(is_fingerprinted("noteshell-landing-0f1e2d3c4b5a6978"));
        assert!(!is_fingerprinted("noteshell-landing"));
        assert!(!is_fingerprinted("main-abc"));
        assert!(is_fingerprinted(WASM_ASSET.trim_end_matches(".wasm")));
    }

    #[test]
    fn missing_bundle_is_reported() {
        let dir = tempfile::tempdir().expect("temp dir");

        let error = ensure_bundle_exists(dir.path()).expect_err("no index.html");
        assert!(matches!(error, ServerError::MissingBundle(_)));
        assert!(ensure_bundle_exists(bundle_dir().path()).is_ok());
    }

    #[test]
    fn log_line_merges_fields_after_envelope() {
        let line = render_log_line(
            LogLevel::Warn,
            "http_request",
            serde_json::json!({ "status": 500 }),
        );

        assert_eq!(line["level"], "warn");
        assert_eq!(line["event"], "http_request");
        assert_eq!(line["status"], 500);
        assert!(line["ts"].is_u64());
    }

    #[tokio::test]
    async fn health_reports_package() {
        let dir = bundle_dir();
        let response = send_get(test_router(dir.path()), "/healthz").await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value =
            serde_json::from_str(&body_text(response).await).expect("json body");
        assert_eq!(body["ok"], true);
        assert_eq!(body["name"], "noteshell-landing");
    }

    #[tokio::test]
    async fn root_serves_app_shell_without_caching() {
        let dir = bundle_dir();
        let response = send_get(test_router(dir.path()), "/").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(cache_header(&response), "no-cache");
        assert!(body_text(response).await.contains(INDEX_MARKER));
    }

    #[tokio::test]
    async fn client_route_falls_back_to_app_shell() {
        let dir = bundle_dir();
        let response = send_get(test_router(dir.path()), "/about").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains(INDEX_MARKER));
    }

    #[tokio::test]
    async fn fingerprinted_asset_is_immutable() {
        let dir = bundle_dir();
        let response = send_get(test_router(dir.path()), &format!("/{JS_ASSET}")).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            cache_header(&response),
            format!("public, max-age={DEFAULT_ASSET_MAX_AGE_SECONDS}, immutable")
        );
    }

    #[tokio::test]
    async fn plain_asset_gets_short_cache() {
        let dir = bundle_dir();
        let response = send_get(test_router(dir.path()), "/visuals/capture.svg").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(cache_header(&response), "public, max-age=3600");
    }

    #[tokio::test]
    async fn request_id_is_echoed_or_generated() {
        let dir = bundle_dir();
        let response = test_router(dir.path())
            .oneshot(
                axum::http::Request::builder()
                    .uri("/healthz")
                    .header(REQUEST_ID_HEADER, "trace-42")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("infallible");
        assert_eq!(response.headers()[REQUEST_ID_HEADER], "trace-42");

        let generated = send_get(test_router(dir.path()), "/healthz").await;
        let value = generated.headers()[REQUEST_ID_HEADER]
            .to_str()
            .expect("ascii header");
        assert!(value.starts_with("req-"));
    }
}
