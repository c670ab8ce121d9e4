use axum::{
    http::{header, Method},
    Router,
};
use log::{info, warn};
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::io::DEFAULT_MAX_VERTICES;
use crate::web::api::{create_router, AppState};

/// Configuration for the web server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub enable_cors: bool,
    pub max_sessions: usize,
    pub session_timeout_minutes: u64,
    /// Most tied paths a single search may enumerate
    pub max_paths: usize,
    /// Most vertex slots an uploaded graph may create
    pub max_vertices: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3005,
            enable_cors: true,
            max_sessions: 1000,
            session_timeout_minutes: 60,
            max_paths: 1000,
            max_vertices: DEFAULT_MAX_VERTICES,
        }
    }
}

impl ServerConfig {
    /// Defaults overridden by `PATHGRAPH_HOST`, `PATHGRAPH_PORT`,
    /// `PATHGRAPH_CORS`, `PATHGRAPH_MAX_SESSIONS`,
    /// `PATHGRAPH_SESSION_TIMEOUT_MINUTES`, `PATHGRAPH_MAX_PATHS` and
    /// `PATHGRAPH_MAX_VERTICES`. Unparsable values are ignored.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env_or("PATHGRAPH_HOST", defaults.host),
            port: env_or("PATHGRAPH_PORT", defaults.port),
            enable_cors: env_or("PATHGRAPH_CORS", defaults.enable_cors),
            max_sessions: env_or("PATHGRAPH_MAX_SESSIONS", defaults.max_sessions),
            session_timeout_minutes: env_or(
                "PATHGRAPH_SESSION_TIMEOUT_MINUTES",
                defaults.session_timeout_minutes,
            ),
            max_paths: env_or("PATHGRAPH_MAX_PATHS", defaults.max_paths),
            max_vertices: env_or("PATHGRAPH_MAX_VERTICES", defaults.max_vertices),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => match raw.parse() {
            Ok(value) => value,
            Err(_) => {
                warn!("ignoring unparsable {}={:?}", key, raw);
                default
            }
        },
        Err(_) => default,
    }
}

/// Build the application router for `config`
pub fn build_app(config: &ServerConfig) -> Router {
    let app_state = AppState::with_limits(config.max_sessions, config.session_timeout_minutes)
        .with_max_paths(config.max_paths)
        .with_max_vertices(config.max_vertices);
    let app = create_router().with_state(app_state);

    if config.enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);
        app.layer(ServiceBuilder::new().layer(cors).into_inner())
    } else {
        app
    }
}

/// Start the web server on localhost
pub async fn start_server(port: u16) -> Result<(), Box<dyn std::error::Error>> {
    start_server_with_config(ServerConfig {
        port,
        ..Default::default()
    })
    .await
}

/// Start the web server with custom configuration
pub async fn start_server_with_config(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_app(&config);
    let addr = config.addr();
    info!("pathgraph server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
