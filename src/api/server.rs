//! HTTP server for the site and JSON API

use axum::{
    routing::{get, post},
    Router,
};
use minijinja::Environment;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::auth::{FileStorage, Roster, SessionSigner, SessionStore, Storage};
use crate::config::Config;
use crate::error::Result;
use crate::ui;

use super::{routes, websocket};

/// Application state shared across handlers
pub struct AppState {
    pub config: Config,
    pub session: SessionStore,
    pub templates: Environment<'static>,
}

pub type SharedState = Arc<RwLock<AppState>>;

impl AppState {
    /// Build state backed by the configured storage file
    pub fn new(config: Config) -> Result<Self> {
        let storage = FileStorage::new(&config.storage.path);
        Self::with_storage(config, storage)
    }

    /// Build state over any storage, restoring the persisted session
    pub fn with_storage(config: Config, storage: impl Storage + 'static) -> Result<Self> {
        let roster = Arc::new(Roster::demo(config.auth.bcrypt_cost)?);
        let signer = SessionSigner::from_config(&config.auth);
        let session = SessionStore::open(roster, signer, storage);
        let templates = ui::templates::environment()?;

        Ok(Self {
            config,
            session,
            templates,
        })
    }

    pub fn shared(self) -> SharedState {
        Arc::new(RwLock::new(self))
    }
}

/// Run the HTTP server
pub async fn run_server(config: Config, host: &str, port: u16) -> Result<()> {
    tracing::info!("Session storage at {}", config.storage.path.display());
    let state = AppState::new(config)?.shared();

    let app = create_router(state);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the router with all routes
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        // API routes
        .route("/api/health", get(routes::health))
        .route("/api/session", get(routes::get_session))
        .route("/api/session/login", post(routes::login))
        .route("/api/session/signup", post(routes::signup))
        .route("/api/session/logout", post(routes::logout))
        .route("/api/navigation", get(routes::navigation))
        .route("/ws", get(websocket::ws_handler))
        // UI routes
        .route("/", get(ui::home))
        .route("/about", get(ui::about))
        .route("/services", get(ui::services))
        .route("/learning", get(ui::learning))
        .route("/jobs", get(ui::jobs))
        .route("/profile", get(ui::profile))
        .route("/login", get(ui::login_page).post(ui::login_submit))
        .route("/signup", post(ui::signup_submit))
        .route("/logout", post(ui::logout_submit))
        .fallback(ui::not_found)
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
