use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

pub mod error;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

pub async fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/api/categories", get(handlers::list_categories))
        .route("/api/generate", post(handlers::generate))
        .route("/api/detect", post(handlers::detect))
        .route("/api/generate-and-detect", post(handlers::generate_and_detect))
        .layer(cors)
        .with_state(Arc::new(state))
}

pub async fn serve(config: &ServerConfig, state: AppState) -> std::io::Result<()> {
    let app = create_app(state).await;
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;

    info!("🌐 Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await
}
