use axum::{routing::get, Router};
use nr_core::{load_articles, ArticleSource, DATA_PATH};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeFile;
use tower_http::trace::TraceLayer;
use tracing::info;

pub mod error;
pub mod handlers;
pub mod state;

pub use error::{WebError, WebResult};
pub use state::AppState;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// File served at `/data/news.json`, if any
    pub data_file: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            data_file: None,
        }
    }
}

pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();
    let data_file = state.data_file.clone();

    let mut router = Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/api/articles", get(handlers::list_articles))
        .route("/api/featured", get(handlers::featured_articles))
        .route("/api/latest", get(handlers::latest_articles))
        .route("/api/categories", get(handlers::list_categories))
        .route("/api/stats", get(handlers::get_stats));

    if let Some(path) = data_file {
        router = router.route_service(DATA_PATH, ServeFile::new(path));
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(Arc::new(state))
}

/// Loads the article list in the background and settles the display state once.
pub fn spawn_load(state: &AppState, source: Box<dyn ArticleSource>) -> JoinHandle<()> {
    let display = state.display.clone();
    tokio::spawn(async move {
        let result = load_articles(source.as_ref()).await;
        display.write().await.resolve(result);
    })
}

pub async fn serve(config: ServerConfig, source: Box<dyn ArticleSource>) -> anyhow::Result<()> {
    let state = AppState::new(config.data_file.clone());
    spawn_load(&state, source);
    let app = create_app(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("🌐 Serving newsroom on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
