mod handlers;

use std::sync::Arc;

use axum::{routing::get, Router};
use chrono::NaiveDate;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::directory::{content, Directory};
use crate::routes::RouteTable;

/// Runtime configuration, read from the environment.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Absolute base URL used for sitemap `<loc>` entries
    /// (from LINKHUB_BASE_URL).
    pub base_url: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let base_url = std::env::var("LINKHUB_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:3000".to_string());
        Self { base_url }
    }
}

/// Shared read-only state behind every handler.
///
/// The directory is built before the listener binds and never mutated, so
/// cloning the state per request is an `Arc` bump and no handler needs a
/// lock.
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<Directory>,
    pub routes: RouteTable,
    pub base_url: String,
    pub content_revision: NaiveDate,
}

impl AppState {
    pub fn new(directory: Directory, routes: RouteTable, config: ServerConfig) -> Self {
        Self {
            directory: Arc::new(directory),
            routes,
            base_url: config.base_url,
            content_revision: content::revision(),
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        // Sections
        .route("/sections", get(handlers::list_sections))
        .route("/sections/{slug}", get(handlers::get_section))
        // Navigation
        .route("/nav", get(handlers::nav_links))
        .route("/routes", get(handlers::list_routes))
        // Health
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/api/v1", api)
        // Rendered pages
        .route("/", get(handlers::index_page))
        .route("/sitemap.xml", get(handlers::sitemap_xml))
        .route("/{slug}", get(handlers::section_page))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
