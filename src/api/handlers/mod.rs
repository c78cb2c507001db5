use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    Json,
};

use crate::models::Section;
use crate::render;
use crate::routes::NavLink;
use crate::sitemap;

use super::AppState;

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Sections
// ============================================================

pub async fn list_sections(State(state): State<AppState>) -> Json<Vec<Section>> {
    Json(state.directory.all().to_vec())
}

/// The JSON surface reports a miss explicitly; only the HTML surface
/// renders an empty page.
pub async fn get_section(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Section>, (StatusCode, String)> {
    state
        .directory
        .resolve(&slug)
        .cloned()
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, "Section not found".to_string()))
}

// ============================================================
// Navigation
// ============================================================

pub async fn nav_links(State(state): State<AppState>) -> Json<Vec<NavLink>> {
    Json(state.routes.nav_links(&state.directory))
}

pub async fn list_routes(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.routes.static_routes().to_vec())
}

// ============================================================
// Rendered pages
// ============================================================

pub async fn index_page(State(state): State<AppState>) -> Html<String> {
    let nav = state.routes.nav_links(&state.directory);
    Html(render::index_page(&state.directory, &nav))
}

pub async fn section_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Html<String> {
    let nav = state.routes.nav_links(&state.directory);
    Html(render::section_page(&state.directory, &nav, &slug))
}

// ============================================================
// Sitemap
// ============================================================

pub async fn sitemap_xml(State(state): State<AppState>) -> impl IntoResponse {
    let xml = sitemap::render(&state.base_url, &state.routes, state.content_revision);
    ([(header::CONTENT_TYPE, "application/xml")], xml)
}
