//! Web server module for fretweb.
//!
//! Provides the HTTP entry point serving the fretboard visualization page.
//! A single route is registered; everything else falls through to the
//! framework defaults (404 for unknown paths, 405 for unregistered
//! methods on "/").
//!
use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::Html,
    routing::get,
};
use std::{path::PathBuf, sync::Arc};

use crate::{
    config::CONFIG,
    templates::{self, INDEX_TEMPLATE},
};

/// Application state shared by request handlers
pub struct AppState {
    /// Directory the page templates are loaded from
    pub template_dir: PathBuf,
}

/// Build the application router with its single page route
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index_page))
        // Future API endpoints for scales, chords, etc.
        // .route("/api/scales", get(list_scales))
        // .route("/api/chords", get(list_chords))
        .with_state(state)
}

/// Start the web server on the configured address
pub async fn run() {
    let state = Arc::new(AppState {
        template_dir: PathBuf::from(&CONFIG.template_dir),
    });

    let addr = format!("{}:{}", CONFIG.host, CONFIG.port)
        .parse::<std::net::SocketAddr>()
        .unwrap();

    println!("🎸 Fretboard UI at http://{}/", addr);

    axum_server::bind(addr)
        .serve(app(state).into_make_service())
        .await
        .unwrap();
}

/// Display the fretboard visualization page
async fn index_page(State(state): State<Arc<AppState>>) -> Result<Html<String>, StatusCode> {
    match templates::load(&state.template_dir, INDEX_TEMPLATE).await {
        Ok(body) => Ok(Html(body)),
        Err(e) => {
            eprintln!("⚠️ Could not read template {}: {}", INDEX_TEMPLATE, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
