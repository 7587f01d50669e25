//! HTTP server for the site.
//!
//! Serves the locale-prefixed pages, the stylesheet, and a health check.
//! `/` redirects to the default locale; an unknown locale segment is a 404.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode, Uri},
    response::{Html, IntoResponse, Json, Redirect, Response},
    routing::get,
    Router,
};
use boda_core::config::ServerConfig;
use boda_core::locale::Locale;
use boda_core::messages::Catalog;
use boda_core::route::{build_locale_path, Route, HOME};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use crate::render::{self, PageContext, STYLESHEET};

/// Shared state for page handlers.
#[derive(Clone)]
pub struct SiteState {
    catalog: Arc<Catalog>,
    site_name: Arc<str>,
    uptime: Instant,
}

impl SiteState {
    pub fn new(catalog: Catalog, site_name: &str) -> Self {
        Self {
            catalog: Arc::new(catalog),
            site_name: Arc::from(site_name),
            uptime: Instant::now(),
        }
    }
}

/// Query string understood by every page.
#[derive(Debug, Default, Deserialize)]
struct PageQuery {
    menu: Option<String>,
}

impl PageQuery {
    fn menu_open(&self) -> bool {
        self.menu.as_deref() == Some("open")
    }
}

/// `GET /`: send visitors to the default locale.
async fn root() -> Redirect {
    Redirect::temporary(&build_locale_path(Locale::DEFAULT, HOME))
}

/// `GET /healthz`: liveness with uptime.
async fn health(State(state): State<SiteState>) -> Json<Value> {
    let locales: Vec<&str> = Locale::ALL.iter().map(|l| l.as_str()).collect();
    Json(json!({
        "status": "ok",
        "uptime_secs": state.uptime.elapsed().as_secs(),
        "locales": locales,
    }))
}

/// `GET /assets/site.css`
async fn stylesheet() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/css; charset=utf-8"),
            (header::CACHE_CONTROL, "public, max-age=3600"),
        ],
        STYLESHEET,
    )
}

async fn home(
    state: State<SiteState>,
    path: Path<String>,
    query: Query<PageQuery>,
    uri: Uri,
) -> Response {
    page(state, path, query, uri, Route::Home)
}

async fn media(
    state: State<SiteState>,
    path: Path<String>,
    query: Query<PageQuery>,
    uri: Uri,
) -> Response {
    page(state, path, query, uri, Route::Media)
}

async fn rsvp(
    state: State<SiteState>,
    path: Path<String>,
    query: Query<PageQuery>,
    uri: Uri,
) -> Response {
    page(state, path, query, uri, Route::Rsvp)
}

/// Render `route` in the locale named by the first path segment.
fn page(
    State(state): State<SiteState>,
    Path(tag): Path<String>,
    Query(query): Query<PageQuery>,
    uri: Uri,
    route: Route,
) -> Response {
    let Ok(locale) = tag.parse::<Locale>() else {
        debug!("unknown locale segment '{tag}' for {}", uri.path());
        return not_found_page(&state, &uri, query.menu_open());
    };
    let ctx = PageContext::new(
        state.catalog.translator(locale),
        &state.site_name,
        uri.path(),
        Some(route),
        query.menu_open(),
    );
    Html(render::render(&ctx)).into_response()
}

/// Anything unrouted, rendered in whatever locale the path suggests.
async fn fallback(
    State(state): State<SiteState>,
    Query(query): Query<PageQuery>,
    uri: Uri,
) -> Response {
    not_found_page(&state, &uri, query.menu_open())
}

fn not_found_page(state: &SiteState, uri: &Uri, menu_open: bool) -> Response {
    let locale = Locale::from_path(uri.path());
    let ctx = PageContext::new(
        state.catalog.translator(locale),
        &state.site_name,
        uri.path(),
        None,
        menu_open,
    );
    (StatusCode::NOT_FOUND, Html(render::render(&ctx))).into_response()
}

/// Build the axum router with shared state.
pub fn build_router(state: SiteState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/healthz", get(health))
        .route("/assets/site.css", get(stylesheet))
        .route("/{locale}", get(home))
        .route("/{locale}/", get(home))
        .route("/{locale}/media", get(media))
        .route("/{locale}/rsvp", get(rsvp))
        .fallback(fallback)
        .with_state(state)
}

/// Bind and serve until Ctrl-C.
pub async fn serve(config: &ServerConfig, state: SiteState) -> anyhow::Result<()> {
    let app = build_router(state);
    let addr = config.addr();

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| anyhow::anyhow!("failed to bind to {addr}: {e}"))?;

    info!("site listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutdown signal received");
        })
        .await?;
    Ok(())
}
