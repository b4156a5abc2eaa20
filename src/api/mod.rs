use axum::{
    Router,
    extract::OriginalUri,
    http::HeaderValue,
    middleware,
    routing::{get, post},
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::Config;
use crate::db::Store;
use crate::services::{CatalogService, DisabledCatalogService, SeaOrmCatalogService};

mod creators;
mod episodes;
mod error;
mod observability;
mod seed;
mod series;
mod system;
mod types;
pub mod validation;

pub use error::ApiError;
pub use types::*;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,

    /// `None` when `database.enabled` is false.
    pub store: Option<Store>,

    pub catalog: Arc<dyn CatalogService>,

    pub start_time: std::time::Instant,

    pub prometheus_handle: Option<PrometheusHandle>,
}

impl AppState {
    #[must_use]
    pub const fn store(&self) -> Option<&Store> {
        self.store.as_ref()
    }

    #[must_use]
    pub fn catalog(&self) -> &dyn CatalogService {
        self.catalog.as_ref()
    }
}

/// Opens the storage handle (unless disabled) and wires the services to it.
pub async fn create_app_state(
    config: Config,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<Arc<AppState>> {
    let (store, catalog): (Option<Store>, Arc<dyn CatalogService>) = if config.database.enabled {
        let store = Store::with_pool_options(
            &config.database.url,
            config.database.max_connections,
            config.database.min_connections,
        )
        .await?;
        let catalog: Arc<dyn CatalogService> =
            Arc::new(SeaOrmCatalogService::new(Arc::new(store.clone())));
        (Some(store), catalog)
    } else {
        warn!("Database disabled; catalog endpoints will answer 503");
        let catalog: Arc<dyn CatalogService> = Arc::new(DisabledCatalogService);
        (None, catalog)
    };

    Ok(Arc::new(AppState {
        config,
        store,
        catalog,
        start_time: std::time::Instant::now(),
        prometheus_handle,
    }))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    // A literal `*` cannot be combined with credentials, so mirror instead.
    if origins.iter().any(|o| o == "*") {
        layer.allow_origin(AllowOrigin::mirror_request())
    } else {
        let origins: Vec<HeaderValue> = origins.iter().filter_map(|s| s.parse().ok()).collect();
        info!("CORS restricted to {} origin(s)", origins.len());
        layer.allow_origin(origins)
    }
}

async fn not_found(OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::not_found("Route", uri.path())
}

pub fn router(state: Arc<AppState>) -> Router {
    let api_router = Router::new()
        .route(
            "/series",
            get(series::list_series).post(series::create_series),
        )
        .route("/series/{series_id}", get(series::get_series))
        .route("/series/{series_id}/episodes", get(episodes::list_episodes))
        .route("/episodes", post(episodes::create_episode))
        .route(
            "/creators",
            get(creators::list_creators).post(creators::create_creator),
        )
        .route("/seed", post(seed::seed_sample_data));

    let cors = cors_layer(&state.config.server.cors_allowed_origins);

    Router::new()
        .route("/", get(system::read_root))
        .route("/test", get(system::test_database))
        .route("/metrics", get(observability::get_metrics))
        .nest("/api", api_router)
        .fallback(not_found)
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(observability::track_requests))
}
