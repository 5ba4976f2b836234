pub mod handlers;
pub mod state;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    trace::TraceLayer,
};
use std::sync::Arc;

use crate::{
    config::Settings,
    service::ServiceContext,
    web,
};
use state::AppState;

/// The whole site: JSON endpoints plus the server-rendered pages.
pub fn create_app(
    service_context: Arc<ServiceContext>,
    settings: Arc<Settings>,
) -> Router {
    let app_state = AppState::new(service_context, settings);

    Router::new()
        // Health and service info
        .route("/health", get(handlers::root::health_check))
        .route("/api", get(handlers::root::api_info))

        // Content and admissions
        .nest("/api", api_routes())

        .with_state(app_state.clone())

        // Pages own the fallback
        .merge(web::create_web_routes(app_state))

        // Middleware
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/announcements", get(handlers::content::list_announcements))
        .route("/gallery", get(handlers::content::list_gallery_events))
        .route("/gallery/:id", get(handlers::content::get_gallery_event))
        .route("/instructors", get(handlers::content::list_instructors))
        .route("/branches", get(handlers::content::list_branches))
        .route("/admissions", post(handlers::content::submit_admission))
}
