use axum::{http::StatusCode, Json, response::IntoResponse};
use serde_json::json;

pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    })))
}

pub async fn api_info() -> impl IntoResponse {
    Json(json!({
        "name": "Academy API",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Content and admissions for the academy website",
        "status": "operational",
        "endpoints": {
            "health": "/health",
            "announcements": "/api/announcements",
            "gallery": "/api/gallery",
            "gallery_event": "/api/gallery/{id}",
            "instructors": "/api/instructors",
            "branches": "/api/branches",
            "admissions": "/api/admissions"
        }
    }))
}
