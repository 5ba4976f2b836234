use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::{
    api::state::AppState,
    domain::{filter_by_query, AdmissionFormData, Announcement, Branch, GalleryEvent, Instructor},
    error::{AppError, Result},
    service::AdmissionReceipt,
};

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

impl SearchQuery {
    fn query(&self) -> &str {
        self.q.as_deref().unwrap_or("")
    }
}

pub async fn list_announcements(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<Vec<Announcement>>> {
    let all = state.service_context.data.fetch_announcements().await?;
    Ok(Json(filter_by_query(&all, params.query())))
}

pub async fn list_gallery_events(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<Vec<GalleryEvent>>> {
    let all = state.service_context.data.fetch_gallery_events().await?;
    Ok(Json(filter_by_query(&all, params.query())))
}

pub async fn get_gallery_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<GalleryEvent>> {
    let events = state.service_context.data.fetch_gallery_events().await?;
    events
        .into_iter()
        .find(|e| e.id == id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Gallery event {} not found", id)))
}

pub async fn list_instructors(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<Vec<Instructor>>> {
    let all = state.service_context.data.fetch_instructors().await?;
    Ok(Json(filter_by_query(&all, params.query())))
}

pub async fn list_branches(
    State(state): State<AppState>,
) -> Result<Json<Vec<Branch>>> {
    let branches = state.service_context.data.fetch_branches().await?;
    Ok(Json(branches))
}

/// Accepts a complete admission record. Unlike the wizard, no gate is
/// applied here: the record is passed straight to the submission stub.
pub async fn submit_admission(
    State(state): State<AppState>,
    Json(form): Json<AdmissionFormData>,
) -> Result<Json<AdmissionReceipt>> {
    let receipt = state.service_context.data.submit_admission(form).await?;
    Ok(Json(receipt))
}
