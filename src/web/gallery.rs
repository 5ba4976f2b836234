use askama::Template;
use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::{
    api::state::AppState,
    domain::{filter_by_query, GalleryViewer, PlayerState},
    error::Result,
    web::{
        pages::EventCard,
        templates::{HtmlTemplate, LayoutContext},
        PageQuery,
    },
};

#[derive(Template)]
#[template(path = "gallery.html")]
pub struct GalleryTemplate {
    pub layout: LayoutContext,
    pub query: String,
    pub events: Vec<EventCard>,
    pub total: usize,
}

// GET /gallery
pub async fn gallery(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse> {
    let all = state.service_context.data.fetch_gallery_events().await?;
    let search = query.search();
    let matches = filter_by_query(&all, search);

    Ok(HtmlTemplate(GalleryTemplate {
        layout: LayoutContext::new(&state.settings, "/gallery", query.menu.as_deref()),
        query: search.to_string(),
        events: matches.iter().map(EventCard::from).collect(),
        total: all.len(),
    }))
}

/// Viewer position. Values arrive as strings so a malformed number falls
/// back to the first item instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct ViewerQuery {
    pub item: Option<String>,
    pub lightbox: Option<String>,
    pub muted: Option<String>,
    pub paused: Option<String>,
    pub at: Option<String>,
    pub menu: Option<String>,
}

impl ViewerQuery {
    fn item(&self) -> usize {
        self.item
            .as_deref()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(0)
    }

    fn flag(value: &Option<String>) -> bool {
        matches!(value.as_deref(), Some("1") | Some("true"))
    }

    fn player(&self) -> PlayerState {
        let mut player = PlayerState::with_muted(Self::flag(&self.muted));
        if Self::flag(&self.paused) {
            player.toggle_play();
        }
        if let Some(percent) = self.at.as_deref().and_then(|raw| raw.parse::<f64>().ok()) {
            player.scrub(percent);
        }
        player
    }
}

/// One clickable slice of the progress bar.
pub struct SeekMark {
    pub percent: u32,
    pub href: String,
    pub passed: bool,
}

pub struct Thumbnail {
    pub index: usize,
    pub url: String,
    pub is_video: bool,
    pub selected: bool,
}

pub struct OtherEvent {
    pub id: String,
    pub name: String,
}

#[derive(Template)]
#[template(path = "gallery_detail.html")]
pub struct GalleryDetailTemplate {
    pub layout: LayoutContext,
    pub event: EventCard,
    pub has_media: bool,
    pub current_url: String,
    pub current_is_video: bool,
    pub index: usize,
    pub position: usize,
    pub total: usize,
    pub next_index: usize,
    pub previous_index: usize,
    pub thumbnails: Vec<Thumbnail>,
    pub lightbox: bool,
    pub player: PlayerState,
    pub muted_param: &'static str,
    pub toggle_play_href: String,
    pub toggle_mute_href: String,
    pub seek_marks: Vec<SeekMark>,
    pub other_events: Vec<OtherEvent>,
}

// GET /gallery/:id
pub async fn gallery_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<ViewerQuery>,
) -> Result<Response> {
    let events = state.service_context.data.fetch_gallery_events().await?;
    let Some(event) = events.iter().find(|e| e.id == id) else {
        tracing::debug!("Unknown gallery event {}", id);
        return Ok(Redirect::to("/gallery").into_response());
    };

    let viewer = GalleryViewer::open_at(event, query.item());
    let current = viewer.current();
    let current_is_video = current.map(|m| m.is_video()).unwrap_or(false);

    let mut player = query.player();
    if !current_is_video {
        player.reset_for_still();
    }

    let thumbnails = viewer
        .items()
        .iter()
        .enumerate()
        .map(|(index, item)| Thumbnail {
            index,
            url: item.url.clone(),
            is_video: item.is_video(),
            selected: index == viewer.index(),
        })
        .collect();

    let other_events = events
        .iter()
        .filter(|e| e.id != event.id)
        .map(|e| OtherEvent {
            id: e.id.clone(),
            name: e.name.clone(),
        })
        .collect();

    // The lightbox only ever shows stills.
    let lightbox = ViewerQuery::flag(&query.lightbox) && current.is_some() && !current_is_video;

    let path = format!("/gallery/{}", event.id);
    let muted_param = if player.muted { "1" } else { "0" };
    let href = |player: &PlayerState| format!("{}?item={}&{}", path, viewer.index(), player.query());

    let mut toggled = player.clone();
    toggled.toggle_play();
    let toggle_play_href = href(&toggled);

    let mut toggled = player.clone();
    toggled.toggle_mute();
    let toggle_mute_href = href(&toggled);

    let seek_marks = (0..10)
        .map(|step| {
            let percent = step * 10;
            let mut seeked = player.clone();
            seeked.scrub(f64::from(percent));
            SeekMark {
                percent,
                href: href(&seeked),
                passed: f64::from(percent) < player.progress,
            }
        })
        .collect();

    Ok(HtmlTemplate(GalleryDetailTemplate {
        layout: LayoutContext::new(&state.settings, &path, query.menu.as_deref()),
        event: EventCard::from(event),
        has_media: !viewer.is_empty(),
        current_url: current.map(|m| m.url.clone()).unwrap_or_default(),
        current_is_video,
        index: viewer.index(),
        position: viewer.index() + 1,
        total: viewer.len(),
        next_index: viewer.next_index(),
        previous_index: viewer.previous_index(),
        thumbnails,
        lightbox,
        player,
        muted_param,
        toggle_play_href,
        toggle_mute_href,
        seek_marks,
        other_events,
    })
    .into_response())
}
