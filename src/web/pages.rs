use askama::Template;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};

use crate::{
    api::state::AppState,
    domain::{filter_by_query, Announcement, Branch, GalleryEvent, Instructor},
    error::Result,
    web::{
        templates::{HtmlTemplate, LayoutContext},
        PageQuery,
    },
};

const HOME_SECTION_LIMIT: usize = 3;

pub struct AnnouncementCard {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: String,
    pub has_attachment: bool,
    pub attachment_url: String,
    pub attachment_label: String,
}

impl From<&Announcement> for AnnouncementCard {
    fn from(a: &Announcement) -> Self {
        Self {
            id: a.id.clone(),
            title: a.title.clone(),
            description: a.description.clone(),
            date: a.display_date(),
            has_attachment: a.attachment_url.is_some(),
            attachment_url: a.attachment_url.clone().unwrap_or_default(),
            attachment_label: a
                .attachment_type
                .as_ref()
                .map(|t| t.label())
                .unwrap_or("Attachment")
                .to_string(),
        }
    }
}

pub struct EventCard {
    pub id: String,
    pub name: String,
    pub date: String,
    pub description: String,
    pub cover_image: String,
    pub pinned: bool,
    pub image_count: usize,
    pub video_count: usize,
}

impl From<&GalleryEvent> for EventCard {
    fn from(e: &GalleryEvent) -> Self {
        Self {
            id: e.id.clone(),
            name: e.name.clone(),
            date: e.display_date(),
            description: e.description.clone(),
            cover_image: e.cover_image().unwrap_or_default().to_string(),
            pinned: e.is_pinned,
            image_count: e.images.len(),
            video_count: e.videos.len(),
        }
    }
}

pub struct InstructorCard {
    pub id: String,
    pub name: String,
    pub designation: String,
    pub photo: String,
    pub contact: String,
    pub has_biography: bool,
    pub journey: String,
    pub achievements: Vec<String>,
}

impl From<&Instructor> for InstructorCard {
    fn from(i: &Instructor) -> Self {
        Self {
            id: i.id.clone(),
            name: i.name.clone(),
            designation: i.designation.clone(),
            photo: i.photo.clone(),
            contact: i.contact_details.clone().unwrap_or_default(),
            has_biography: i.has_biography(),
            journey: i.journey.clone().unwrap_or_default(),
            achievements: i.achievements().to_vec(),
        }
    }
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub layout: LayoutContext,
    pub announcements: Vec<AnnouncementCard>,
    pub events: Vec<EventCard>,
    pub instructors: Vec<InstructorCard>,
}

pub async fn home(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse> {
    let data = &state.service_context.data;
    let (announcements, events, instructors) = tokio::try_join!(
        data.fetch_announcements(),
        data.fetch_gallery_events(),
        data.fetch_instructors(),
    )?;

    Ok(HtmlTemplate(HomeTemplate {
        layout: LayoutContext::new(&state.settings, "/", query.menu.as_deref()),
        announcements: announcements
            .iter()
            .filter(|a| a.show_on_home)
            .take(HOME_SECTION_LIMIT)
            .map(AnnouncementCard::from)
            .collect(),
        events: events
            .iter()
            .filter(|e| e.show_on_home)
            .take(HOME_SECTION_LIMIT)
            .map(EventCard::from)
            .collect(),
        instructors: instructors
            .iter()
            .take(HOME_SECTION_LIMIT)
            .map(InstructorCard::from)
            .collect(),
    }))
}

#[derive(Debug, Clone)]
pub struct Programme {
    pub title: &'static str,
    pub description: &'static str,
}

const PROGRAMMES: [Programme; 3] = [
    Programme {
        title: "Foundational Arts",
        description: "Our core curriculum focuses on structural integrity, discipline, and essential techniques for all practitioners.",
    },
    Programme {
        title: "Advanced Mastery",
        description: "Refining combat skills through elite technical workshops and high-intensity conditioning sessions.",
    },
    Programme {
        title: "Combative Spirit",
        description: "Specialized training focusing on tactical awareness and competition-level excellence.",
    },
];

const PHILOSOPHY: &str = "Dedicated to forging spirit and strength, our academy represents excellence in martial arts training. ";

#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub layout: LayoutContext,
    pub philosophy: String,
    pub programmes: Vec<Programme>,
}

pub async fn about(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> impl IntoResponse {
    HtmlTemplate(AboutTemplate {
        layout: LayoutContext::new(&state.settings, "/about", query.menu.as_deref()),
        philosophy: PHILOSOPHY.repeat(8),
        programmes: PROGRAMMES.to_vec(),
    })
}

#[derive(Template)]
#[template(path = "rules.html")]
pub struct RulesTemplate {
    pub layout: LayoutContext,
}

pub async fn rules(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> impl IntoResponse {
    HtmlTemplate(RulesTemplate {
        layout: LayoutContext::new(&state.settings, "/rules", query.menu.as_deref()),
    })
}

#[derive(Template)]
#[template(path = "announcements.html")]
pub struct AnnouncementsTemplate {
    pub layout: LayoutContext,
    pub query: String,
    pub announcements: Vec<AnnouncementCard>,
}

pub async fn announcements(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse> {
    let all = state.service_context.data.fetch_announcements().await?;
    let search = query.search();
    let matches = filter_by_query(&all, search);

    Ok(HtmlTemplate(AnnouncementsTemplate {
        layout: LayoutContext::new(&state.settings, "/announcements", query.menu.as_deref()),
        query: search.to_string(),
        announcements: matches.iter().map(AnnouncementCard::from).collect(),
    }))
}

#[derive(Template)]
#[template(path = "instructors.html")]
pub struct InstructorsTemplate {
    pub layout: LayoutContext,
    pub query: String,
    pub instructors: Vec<InstructorCard>,
}

pub async fn instructors(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse> {
    let all = state.service_context.data.fetch_instructors().await?;
    let search = query.search();
    let matches = filter_by_query(&all, search);

    Ok(HtmlTemplate(InstructorsTemplate {
        layout: LayoutContext::new(&state.settings, "/instructors", query.menu.as_deref()),
        query: search.to_string(),
        instructors: matches.iter().map(InstructorCard::from).collect(),
    }))
}

#[derive(Template)]
#[template(path = "branches.html")]
pub struct BranchesTemplate {
    pub layout: LayoutContext,
    pub branches: Vec<Branch>,
}

pub async fn branches(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse> {
    let branches = state.service_context.data.fetch_branches().await?;

    Ok(HtmlTemplate(BranchesTemplate {
        layout: LayoutContext::new(&state.settings, "/branches", query.menu.as_deref()),
        branches,
    }))
}
