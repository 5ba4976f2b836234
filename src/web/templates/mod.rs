use askama::Template;
use axum::{
    response::{Html, IntoResponse, Response},
    http::StatusCode,
};
use chrono::Datelike;

use crate::config::{Settings, SocialLink};

pub const ADMISSION_PATH: &str = "/admission";

/// Primary navigation, in display order. The admission call-to-action is
/// rendered separately.
pub const NAV_LINKS: [(&str, &str); 7] = [
    ("Home", "/"),
    ("About", "/about"),
    ("Gallery", "/gallery"),
    ("Instructors", "/instructors"),
    ("Branches", "/branches"),
    ("Announcements", "/announcements"),
    ("Rules", "/rules"),
];

#[derive(Debug, Clone)]
pub struct NavLink {
    pub name: String,
    pub path: String,
    pub active: bool,
}

// Shell data every page template carries as `layout`
#[derive(Debug, Clone)]
pub struct LayoutContext {
    pub academy_name: String,
    pub tagline: String,
    pub logo_url: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub whatsapp_url: String,
    pub social_links: Vec<SocialLink>,
    pub nav_links: Vec<NavLink>,
    pub admission_active: bool,
    pub current_path: String,
    pub menu_open: bool,
    pub menu_toggle_href: String,
    pub show_footer: bool,
    pub year: i32,
}

impl LayoutContext {
    pub fn new(settings: &Settings, path: &str, menu: Option<&str>) -> Self {
        let menu_open = menu == Some("open");
        let academy = &settings.academy;

        // Links never carry the menu flag, so following one closes the menu.
        let nav_links = NAV_LINKS
            .iter()
            .map(|(name, href)| NavLink {
                name: name.to_string(),
                path: href.to_string(),
                active: *href == path,
            })
            .collect();

        let menu_toggle_href = if menu_open {
            path.to_string()
        } else {
            format!("{}?menu=open", path)
        };

        Self {
            academy_name: academy.name.clone(),
            tagline: academy.tagline.clone(),
            logo_url: academy.logo_url.clone(),
            address: academy.address.clone(),
            phone: academy.phone.clone(),
            email: academy.email.clone(),
            whatsapp_url: academy.whatsapp_url(),
            social_links: academy.social_links.clone(),
            nav_links,
            admission_active: path == ADMISSION_PATH,
            current_path: path.to_string(),
            menu_open,
            menu_toggle_href,
            show_footer: path != ADMISSION_PATH,
            year: chrono::Utc::now().year(),
        }
    }
}

// Make askama templates work with axum
pub struct HtmlTemplate<T>(pub T);

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: Template,
{
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!("Failed to render template: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to render template: {}", err),
                ).into_response()
            }
        }
    }
}
