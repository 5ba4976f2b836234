pub mod admission;
pub mod gallery;
pub mod pages;
pub mod templates;
pub mod uploads;

use axum::{
    Router,
    extract::{DefaultBodyLimit, Request, State},
    middleware::{self, Next},
    response::{IntoResponse, Redirect, Response},
    routing::get,
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;
use tower_http::services::ServeDir;

use crate::{
    admission::{AdmissionSessions, ADMISSION_COOKIE},
    api::state::AppState,
};

/// Query parameters every content page understands.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub q: Option<String>,
    pub menu: Option<String>,
}

impl PageQuery {
    pub fn search(&self) -> &str {
        self.q.as_deref().unwrap_or("")
    }
}

pub fn create_web_routes(state: AppState) -> Router {
    // Leaving the wizard for any of these pages abandons the application.
    // The rules stay outside: the payment step opens them in a new tab.
    let pages = Router::new()
        .route("/", get(pages::home))
        .route("/about", get(pages::about))
        .route("/gallery", get(gallery::gallery))
        .route("/gallery/:id", get(gallery::gallery_detail))
        .route("/announcements", get(pages::announcements))
        .route("/instructors", get(pages::instructors))
        .route("/branches", get(pages::branches))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            discard_admission_session,
        ));

    let admission = Router::new()
        .route(
            "/admission",
            get(admission::wizard_page).post(admission::wizard_step),
        )
        .layer(DefaultBodyLimit::max(state.settings.admission.max_upload_bytes));

    Router::new()
        .merge(pages)
        .route("/rules", get(pages::rules))
        .merge(admission)
        .nest_service("/static", ServeDir::new("static"))
        .fallback(redirect_home)
        .with_state(state)
}

async fn discard_admission_session(
    State(state): State<AppState>,
    jar: CookieJar,
    request: Request,
    next: Next,
) -> Response {
    let Some(token) = jar.get(ADMISSION_COOKIE).map(|c| c.value().to_string()) else {
        return next.run(request).await;
    };

    state.service_context.admission_sessions.discard(&token).await;
    let response = next.run(request).await;
    (jar.add(AdmissionSessions::removal_cookie()), response).into_response()
}

async fn redirect_home() -> Redirect {
    Redirect::to("/")
}
