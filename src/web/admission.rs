use askama::Template;
use axum::{
    extract::{Multipart, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;

use crate::{
    admission::{AdmissionSessions, ADMISSION_COOKIE},
    api::state::AppState,
    config::Settings,
    domain::{AdmissionFormData, AdmissionStep, AdmissionWizard, Transition, WizardError},
    error::{AppError, Result},
    web::{
        templates::{HtmlTemplate, LayoutContext, ADMISSION_PATH},
        uploads::read_wizard_form,
        PageQuery,
    },
};

const UPLOAD_ACCEPT: &str = "image/*,.pdf";

pub struct StepMarker {
    pub number: usize,
    pub label: &'static str,
    pub reached: bool,
    pub current: bool,
}

pub struct FileSlot {
    pub name: &'static str,
    pub label: &'static str,
    pub required: bool,
    pub has_file: bool,
    pub file_name: String,
    pub size_label: String,
}

#[derive(Template)]
#[template(path = "admission/wizard.html")]
pub struct WizardTemplate {
    pub layout: LayoutContext,
    pub markers: Vec<StepMarker>,
    pub step: &'static str,
    pub ordinal: usize,
    pub progress_percent: usize,
    pub is_first: bool,
    pub is_last: bool,
    pub next_label: &'static str,
    pub form: AdmissionFormData,
    pub files: Vec<FileSlot>,
    pub upload_accept: &'static str,
    pub payment_initiated: bool,
    pub can_submit: bool,
    pub missing: Vec<&'static str>,
    pub upload_error: Option<String>,
    pub fee: String,
    pub upi_link: String,
    pub qr_image_url: String,
}

impl WizardTemplate {
    fn new(settings: &Settings, wizard: &AdmissionWizard, menu: Option<&str>, missing: Vec<&'static str>) -> Self {
        let step = wizard.step();
        let form = wizard.form();

        let markers = AdmissionStep::ALL
            .iter()
            .map(|s| StepMarker {
                number: s.ordinal() + 1,
                label: s.label(),
                reached: s.ordinal() <= step.ordinal(),
                current: *s == step,
            })
            .collect();

        let files = [
            ("photo_file", "Student Photo", true),
            ("aadhaar_file", "Aadhaar Card", true),
            ("additional_certificates", "Additional Certificates", false),
        ]
        .into_iter()
        .map(|(name, label, required)| {
            let attachment = form.attachment(name);
            FileSlot {
                name,
                label,
                required,
                has_file: attachment.is_some(),
                file_name: attachment.map(|a| a.file_name.clone()).unwrap_or_default(),
                size_label: attachment.map(|a| a.size_label()).unwrap_or_default(),
            }
        })
        .collect();

        Self {
            layout: LayoutContext::new(settings, ADMISSION_PATH, menu),
            markers,
            step: step.as_str(),
            ordinal: step.ordinal(),
            progress_percent: step.progress_percent(),
            is_first: step.is_first(),
            is_last: step.is_last(),
            next_label: if step.is_first() { "Start Form" } else { "Next" },
            form: form.clone(),
            files,
            upload_accept: UPLOAD_ACCEPT,
            payment_initiated: wizard.payment_initiated(),
            can_submit: wizard.can_submit(),
            missing,
            upload_error: None,
            fee: settings.payment.display_amount(),
            upi_link: settings.payment.upi_link(),
            qr_image_url: settings.payment.qr_image_url(),
        }
    }
}

#[derive(Template)]
#[template(path = "admission/success.html")]
pub struct SuccessTemplate {
    pub layout: LayoutContext,
    pub redirect_delay_secs: u64,
    pub reference: String,
}

// GET /admission
pub async fn wizard_page(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(query): Query<PageQuery>,
) -> Response {
    let sessions = &state.service_context.admission_sessions;
    let token = jar.get(ADMISSION_COOKIE).map(|c| c.value().to_string());
    let (wizard, issued) = sessions.resume_or_start(token.as_deref()).await;

    let page = HtmlTemplate(WizardTemplate::new(
        &state.settings,
        &wizard,
        query.menu.as_deref(),
        Vec::new(),
    ));

    match issued {
        Some(token) => (jar.add(sessions.session_cookie(&token)), page).into_response(),
        None => page.into_response(),
    }
}

// POST /admission
pub async fn wizard_step(
    State(state): State<AppState>,
    jar: CookieJar,
    mut multipart: Multipart,
) -> Result<Response> {
    let sessions = &state.service_context.admission_sessions;
    let token = jar.get(ADMISSION_COOKIE).map(|c| c.value().to_string());

    let resumed = match token.as_deref() {
        Some(token) => sessions.resume(token).await,
        None => None,
    };
    let (Some(token), Some(mut wizard)) = (token, resumed) else {
        // Expired or never started: begin again at the first step.
        tracing::debug!("Admission post without a live session");
        let (_, token) = sessions.start().await;
        let jar = jar.add(sessions.session_cookie(&token));
        return Ok((jar, Redirect::to(ADMISSION_PATH)).into_response());
    };

    let submission = match read_wizard_form(&mut multipart).await {
        Ok(submission) => submission,
        Err(AppError::PayloadTooLarge(reason)) => {
            tracing::debug!("Admission upload rejected: {}", reason);
            let mut page = WizardTemplate::new(&state.settings, &wizard, None, Vec::new());
            page.upload_error = Some(format!(
                "Your files were too large. Uploads must total under {}.",
                upload_limit_label(state.settings.admission.max_upload_bytes)
            ));
            return Ok((StatusCode::PAYLOAD_TOO_LARGE, HtmlTemplate(page)).into_response());
        }
        Err(e) => {
            tracing::debug!("Unreadable admission post: {}", e);
            return Ok(Redirect::to(ADMISSION_PATH).into_response());
        }
    };
    wizard.apply_input(&submission.input);

    let Some(action) = submission.action else {
        sessions.update(&token, wizard).await;
        return Ok(Redirect::to(ADMISSION_PATH).into_response());
    };

    match wizard.transition(action) {
        Ok(Transition::ReadyToSubmit(form)) => {
            let receipt = state.service_context.data.submit_admission(form).await?;
            sessions.discard(&token).await;

            let page = HtmlTemplate(SuccessTemplate {
                layout: LayoutContext::new(&state.settings, ADMISSION_PATH, None),
                redirect_delay_secs: state.settings.admission.redirect_delay_secs,
                reference: receipt.reference.to_string(),
            });
            Ok((jar.add(AdmissionSessions::removal_cookie()), page).into_response())
        }
        Ok(Transition::Moved(step)) => {
            tracing::debug!(step = step.as_str(), "Admission wizard moved");
            sessions.update(&token, wizard).await;
            Ok(Redirect::to(ADMISSION_PATH).into_response())
        }
        Ok(Transition::PaymentInitiated) => {
            sessions.update(&token, wizard).await;
            Ok(Redirect::to(ADMISSION_PATH).into_response())
        }
        Err(WizardError::SubmissionBlocked(missing)) => {
            // Keep what was entered and show what is still outstanding.
            sessions.update(&token, wizard.clone()).await;
            let missing = missing.iter().map(|m| m.description()).collect();
            Ok(HtmlTemplate(WizardTemplate::new(&state.settings, &wizard, None, missing)).into_response())
        }
        Err(e) => {
            tracing::debug!("Ignored admission action: {}", e);
            sessions.update(&token, wizard).await;
            Ok(Redirect::to(ADMISSION_PATH).into_response())
        }
    }
}

fn upload_limit_label(bytes: usize) -> String {
    const MIB: usize = 1024 * 1024;
    if bytes >= MIB {
        format!("{} MB", bytes / MIB)
    } else {
        format!("{} KB", (bytes / 1024).max(1))
    }
}
