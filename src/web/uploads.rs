use axum::extract::Multipart;

use crate::{
    domain::{Attachment, StepInput, WizardAction},
    error::{AppError, Result},
};

/// What one admission page posted: the button that was pressed and the
/// step's field values.
#[derive(Debug, Default)]
pub struct WizardSubmission {
    pub action: Option<WizardAction>,
    pub input: StepInput,
}

/// Read a wizard page's multipart body. Files are kept in memory; any part
/// with a file name is treated as an upload, everything else as text.
pub async fn read_wizard_form(multipart: &mut Multipart) -> Result<WizardSubmission> {
    let mut submission = WizardSubmission::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or("").to_string();
        if name.is_empty() {
            continue;
        }

        if name == "action" {
            let value = field.text().await?;
            submission.action = WizardAction::parse(&value);
            if submission.action.is_none() {
                return Err(AppError::BadRequest(format!("Unknown wizard action: {}", value)));
            }
            continue;
        }

        match field.file_name().map(str::to_string) {
            Some(file_name) => {
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await?;
                // An untouched file input still posts an empty, unnamed part
                if !file_name.is_empty() && !bytes.is_empty() {
                    tracing::debug!(field = %name, file = %file_name, size = bytes.len(), "Received admission upload");
                    submission
                        .input
                        .insert_file(name, Attachment::new(file_name, content_type, bytes));
                }
            }
            None => {
                let value = field.text().await?;
                submission.input.insert_text(name, value);
            }
        }
    }

    Ok(submission)
}
