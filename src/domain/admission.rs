use std::collections::HashMap;

use axum::body::Bytes;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// Steps
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdmissionStep {
    #[default]
    Info,
    Personal,
    Family,
    Health,
    Documents,
    Payment,
}

impl AdmissionStep {
    pub const ALL: [AdmissionStep; 6] = [
        AdmissionStep::Info,
        AdmissionStep::Personal,
        AdmissionStep::Family,
        AdmissionStep::Health,
        AdmissionStep::Documents,
        AdmissionStep::Payment,
    ];

    pub fn ordinal(self) -> usize {
        match self {
            AdmissionStep::Info => 0,
            AdmissionStep::Personal => 1,
            AdmissionStep::Family => 2,
            AdmissionStep::Health => 3,
            AdmissionStep::Documents => 4,
            AdmissionStep::Payment => 5,
        }
    }

    pub fn from_ordinal(ordinal: usize) -> Option<Self> {
        Self::ALL.get(ordinal).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            AdmissionStep::Info => "Info",
            AdmissionStep::Personal => "Personal",
            AdmissionStep::Family => "Family",
            AdmissionStep::Health => "Health",
            AdmissionStep::Documents => "Documents",
            AdmissionStep::Payment => "Payment",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AdmissionStep::Info => "info",
            AdmissionStep::Personal => "personal",
            AdmissionStep::Family => "family",
            AdmissionStep::Health => "health",
            AdmissionStep::Documents => "documents",
            AdmissionStep::Payment => "payment",
        }
    }

    pub fn next(self) -> Option<Self> {
        Self::from_ordinal(self.ordinal() + 1)
    }

    pub fn previous(self) -> Option<Self> {
        self.ordinal().checked_sub(1).and_then(Self::from_ordinal)
    }

    pub fn is_first(self) -> bool {
        self == AdmissionStep::Info
    }

    pub fn is_last(self) -> bool {
        self == AdmissionStep::Payment
    }

    pub fn progress_percent(self) -> usize {
        self.ordinal() * 100 / (Self::ALL.len() - 1)
    }

    /// Text inputs rendered on this step, by form field name.
    pub fn text_fields(self) -> &'static [&'static str] {
        match self {
            AdmissionStep::Info => &[],
            AdmissionStep::Personal => &[
                "student_full_name",
                "dob",
                "gender",
                "blood_group",
                "aadhaar_number",
                "permanent_address",
            ],
            AdmissionStep::Family => &[
                "father_first_name",
                "father_contact",
                "mother_first_name",
                "mother_contact",
                "guardian_full_name",
            ],
            AdmissionStep::Health => &["previous_martial_arts_exp", "medical_concerns"],
            AdmissionStep::Documents => &[],
            AdmissionStep::Payment => &["utr_number"],
        }
    }

    /// File inputs rendered on this step.
    pub fn file_fields(self) -> &'static [&'static str] {
        match self {
            AdmissionStep::Documents => &["photo_file", "aadhaar_file", "additional_certificates"],
            _ => &[],
        }
    }

    /// Checkboxes rendered on this step. An unchecked box is simply absent
    /// from the submitted form.
    pub fn checkbox_fields(self) -> &'static [&'static str] {
        match self {
            AdmissionStep::Payment => &["rules_checked", "declaration_checked"],
            _ => &[],
        }
    }
}

/// Fields carried by the admission record that no step renders yet.
pub const RESERVED_FIELDS: &[&str] = &[
    "marital_status",
    "pin_code",
    "personal_contact",
    "personal_email",
    "father_email",
    "mother_email",
    "spouse_name",
    "spouse_contact",
    "spouse_email",
    "alternate_contact",
    "previous_sports_exp",
    "national_participation",
    "merit_details",
    "medical_insurance",
];

// =============================================================================
// Form data
// =============================================================================

/// An uploaded document, held in memory only for the life of the application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub file_name: String,
    pub content_type: Option<String>,
    pub size: usize,
    #[serde(skip)]
    pub bytes: Bytes,
}

impl Attachment {
    pub fn new(file_name: impl Into<String>, content_type: Option<String>, bytes: Bytes) -> Self {
        Self {
            file_name: file_name.into(),
            content_type,
            size: bytes.len(),
            bytes,
        }
    }

    pub fn size_label(&self) -> String {
        format!("{:.1} KB", self.size as f64 / 1024.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AdmissionFormData {
    // Identity
    pub student_full_name: String,
    pub dob: String,
    pub gender: String,
    pub blood_group: String,
    pub marital_status: String,
    pub permanent_address: String,
    pub pin_code: String,
    pub aadhaar_number: String,
    pub photo_file: Option<Attachment>,
    pub aadhaar_file: Option<Attachment>,

    // Family and contact
    pub father_first_name: String,
    pub father_contact: String,
    pub father_email: String,
    pub mother_first_name: String,
    pub mother_contact: String,
    pub mother_email: String,
    pub personal_contact: String,
    pub personal_email: String,
    pub spouse_name: String,
    pub spouse_contact: String,
    pub spouse_email: String,
    pub guardian_full_name: String,
    pub alternate_contact: String,

    // Health and history
    pub medical_concerns: String,
    pub previous_sports_exp: String,
    pub previous_martial_arts_exp: String,
    pub national_participation: String,
    pub merit_details: String,
    pub medical_insurance: String,
    pub additional_certificates: Option<Attachment>,

    // Confirmation
    pub declaration_checked: bool,
    pub rules_checked: bool,
    pub utr_number: String,
}

impl Default for AdmissionFormData {
    fn default() -> Self {
        Self {
            student_full_name: String::new(),
            dob: String::new(),
            gender: "Male".to_string(),
            blood_group: String::new(),
            marital_status: "Single".to_string(),
            permanent_address: String::new(),
            pin_code: String::new(),
            aadhaar_number: String::new(),
            photo_file: None,
            aadhaar_file: None,
            father_first_name: String::new(),
            father_contact: String::new(),
            father_email: String::new(),
            mother_first_name: String::new(),
            mother_contact: String::new(),
            mother_email: String::new(),
            personal_contact: String::new(),
            personal_email: String::new(),
            spouse_name: String::new(),
            spouse_contact: String::new(),
            spouse_email: String::new(),
            guardian_full_name: String::new(),
            alternate_contact: String::new(),
            medical_concerns: String::new(),
            previous_sports_exp: String::new(),
            previous_martial_arts_exp: String::new(),
            national_participation: String::new(),
            merit_details: String::new(),
            medical_insurance: String::new(),
            additional_certificates: None,
            declaration_checked: false,
            rules_checked: false,
            utr_number: String::new(),
        }
    }
}

impl AdmissionFormData {
    pub fn text_field(&self, name: &str) -> Option<&str> {
        let value = match name {
            "student_full_name" => &self.student_full_name,
            "dob" => &self.dob,
            "gender" => &self.gender,
            "blood_group" => &self.blood_group,
            "marital_status" => &self.marital_status,
            "permanent_address" => &self.permanent_address,
            "pin_code" => &self.pin_code,
            "aadhaar_number" => &self.aadhaar_number,
            "father_first_name" => &self.father_first_name,
            "father_contact" => &self.father_contact,
            "father_email" => &self.father_email,
            "mother_first_name" => &self.mother_first_name,
            "mother_contact" => &self.mother_contact,
            "mother_email" => &self.mother_email,
            "personal_contact" => &self.personal_contact,
            "personal_email" => &self.personal_email,
            "spouse_name" => &self.spouse_name,
            "spouse_contact" => &self.spouse_contact,
            "spouse_email" => &self.spouse_email,
            "guardian_full_name" => &self.guardian_full_name,
            "alternate_contact" => &self.alternate_contact,
            "medical_concerns" => &self.medical_concerns,
            "previous_sports_exp" => &self.previous_sports_exp,
            "previous_martial_arts_exp" => &self.previous_martial_arts_exp,
            "national_participation" => &self.national_participation,
            "merit_details" => &self.merit_details,
            "medical_insurance" => &self.medical_insurance,
            "utr_number" => &self.utr_number,
            _ => return None,
        };
        Some(value.as_str())
    }

    fn text_field_mut(&mut self, name: &str) -> Option<&mut String> {
        let value = match name {
            "student_full_name" => &mut self.student_full_name,
            "dob" => &mut self.dob,
            "gender" => &mut self.gender,
            "blood_group" => &mut self.blood_group,
            "marital_status" => &mut self.marital_status,
            "permanent_address" => &mut self.permanent_address,
            "pin_code" => &mut self.pin_code,
            "aadhaar_number" => &mut self.aadhaar_number,
            "father_first_name" => &mut self.father_first_name,
            "father_contact" => &mut self.father_contact,
            "father_email" => &mut self.father_email,
            "mother_first_name" => &mut self.mother_first_name,
            "mother_contact" => &mut self.mother_contact,
            "mother_email" => &mut self.mother_email,
            "personal_contact" => &mut self.personal_contact,
            "personal_email" => &mut self.personal_email,
            "spouse_name" => &mut self.spouse_name,
            "spouse_contact" => &mut self.spouse_contact,
            "spouse_email" => &mut self.spouse_email,
            "guardian_full_name" => &mut self.guardian_full_name,
            "alternate_contact" => &mut self.alternate_contact,
            "medical_concerns" => &mut self.medical_concerns,
            "previous_sports_exp" => &mut self.previous_sports_exp,
            "previous_martial_arts_exp" => &mut self.previous_martial_arts_exp,
            "national_participation" => &mut self.national_participation,
            "merit_details" => &mut self.merit_details,
            "medical_insurance" => &mut self.medical_insurance,
            "utr_number" => &mut self.utr_number,
            _ => return None,
        };
        Some(value)
    }

    pub fn attachment(&self, name: &str) -> Option<&Attachment> {
        match name {
            "photo_file" => self.photo_file.as_ref(),
            "aadhaar_file" => self.aadhaar_file.as_ref(),
            "additional_certificates" => self.additional_certificates.as_ref(),
            _ => None,
        }
    }

    fn attachment_mut(&mut self, name: &str) -> Option<&mut Option<Attachment>> {
        match name {
            "photo_file" => Some(&mut self.photo_file),
            "aadhaar_file" => Some(&mut self.aadhaar_file),
            "additional_certificates" => Some(&mut self.additional_certificates),
            _ => None,
        }
    }

    fn checkbox_mut(&mut self, name: &str) -> Option<&mut bool> {
        match name {
            "rules_checked" => Some(&mut self.rules_checked),
            "declaration_checked" => Some(&mut self.declaration_checked),
            _ => None,
        }
    }

    /// A new snapshot with the fields `step` renders taken from `input`.
    /// Fields belonging to other steps are carried over untouched, and a
    /// text or file input that was not submitted keeps its previous value.
    pub fn with_step_input(&self, step: AdmissionStep, input: &StepInput) -> Self {
        let mut next = self.clone();

        for name in step.text_fields() {
            if let (Some(value), Some(slot)) = (input.text(name), next.text_field_mut(name)) {
                *slot = value.to_string();
            }
        }

        for name in step.file_fields() {
            if let (Some(file), Some(slot)) = (input.file(name), next.attachment_mut(name)) {
                *slot = Some(file.clone());
            }
        }

        for name in step.checkbox_fields() {
            if let Some(slot) = next.checkbox_mut(name) {
                *slot = input.is_checked(name);
            }
        }

        next
    }
}

/// The values one wizard page posted back.
#[derive(Debug, Clone, Default)]
pub struct StepInput {
    text: HashMap<String, String>,
    files: HashMap<String, Attachment>,
}

impl StepInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert_text(name, value);
        self
    }

    pub fn with_file(mut self, name: impl Into<String>, file: Attachment) -> Self {
        self.insert_file(name, file);
        self
    }

    pub fn insert_text(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.text.insert(name.into(), value.into());
    }

    /// Empty file inputs (nothing picked) are ignored.
    pub fn insert_file(&mut self, name: impl Into<String>, file: Attachment) {
        if !file.file_name.is_empty() {
            self.files.insert(name.into(), file);
        }
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.text.get(name).map(String::as_str)
    }

    pub fn file(&self, name: &str) -> Option<&Attachment> {
        self.files.get(name)
    }

    pub fn is_checked(&self, name: &str) -> bool {
        self.text.contains_key(name)
    }
}

// =============================================================================
// Wizard
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardAction {
    Next,
    Back,
    InitiatePayment,
    Submit,
}

impl WizardAction {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "next" => Some(WizardAction::Next),
            "back" => Some(WizardAction::Back),
            "initiate_payment" => Some(WizardAction::InitiatePayment),
            "submit" => Some(WizardAction::Submit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRequirement {
    RulesAccepted,
    DeclarationAccepted,
    TransactionReference,
}

impl SubmitRequirement {
    pub fn description(&self) -> &'static str {
        match self {
            SubmitRequirement::RulesAccepted => "Accept the rules and regulations",
            SubmitRequirement::DeclarationAccepted => "Confirm the documents are authentic",
            SubmitRequirement::TransactionReference => "Enter the transaction reference (UTR)",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WizardError {
    #[error("already at the final step")]
    NoNextStep,
    #[error("already at the first step")]
    NoPreviousStep,
    #[error("payment is only handled on the final step")]
    NotAtPaymentStep,
    #[error("submission blocked: {0:?}")]
    SubmissionBlocked(Vec<SubmitRequirement>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    Moved(AdmissionStep),
    PaymentInitiated,
    /// The gate passed; this snapshot is what gets submitted.
    ReadyToSubmit(AdmissionFormData),
}

#[derive(Debug, Clone, Default)]
pub struct AdmissionWizard {
    step: AdmissionStep,
    form: AdmissionFormData,
    payment_initiated: bool,
}

impl AdmissionWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> AdmissionStep {
        self.step
    }

    pub fn form(&self) -> &AdmissionFormData {
        &self.form
    }

    pub fn payment_initiated(&self) -> bool {
        self.payment_initiated
    }

    /// Record what the current step's page posted back.
    pub fn apply_input(&mut self, input: &StepInput) {
        self.form = self.form.with_step_input(self.step, input);
    }

    pub fn next(&mut self) -> Result<AdmissionStep, WizardError> {
        let next = self.step.next().ok_or(WizardError::NoNextStep)?;
        self.step = next;
        Ok(next)
    }

    pub fn back(&mut self) -> Result<AdmissionStep, WizardError> {
        let previous = self.step.previous().ok_or(WizardError::NoPreviousStep)?;
        self.step = previous;
        Ok(previous)
    }

    /// Reveal the payment instructions. Once set this never resets.
    pub fn initiate_payment(&mut self) -> Result<(), WizardError> {
        if !self.step.is_last() {
            return Err(WizardError::NotAtPaymentStep);
        }
        self.payment_initiated = true;
        Ok(())
    }

    pub fn missing_requirements(&self) -> Vec<SubmitRequirement> {
        let mut missing = Vec::new();
        if !self.form.rules_checked {
            missing.push(SubmitRequirement::RulesAccepted);
        }
        if !self.form.declaration_checked {
            missing.push(SubmitRequirement::DeclarationAccepted);
        }
        if self.form.utr_number.is_empty() {
            missing.push(SubmitRequirement::TransactionReference);
        }
        missing
    }

    pub fn can_submit(&self) -> bool {
        self.step.is_last() && self.missing_requirements().is_empty()
    }

    pub fn submit(&self) -> Result<AdmissionFormData, WizardError> {
        if !self.step.is_last() {
            return Err(WizardError::NotAtPaymentStep);
        }
        let missing = self.missing_requirements();
        if !missing.is_empty() {
            return Err(WizardError::SubmissionBlocked(missing));
        }
        Ok(self.form.clone())
    }

    pub fn transition(&mut self, action: WizardAction) -> Result<Transition, WizardError> {
        match action {
            WizardAction::Next => self.next().map(Transition::Moved),
            WizardAction::Back => self.back().map(Transition::Moved),
            WizardAction::InitiatePayment => {
                self.initiate_payment().map(|_| Transition::PaymentInitiated)
            }
            WizardAction::Submit => self.submit().map(Transition::ReadyToSubmit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wizard_at(step: AdmissionStep) -> AdmissionWizard {
        let mut wizard = AdmissionWizard::new();
        while wizard.step() != step {
            wizard.next().unwrap();
        }
        wizard
    }

    fn payment_input(rules: bool, declaration: bool, utr: &str) -> StepInput {
        let mut input = StepInput::new().with_text("utr_number", utr);
        if rules {
            input.insert_text("rules_checked", "on");
        }
        if declaration {
            input.insert_text("declaration_checked", "on");
        }
        input
    }

    #[test]
    fn test_steps_are_linear() {
        for (ordinal, step) in AdmissionStep::ALL.iter().enumerate() {
            assert_eq!(step.ordinal(), ordinal);
            assert_eq!(AdmissionStep::from_ordinal(ordinal), Some(*step));
        }
        assert_eq!(AdmissionStep::Info.previous(), None);
        assert_eq!(AdmissionStep::Payment.next(), None);
        assert_eq!(AdmissionStep::Family.next(), Some(AdmissionStep::Health));
        assert_eq!(AdmissionStep::Family.previous(), Some(AdmissionStep::Personal));
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(AdmissionStep::Info.progress_percent(), 0);
        assert_eq!(AdmissionStep::Health.progress_percent(), 60);
        assert_eq!(AdmissionStep::Payment.progress_percent(), 100);
    }

    #[test]
    fn test_next_advances_by_one_without_validation() {
        let mut wizard = AdmissionWizard::new();
        for expected in 1..AdmissionStep::ALL.len() {
            let step = wizard.next().unwrap();
            assert_eq!(step.ordinal(), expected);
        }
        assert_eq!(wizard.next(), Err(WizardError::NoNextStep));
        assert_eq!(wizard.step(), AdmissionStep::Payment);
    }

    #[test]
    fn test_back_retreats_by_one() {
        let mut wizard = wizard_at(AdmissionStep::Payment);
        for expected in (0..AdmissionStep::ALL.len() - 1).rev() {
            let step = wizard.back().unwrap();
            assert_eq!(step.ordinal(), expected);
        }
        assert_eq!(wizard.back(), Err(WizardError::NoPreviousStep));
        assert_eq!(wizard.step(), AdmissionStep::Info);
    }

    #[test]
    fn test_values_survive_navigation() {
        let mut wizard = wizard_at(AdmissionStep::Personal);
        wizard.apply_input(
            &StepInput::new()
                .with_text("student_full_name", "Asha Patil")
                .with_text("blood_group", "O+"),
        );
        wizard.next().unwrap();
        wizard.next().unwrap();
        wizard.back().unwrap();
        wizard.back().unwrap();
        assert_eq!(wizard.step(), AdmissionStep::Personal);
        assert_eq!(wizard.form().student_full_name, "Asha Patil");
        assert_eq!(wizard.form().blood_group, "O+");
    }

    #[test]
    fn test_input_only_touches_current_step_fields() {
        let mut wizard = wizard_at(AdmissionStep::Family);
        wizard.apply_input(
            &StepInput::new()
                .with_text("father_first_name", "Ravi")
                .with_text("student_full_name", "should be ignored")
                .with_text("spouse_name", "reserved"),
        );
        assert_eq!(wizard.form().father_first_name, "Ravi");
        assert_eq!(wizard.form().student_full_name, "");
        assert_eq!(wizard.form().spouse_name, "");
    }

    #[test]
    fn test_snapshot_leaves_previous_untouched() {
        let before = AdmissionFormData::default();
        let after = before.with_step_input(
            AdmissionStep::Health,
            &StepInput::new().with_text("medical_concerns", "Asthma"),
        );
        assert_eq!(before.medical_concerns, "");
        assert_eq!(after.medical_concerns, "Asthma");
    }

    #[test]
    fn test_defaults() {
        let form = AdmissionFormData::default();
        assert_eq!(form.gender, "Male");
        assert_eq!(form.marital_status, "Single");
        assert!(!form.rules_checked);
        assert!(form.photo_file.is_none());
    }

    #[test]
    fn test_documents_keep_existing_file_when_none_picked() {
        let mut wizard = wizard_at(AdmissionStep::Documents);
        let photo = Attachment::new("me.jpg", Some("image/jpeg".into()), Bytes::from_static(b"jpeg"));
        wizard.apply_input(&StepInput::new().with_file("photo_file", photo));

        let mut empty = StepInput::new();
        empty.insert_file("photo_file", Attachment::new("", None, Bytes::new()));
        wizard.apply_input(&empty);

        let kept = wizard.form().photo_file.as_ref().unwrap();
        assert_eq!(kept.file_name, "me.jpg");
        assert_eq!(kept.size, 4);
    }

    #[test]
    fn test_submit_requires_all_three_conditions() {
        let cases = [
            (false, true, "123456789012"),
            (true, false, "123456789012"),
            (true, true, ""),
            (false, false, ""),
        ];
        for (rules, declaration, utr) in cases {
            let mut wizard = wizard_at(AdmissionStep::Payment);
            wizard.apply_input(&payment_input(rules, declaration, utr));
            assert!(!wizard.can_submit());
            assert!(matches!(wizard.submit(), Err(WizardError::SubmissionBlocked(_))));
        }

        let mut wizard = wizard_at(AdmissionStep::Payment);
        wizard.apply_input(&payment_input(true, true, "123456789012"));
        assert!(wizard.can_submit());
        let submitted = wizard.submit().unwrap();
        assert_eq!(submitted.utr_number, "123456789012");
    }

    #[test]
    fn test_blocked_submission_lists_missing_requirements() {
        let mut wizard = wizard_at(AdmissionStep::Payment);
        wizard.apply_input(&payment_input(true, false, ""));
        assert_eq!(
            wizard.submit(),
            Err(WizardError::SubmissionBlocked(vec![
                SubmitRequirement::DeclarationAccepted,
                SubmitRequirement::TransactionReference,
            ]))
        );
    }

    #[test]
    fn test_unchecking_a_box_blocks_again() {
        let mut wizard = wizard_at(AdmissionStep::Payment);
        wizard.apply_input(&payment_input(true, true, "UTR1"));
        assert!(wizard.can_submit());
        wizard.apply_input(&payment_input(true, false, "UTR1"));
        assert!(!wizard.can_submit());
    }

    #[test]
    fn test_submit_only_from_final_step() {
        let mut wizard = wizard_at(AdmissionStep::Documents);
        assert_eq!(wizard.submit(), Err(WizardError::NotAtPaymentStep));
        assert_eq!(
            wizard.transition(WizardAction::Submit),
            Err(WizardError::NotAtPaymentStep)
        );
    }

    #[test]
    fn test_payment_initiated_is_sticky() {
        let mut wizard = wizard_at(AdmissionStep::Health);
        assert_eq!(wizard.initiate_payment(), Err(WizardError::NotAtPaymentStep));

        let mut wizard = wizard_at(AdmissionStep::Payment);
        assert!(!wizard.payment_initiated());
        assert_eq!(
            wizard.transition(WizardAction::InitiatePayment),
            Ok(Transition::PaymentInitiated)
        );
        wizard.back().unwrap();
        wizard.next().unwrap();
        assert!(wizard.payment_initiated());
    }

    #[test]
    fn test_parse_action() {
        assert_eq!(WizardAction::parse("next"), Some(WizardAction::Next));
        assert_eq!(WizardAction::parse("initiate_payment"), Some(WizardAction::InitiatePayment));
        assert_eq!(WizardAction::parse("skip"), None);
    }

    #[test]
    fn test_attachment_metadata_only_serialization() {
        let file = Attachment::new("id.pdf", Some("application/pdf".into()), Bytes::from(vec![0u8; 2048]));
        assert_eq!(file.size_label(), "2.0 KB");
        let json = serde_json::to_value(&file).unwrap();
        assert_eq!(json["fileName"], "id.pdf");
        assert_eq!(json["size"], 2048);
        assert!(json.get("bytes").is_none());
    }

    #[test]
    fn test_reserved_fields_are_addressable_but_not_rendered() {
        let form = AdmissionFormData::default();
        for name in RESERVED_FIELDS {
            assert!(form.text_field(name).is_some(), "{} should exist", name);
            assert!(AdmissionStep::ALL
                .iter()
                .all(|step| !step.text_fields().contains(name)));
        }
    }
}
