use serde::{Deserialize, Serialize};

use super::Searchable;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instructor {
    pub id: String,
    pub name: String,
    pub designation: String,
    pub photo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achievements: Option<Vec<String>>,
    /// Free-form biography.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journey: Option<String>,
}

impl Instructor {
    pub fn achievements(&self) -> &[String] {
        self.achievements.as_deref().unwrap_or(&[])
    }

    pub fn has_biography(&self) -> bool {
        self.journey.is_some() || !self.achievements().is_empty()
    }
}

impl Searchable for Instructor {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.designation.as_str()];
        if let Some(journey) = &self.journey {
            fields.push(journey);
        }
        fields
    }
}
