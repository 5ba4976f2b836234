use serde::{Deserialize, Serialize};

use super::{display_date, Searchable};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: String,
    pub show_on_home: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment_type: Option<AttachmentType>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentType {
    Pdf,
    Image,
    Link,
}

impl AttachmentType {
    pub fn label(&self) -> &'static str {
        match self {
            AttachmentType::Pdf => "PDF",
            AttachmentType::Image => "Image",
            AttachmentType::Link => "Link",
        }
    }
}

impl Announcement {
    pub fn display_date(&self) -> String {
        display_date(&self.date)
    }
}

impl Searchable for Announcement {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str(), self.date.as_str()]
    }
}
