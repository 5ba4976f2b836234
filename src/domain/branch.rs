use serde::{Deserialize, Serialize};

/// A training location. Branches only ever come from the built-in seed data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    pub id: String,
    pub name: String,
    pub address: String,
    pub contact_number: String,
    pub image: String,
    pub google_maps_link: String,
}

impl Branch {
    /// `tel:` link with the spaces stripped out of the number.
    pub fn tel_link(&self) -> String {
        let number: String = self.contact_number.chars().filter(|c| !c.is_whitespace()).collect();
        format!("tel:{}", number)
    }
}
