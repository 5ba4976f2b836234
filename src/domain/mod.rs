pub mod admission;
pub mod announcement;
pub mod branch;
pub mod gallery;
pub mod instructor;
pub mod player;
pub mod search;

pub use admission::*;
pub use announcement::*;
pub use branch::*;
pub use gallery::*;
pub use instructor::*;
pub use player::*;
pub use search::*;

use chrono::NaiveDate;

/// Render a stored `YYYY-MM-DD` date as e.g. "January 10, 2025". Dates that
/// don't parse are shown as stored.
pub fn display_date(raw: &str) -> String {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|date| date.format("%B %d, %Y").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_date() {
        assert_eq!(display_date("2025-01-10"), "January 10, 2025");
        assert_eq!(display_date("2024-7-15"), "July 15, 2024");
        assert_eq!(display_date("next week"), "next week");
    }
}
