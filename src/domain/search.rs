/// Something a visitor can find through a free-text search box.
pub trait Searchable {
    /// The text fields a query is matched against.
    fn search_fields(&self) -> Vec<&str>;

    /// Case-insensitive substring match against any of the searched fields.
    /// An empty query matches everything.
    fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        self.search_fields()
            .into_iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Keep the items matching `query`, preserving collection order.
pub fn filter_by_query<T: Searchable + Clone>(items: &[T], query: &str) -> Vec<T> {
    items
        .iter()
        .filter(|item| item.matches(query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Card {
        title: String,
        body: String,
    }

    impl Searchable for Card {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.title.as_str(), self.body.as_str()]
        }
    }

    fn cards() -> Vec<Card> {
        vec![
            Card { title: "Belt Grading".into(), body: "Saturday at the main dojo".into() },
            Card { title: "Summer Camp".into(), body: "Open to all belts".into() },
        ]
    }

    #[test]
    fn test_empty_query_returns_everything() {
        assert_eq!(filter_by_query(&cards(), ""), cards());
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let found = filter_by_query(&cards(), "bELT gr");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Belt Grading");
    }

    #[test]
    fn test_any_field_matches() {
        // "belts" only appears in the body of the second card
        let found = filter_by_query(&cards(), "belts");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Summer Camp");

        assert_eq!(filter_by_query(&cards(), "belt").len(), 2);
    }

    #[test]
    fn test_no_match() {
        assert!(filter_by_query(&cards(), "kata").is_empty());
    }
}
