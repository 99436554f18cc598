//! Search-as-you-type filtering over fixed record lists.

/// A record that can be matched by a free-text search term.
pub trait Searchable {
    /// Fields checked for the search term, in no particular order.
    fn search_fields(&self) -> Vec<&str>;

    fn matches(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Returns the items whose searchable fields contain `term`, ignoring case.
///
/// Order is preserved. An empty term keeps every item.
pub fn filter<'a, T: Searchable>(items: &'a [T], term: &str) -> Vec<&'a T> {
    if term.is_empty() {
        return items.iter().collect();
    }
    items.iter().filter(|item| item.matches(term)).collect()
}
