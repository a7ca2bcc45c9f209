//! Free-text query matching

/// A record that can be matched by the free-text search box
pub trait Searchable {
    /// Fields consulted during substring filtering.
    fn search_fields(&self) -> Vec<&str>;
}

/// Normalized search query
///
/// Matching is a case-insensitive literal substring test against each
/// searchable field. The query is never interpreted as a pattern, so `.`,
/// `*`, `(` and friends only match themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    needle: Option<String>,
}

impl SearchQuery {
    pub fn new(raw: &str) -> Self {
        let needle = if raw.trim().is_empty() { None } else { Some(raw.to_lowercase()) };
        Self { needle }
    }

    /// An empty or whitespace-only query matches everything.
    pub fn is_blank(&self) -> bool {
        self.needle.is_none()
    }

    pub fn matches<T: Searchable + ?Sized>(&self, record: &T) -> bool {
        match &self.needle {
            None => true,
            Some(needle) => record
                .search_fields()
                .into_iter()
                .any(|field| field.to_lowercase().contains(needle.as_str())),
        }
    }
}

/// Subsequence of `records` matching `query`, in original order.
pub fn filter_records<'a, T, I>(records: I, query: &str) -> Vec<&'a T>
where
    T: Searchable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let query = SearchQuery::new(query);
    records.into_iter().filter(|record| query.matches(*record)).collect()
}
