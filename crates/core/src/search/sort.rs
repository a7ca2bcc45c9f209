//! Column sorting for search results

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Stable sort of a result view by `key`.
///
/// Records with equal keys keep their relative order in both directions.
pub fn sort_by_key<'a, T, K, F>(mut records: Vec<&'a T>, key: F, direction: SortDirection) -> Vec<&'a T>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    records.sort_by(|a, b| {
        let ordering = key(*a).cmp(&key(*b));
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    records
}
