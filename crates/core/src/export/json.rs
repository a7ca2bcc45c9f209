//! JSON writing

use serde::Serialize;
use veggieworld_domain::Result;

/// Pretty-printed JSON array with 2-space indentation.
///
/// An empty record set is written as `[]`.
///
/// # Errors
/// Returns `DashboardError::Export` if a record fails to serialize.
pub fn write_json<T: Serialize>(records: &[T]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}
