//! Query + category filtering over the directory

use super::{AgentRecord, CategoryFilter};

/// Select the records matching `query` and `category`, preserving input order.
///
/// The query is compared case-insensitively as a plain substring of the name
/// or the description. It is not trimmed, so surrounding whitespace must
/// appear in the text for a record to match. An empty query matches all.
pub fn filter<'a>(records: &'a [AgentRecord], query: &str, category: CategoryFilter) -> Vec<&'a AgentRecord> {
    let needle = query.to_lowercase();

    records
        .iter()
        .filter(|record| category.matches(record.category))
        .filter(|record| matches_query(record, &needle))
        .collect()
}

fn matches_query(record: &AgentRecord, needle: &str) -> bool {
    needle.is_empty() || record.name.to_lowercase().contains(needle) || record.description.to_lowercase().contains(needle)
}
