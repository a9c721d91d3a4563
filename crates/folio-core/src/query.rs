use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::model::{ProjectRecord, QueryState, SortKey};

/// Filter then sort `records` for display. Never fails and never mutates input.
///
/// Steps, in order: text search over name/description/topics (skipped for
/// blank text; otherwise the text is matched as given, surrounding
/// whitespace included), language filter, stable sort by `state.sort`. A `None` sort
/// keeps the filtered order.
pub fn apply_query(records: &[ProjectRecord], state: &QueryState) -> Vec<ProjectRecord> {
    let search_active = !state.search_text.trim().is_empty();
    let needle = state.search_text.to_lowercase();

    let mut filtered: Vec<ProjectRecord> = records
        .iter()
        .filter(|record| !search_active || matches_text(record, &needle))
        .filter(|record| state.language.matches(record.language.as_deref()))
        .cloned()
        .collect();

    if let Some(key) = state.sort {
        sort_records(&mut filtered, key);
    }

    filtered
}

pub fn sort_records(records: &mut [ProjectRecord], key: SortKey) {
    match key {
        SortKey::StarsDesc => records.sort_by(|a, b| b.star_count.cmp(&a.star_count)),
        SortKey::StarsAsc => records.sort_by(|a, b| a.star_count.cmp(&b.star_count)),
        SortKey::UpdatedDesc => records.sort_by(|a, b| updated_key(b).cmp(&updated_key(a))),
        SortKey::UpdatedAsc => records.sort_by(|a, b| updated_key(a).cmp(&updated_key(b))),
        SortKey::NameAsc => records.sort_by(|a, b| compare_names(&a.name, &b.name)),
        SortKey::NameDesc => records.sort_by(|a, b| compare_names(&b.name, &a.name)),
    }
}

fn matches_text(record: &ProjectRecord, needle: &str) -> bool {
    record.name.to_lowercase().contains(needle)
        || record.description_or_empty().to_lowercase().contains(needle)
        || record
            .topics
            .iter()
            .any(|topic| topic.to_lowercase().contains(needle))
}

fn updated_key(record: &ProjectRecord) -> DateTime<Utc> {
    record.updated_at.unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

// Case-folded order; the raw string breaks ties.
fn compare_names(left: &str, right: &str) -> Ordering {
    left.to_lowercase()
        .cmp(&right.to_lowercase())
        .then_with(|| left.cmp(right))
}
