use std::cmp::Ordering;

use crate::{ContentItem, FilterSet, QueryState, SortKey};

/// Pure filter -> search -> sort pipeline over the accumulated items.
///
/// The input is never reordered; ties keep their input order.
pub fn select_visible(items: &[ContentItem], query: &QueryState) -> Vec<ContentItem> {
    let needle = query.search_text.to_lowercase();
    let mut selected: Vec<&ContentItem> = items
        .iter()
        .filter(|item| passes_filter(item, &query.filters))
        .filter(|item| matches_search(item, &needle))
        .collect();
    // `sort_by` is stable.
    selected.sort_by(|a, b| compare(a, b, query.sort_key));
    selected.into_iter().cloned().collect()
}

fn passes_filter(item: &ContentItem, filters: &FilterSet) -> bool {
    filters.admits(item.pricing())
}

/// `needle` must already be lowercased.
fn matches_search(item: &ContentItem, needle: &str) -> bool {
    needle.is_empty()
        || item.title().to_lowercase().contains(needle)
        || item.creator().to_lowercase().contains(needle)
}

fn compare(a: &ContentItem, b: &ContentItem, key: SortKey) -> Ordering {
    match key {
        SortKey::NameAsc => a.title().cmp(b.title()),
        SortKey::PriceDesc => b.sort_price().total_cmp(&a.sort_price()),
        SortKey::PriceAsc => a.sort_price().total_cmp(&b.sort_price()),
    }
}
