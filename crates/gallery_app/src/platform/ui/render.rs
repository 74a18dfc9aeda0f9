use std::fmt::Write;

use gallery_core::{ContentItem, GalleryViewModel, LoadStatus, PricingOption, SortKey};

const TITLE_WIDTH: usize = 28;
const CREATOR_WIDTH: usize = 20;

/// Renders the whole gallery screen as plain text.
pub fn render(view: &GalleryViewModel) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", header_line(view));

    if let Some(message) = &view.error_message {
        let _ = writeln!(out, "! {message}");
    }

    if view.visible_items.is_empty() {
        if view.status == LoadStatus::Ready {
            let _ = writeln!(out, "  (no items match)");
        }
    } else {
        for item in &view.visible_items {
            let _ = writeln!(out, "{}", card_line(item));
        }
    }

    let _ = writeln!(out, "{}", footer_line(view));
    out
}

fn header_line(view: &GalleryViewModel) -> String {
    let search = if view.query.search_text.is_empty() {
        "-".to_string()
    } else {
        format!("{:?}", view.query.search_text)
    };
    let filters: Vec<String> = PricingOption::ALL
        .into_iter()
        .map(|option| {
            let mark = if view.query.filters.contains(option) {
                'x'
            } else {
                ' '
            };
            format!("[{mark}] {option}")
        })
        .collect();
    format!(
        "Search: {search} | Pricing Option: {} | Sort by: {}",
        filters.join(" "),
        sort_label(view.query.sort_key)
    )
}

fn sort_label(key: SortKey) -> &'static str {
    match key {
        SortKey::NameAsc => "Item Name",
        SortKey::PriceDesc => "Higher Price",
        SortKey::PriceAsc => "Lower Price",
    }
}

fn card_line(item: &ContentItem) -> String {
    format!(
        "  {:<title_w$}  {:<creator_w$}  {:>10}",
        truncate(item.title(), TITLE_WIDTH),
        truncate(item.creator(), CREATOR_WIDTH),
        item.price_label(),
        title_w = TITLE_WIDTH,
        creator_w = CREATOR_WIDTH,
    )
}

fn footer_line(view: &GalleryViewModel) -> String {
    let state = match view.status {
        LoadStatus::Idle => "idle",
        LoadStatus::LoadingInitial => "loading...",
        LoadStatus::LoadingMore => "loading more...",
        LoadStatus::Ready if view.has_more => "scroll for more",
        LoadStatus::Ready => "end of results",
        LoadStatus::Error => "error (more/reload to retry)",
    };
    format!(
        "-- showing {} of {} loaded, page {} -- {state}",
        view.visible_items.len(),
        view.loaded_count,
        view.page
    )
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;
    use gallery_core::{FilterSet, QueryState};

    fn view_with(items: Vec<ContentItem>, status: LoadStatus) -> GalleryViewModel {
        GalleryViewModel {
            loaded_count: items.len(),
            visible_items: items,
            status,
            has_more: true,
            page: 1,
            ..GalleryViewModel::default()
        }
    }

    #[test]
    fn cards_show_price_labels() {
        let view = view_with(
            vec![
                ContentItem::new("1", "Memphis", "Marco Alves", PricingOption::Paid, Some(32.0), ""),
                ContentItem::new("2", "Cleveland", "Marco Alves", PricingOption::Free, None, ""),
                ContentItem::new("3", "Porto", "Marco Alves", PricingOption::ViewOnly, None, ""),
            ],
            LoadStatus::Ready,
        );
        let text = render(&view);
        assert!(text.contains("$32.00"));
        assert!(text.contains("FREE"));
        assert!(text.contains("View Only"));
        assert!(text.contains("showing 3 of 3 loaded, page 1 -- scroll for more"));
    }

    #[test]
    fn error_message_is_shown() {
        let mut view = view_with(Vec::new(), LoadStatus::Error);
        view.error_message = Some("Failed to fetch".to_string());
        let text = render(&view);
        assert!(text.contains("! Failed to fetch"));
        assert!(!text.contains("no items match"));
    }

    #[test]
    fn header_reflects_query() {
        let mut view = view_with(Vec::new(), LoadStatus::Ready);
        view.query = QueryState {
            search_text: "porto".to_string(),
            filters: FilterSet::of(&[PricingOption::Paid]),
            sort_key: SortKey::PriceAsc,
        };
        let text = render(&view);
        assert!(text.contains("Search: \"porto\""));
        assert!(text.contains("[x] Paid [ ] Free [ ] View Only"));
        assert!(text.contains("Sort by: Lower Price"));
        assert!(text.contains("(no items match)"));
    }

    #[test]
    fn long_titles_are_truncated() {
        assert_eq!(truncate("abcdef", 4), "abc…");
        assert_eq!(truncate("abc", 4), "abc");
    }
}
