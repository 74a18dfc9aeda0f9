use crate::ContentItem;

/// One page as delivered by the content source.
///
/// `returned` counts the records the source sent for the page, including any
/// the caller could not turn into items. Pagination decisions use it, not
/// `items.len()`.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedPage {
    pub items: Vec<ContentItem>,
    pub returned: usize,
}

impl LoadedPage {
    /// A page whose `returned` count is at least the number of kept items.
    pub fn new(items: Vec<ContentItem>, returned: usize) -> Self {
        let returned = returned.max(items.len());
        Self { items, returned }
    }
}

impl From<Vec<ContentItem>> for LoadedPage {
    fn from(items: Vec<ContentItem>) -> Self {
        let returned = items.len();
        Self { items, returned }
    }
}
