use crate::{ContentItem, LoadStatus, QueryState};

/// Everything the presentation layer needs for one render.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GalleryViewModel {
    pub visible_items: Vec<ContentItem>,
    pub status: LoadStatus,
    pub error_message: Option<String>,
    pub has_more: bool,
    pub query: QueryState,
    pub page: u32,
    pub loaded_count: usize,
    pub dirty: bool,
}

impl GalleryViewModel {
    pub fn is_loading(&self) -> bool {
        matches!(
            self.status,
            LoadStatus::LoadingInitial | LoadStatus::LoadingMore
        )
    }
}
