use crate::scroll::DEFAULT_SCROLL_THRESHOLD;
use crate::select::select_visible;
use crate::view_model::GalleryViewModel;
use crate::{ContentItem, LoadedPage, QueryState};

/// Identifies one issued page fetch; completions carry it back.
pub type RequestId = u64;

/// Default number of items per page.
pub const DEFAULT_PAGE_SIZE: u32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    LoadingInitial,
    LoadingMore,
    Ready,
    Error,
}

/// Fixed tuning for one gallery view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryOptions {
    page_size: u32,
    scroll_threshold: u32,
}

impl GalleryOptions {
    /// A zero page size is raised to one.
    pub fn new(page_size: u32, scroll_threshold: u32) -> Self {
        Self {
            page_size: page_size.max(1),
            scroll_threshold,
        }
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn scroll_threshold(&self) -> u32 {
        self.scroll_threshold
    }
}

impl Default for GalleryOptions {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, DEFAULT_SCROLL_THRESHOLD)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoadKind {
    Initial,
    More,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct InFlight {
    pub(crate) request: RequestId,
    pub(crate) page: u32,
    pub(crate) kind: LoadKind,
}

/// Result-set controller state: the accumulated items, page cursor and
/// loading status, plus the user's query.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    options: GalleryOptions,
    query: QueryState,
    items: Vec<ContentItem>,
    page: u32,
    has_more: bool,
    status: LoadStatus,
    error: Option<String>,
    in_flight: Option<InFlight>,
    last_request: RequestId,
    mounted: bool,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_options(GalleryOptions::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: GalleryOptions) -> Self {
        Self {
            options,
            query: QueryState::default(),
            items: Vec::new(),
            page: 0,
            has_more: true,
            status: LoadStatus::Idle,
            error: None,
            in_flight: None,
            last_request: 0,
            mounted: false,
            dirty: false,
        }
    }

    pub fn view(&self) -> GalleryViewModel {
        GalleryViewModel {
            visible_items: select_visible(&self.items, &self.query),
            status: self.status,
            error_message: self.error.clone(),
            has_more: self.has_more,
            query: self.query.clone(),
            page: self.page,
            loaded_count: self.items.len(),
            dirty: self.dirty,
        }
    }

    pub fn options(&self) -> GalleryOptions {
        self.options
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Returns whether a render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn query_mut(&mut self) -> &mut QueryState {
        self.dirty = true;
        &mut self.query
    }

    pub(crate) fn set_mounted(&mut self, mounted: bool) {
        self.mounted = mounted;
    }

    pub(crate) fn in_flight(&self) -> Option<InFlight> {
        self.in_flight
    }

    pub(crate) fn take_in_flight(&mut self) -> Option<InFlight> {
        self.in_flight.take()
    }

    /// Enters LOADING_INITIAL, dropping everything accumulated so far.
    pub(crate) fn begin_initial(&mut self) -> InFlight {
        self.items.clear();
        self.page = 0;
        self.has_more = true;
        self.error = None;
        self.status = LoadStatus::LoadingInitial;
        self.dirty = true;
        self.issue(1, LoadKind::Initial)
    }

    /// Enters LOADING_MORE for the page after the last loaded one.
    pub(crate) fn begin_more(&mut self) -> InFlight {
        self.error = None;
        self.status = LoadStatus::LoadingMore;
        self.dirty = true;
        self.issue(self.page + 1, LoadKind::More)
    }

    fn issue(&mut self, page: u32, kind: LoadKind) -> InFlight {
        self.last_request += 1;
        let in_flight = InFlight {
            request: self.last_request,
            page,
            kind,
        };
        self.in_flight = Some(in_flight);
        in_flight
    }

    /// `has_more` follows the source's record count for the page, so items
    /// dropped while mapping do not end pagination early.
    pub(crate) fn apply_page(&mut self, in_flight: InFlight, page: LoadedPage) {
        let LoadedPage { items, returned } = page;
        let full_page = returned == self.options.page_size as usize;
        match in_flight.kind {
            LoadKind::Initial => {
                self.items = items;
                self.has_more = full_page;
            }
            LoadKind::More => {
                self.items.extend(items);
                self.has_more = returned > 0 && full_page;
            }
        }
        self.page = in_flight.page;
        self.status = LoadStatus::Ready;
        self.error = None;
        self.dirty = true;
    }

    /// Records a failed fetch. Accumulated items and `has_more` are kept.
    pub(crate) fn apply_failure(&mut self, message: String) {
        self.status = LoadStatus::Error;
        self.error = Some(message);
        self.dirty = true;
    }
}
