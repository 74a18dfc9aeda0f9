use crate::{LoadedPage, PricingOption, RequestId, ScrollSample, SortKey};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// View mounted; carries the URL query string that seeds the query.
    Mounted { query: String },
    /// Address bar changed outside the app (back/forward, pasted link).
    Navigated { query: String },
    /// User edited the search box.
    SearchChanged(String),
    /// User clicked a pricing checkbox.
    FilterToggled(PricingOption),
    /// User picked a sort order.
    SortChanged(SortKey),
    /// User clicked Reset.
    FiltersReset,
    /// Explicit request for the next page.
    MoreRequested,
    /// Sampled scroll position of the content area.
    Scrolled(ScrollSample),
    /// User asked to start over from the first page.
    ReloadRequested,
    /// Completion of a page fetch.
    PageLoaded {
        request: RequestId,
        result: Result<LoadedPage, String>,
    },
    /// View torn down.
    Unmounted,
    /// Fallback for placeholder wiring.
    NoOp,
}
