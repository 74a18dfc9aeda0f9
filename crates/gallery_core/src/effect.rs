use crate::RequestId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch one page; the outcome comes back as `Msg::PageLoaded` with the same id.
    FetchPage {
        request: RequestId,
        page: u32,
        page_size: u32,
    },
    /// Write the encoded query (no leading `?`) into the address bar.
    ReplaceUrl { query: String },
    /// Abandon any fetch still pending.
    CancelFetches,
}
