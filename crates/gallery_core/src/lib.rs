//! Gallery core: pure result-set state machine, selection pipeline and URL codec.
mod effect;
mod item;
mod msg;
mod page;
mod query;
mod scroll;
mod select;
mod state;
mod update;
pub mod url_sync;
mod view_model;

pub use effect::Effect;
pub use item::{ContentItem, PricingOption};
pub use msg::Msg;
pub use page::LoadedPage;
pub use query::{FilterSet, QueryState, SortKey};
pub use scroll::{ScrollSample, DEFAULT_SCROLL_THRESHOLD};
pub use select::select_visible;
pub use state::{AppState, GalleryOptions, LoadStatus, RequestId, DEFAULT_PAGE_SIZE};
pub use update::update;
pub use view_model::GalleryViewModel;
