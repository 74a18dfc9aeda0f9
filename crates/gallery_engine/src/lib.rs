//! Gallery engine: content source adapter and effect execution.
mod engine;
mod source;
mod types;

pub use engine::{ChannelEventSink, EngineError, EngineHandle, EventSink};
pub use source::{paginate, ContentSource, ReqwestContentSource, SourceSettings, DEFAULT_ENDPOINT};
pub use types::{ContentRecord, EngineEvent, FailureKind, FetchError, RequestId};
