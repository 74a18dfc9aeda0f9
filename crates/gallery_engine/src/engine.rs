use std::sync::{mpsc, Arc};
use std::thread;

use gallery_logging::{gallery_debug, gallery_warn};
use tokio_util::sync::CancellationToken;

use crate::source::{ContentSource, ReqwestContentSource, SourceSettings};
use crate::{EngineEvent, FetchError, RequestId};

/// Receives engine completions; called from runtime worker threads.
pub trait EventSink: Send + Sync + 'static {
    fn emit(&self, event: EngineEvent);
}

/// Forwards events into a std channel.
pub struct ChannelEventSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("failed to build content source: {0}")]
    Source(#[from] FetchError),
}

enum EngineCommand {
    Fetch {
        request: RequestId,
        page: u32,
        page_size: u32,
    },
    CancelPending,
}

/// Runs page fetches on a background tokio runtime.
///
/// Dropping the handle stops the worker thread.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(settings: SourceSettings, sink: impl EventSink) -> Result<Self, EngineError> {
        let source = ReqwestContentSource::new(settings)?;
        Self::with_source(Arc::new(source), sink)
    }

    pub fn with_source(
        source: Arc<dyn ContentSource>,
        sink: impl EventSink,
    ) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let sink: Arc<dyn EventSink> = Arc::new(sink);
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;

        thread::spawn(move || {
            let mut cancel = CancellationToken::new();
            while let Ok(command) = cmd_rx.recv() {
                match command {
                    EngineCommand::Fetch {
                        request,
                        page,
                        page_size,
                    } => {
                        let source = source.clone();
                        let sink = sink.clone();
                        let cancel = cancel.clone();
                        runtime.spawn(async move {
                            let job = FetchJob {
                                request,
                                page,
                                page_size,
                            };
                            handle_fetch(source.as_ref(), sink.as_ref(), cancel, job).await;
                        });
                    }
                    EngineCommand::CancelPending => {
                        cancel.cancel();
                        cancel = CancellationToken::new();
                    }
                }
            }
            cancel.cancel();
        });

        Ok(Self { cmd_tx })
    }

    pub fn fetch(&self, request: RequestId, page: u32, page_size: u32) {
        let _ = self.cmd_tx.send(EngineCommand::Fetch {
            request,
            page,
            page_size,
        });
    }

    /// Abandons every fetch issued so far; their results are never emitted.
    pub fn cancel_pending(&self) {
        let _ = self.cmd_tx.send(EngineCommand::CancelPending);
    }
}

struct FetchJob {
    request: RequestId,
    page: u32,
    page_size: u32,
}

async fn handle_fetch(
    source: &dyn ContentSource,
    sink: &dyn EventSink,
    cancel: CancellationToken,
    job: FetchJob,
) {
    let FetchJob {
        request,
        page,
        page_size,
    } = job;
    match cancel
        .run_until_cancelled(source.fetch(page, page_size))
        .await
    {
        Some(result) => {
            if let Err(err) = &result {
                gallery_warn!("Request {} for page {} failed: {}", request, page, err);
            }
            sink.emit(EngineEvent::PageFetched {
                request,
                page,
                result,
            });
        }
        None => gallery_debug!("Request {} for page {} cancelled", request, page),
    }
}
