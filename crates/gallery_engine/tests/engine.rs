use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;

use gallery_engine::{
    ChannelEventSink, ContentRecord, ContentSource, EngineEvent, EngineHandle, FailureKind,
    FetchError,
};

struct FakeSource {
    total: usize,
    delay: Duration,
}

#[async_trait::async_trait]
impl ContentSource for FakeSource {
    async fn fetch(&self, page: u32, page_size: u32) -> Result<Vec<ContentRecord>, FetchError> {
        tokio::time::sleep(self.delay).await;
        if self.total == 0 {
            return Err(FetchError {
                kind: FailureKind::HttpStatus(503),
                message: "unavailable".to_string(),
            });
        }
        let records = (1..=self.total)
            .map(|i| ContentRecord {
                id: i.to_string(),
                title: format!("Title {i}"),
                creator: "Creator".to_string(),
                price: None,
                pricing_option: 1,
                image_path: String::new(),
            })
            .collect();
        Ok(gallery_engine::paginate(records, page, page_size))
    }
}

fn engine(total: usize, delay: Duration) -> (EngineHandle, mpsc::Receiver<EngineEvent>) {
    let (tx, rx) = mpsc::channel();
    let handle = EngineHandle::with_source(
        Arc::new(FakeSource { total, delay }),
        ChannelEventSink::new(tx),
    )
    .expect("engine");
    (handle, rx)
}

#[test]
fn fetch_reports_completion_with_request_id() {
    let (handle, rx) = engine(17, Duration::ZERO);
    handle.fetch(7, 2, 12);

    let event = rx.recv_timeout(Duration::from_secs(5)).expect("event");
    let EngineEvent::PageFetched {
        request,
        page,
        result,
    } = event;
    assert_eq!(request, 7);
    assert_eq!(page, 2);
    assert_eq!(result.expect("records").len(), 5);
}

#[test]
fn failures_are_forwarded() {
    let (handle, rx) = engine(0, Duration::ZERO);
    handle.fetch(1, 1, 12);

    let EngineEvent::PageFetched { result, .. } =
        rx.recv_timeout(Duration::from_secs(5)).expect("event");
    assert_eq!(result.unwrap_err().kind, FailureKind::HttpStatus(503));
}

#[test]
fn cancelled_fetches_never_report() {
    let (handle, rx) = engine(12, Duration::from_millis(300));
    handle.fetch(1, 1, 12);
    handle.cancel_pending();

    assert!(rx.recv_timeout(Duration::from_millis(800)).is_err());

    // Fetches issued after a cancel still run.
    handle.fetch(2, 1, 12);
    let EngineEvent::PageFetched { request, .. } =
        rx.recv_timeout(Duration::from_secs(5)).expect("event");
    assert_eq!(request, 2);
}
