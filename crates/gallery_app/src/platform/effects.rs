use std::sync::mpsc;

use gallery_core::{ContentItem, Effect, LoadedPage, Msg, PricingOption};
use gallery_engine::{
    ContentRecord, EngineError, EngineEvent, EngineHandle, EventSink, SourceSettings,
};
use gallery_logging::{gallery_debug, gallery_warn};

use super::app::AppInput;
use super::location::Location;

/// Executes core effects: page fetches on the engine, URL writes on the location.
pub struct EffectRunner {
    engine: EngineHandle,
    location: Location,
}

impl EffectRunner {
    pub fn new(
        settings: SourceSettings,
        location: Location,
        inbox: mpsc::Sender<AppInput>,
    ) -> Result<Self, EngineError> {
        let engine = EngineHandle::new(settings, MsgSink { inbox })?;
        Ok(Self { engine, location })
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn location_mut(&mut self) -> &mut Location {
        &mut self.location
    }

    pub fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchPage {
                    request,
                    page,
                    page_size,
                } => {
                    gallery_debug!(
                        "FetchPage request={} page={} page_size={}",
                        request,
                        page,
                        page_size
                    );
                    self.engine.fetch(request, page, page_size);
                }
                Effect::ReplaceUrl { query } => {
                    self.location.replace_query(&query);
                    gallery_debug!("Location now {}", self.location.as_str());
                }
                Effect::CancelFetches => self.engine.cancel_pending(),
            }
        }
    }
}

/// Turns engine completions into core messages on the app inbox.
struct MsgSink {
    inbox: mpsc::Sender<AppInput>,
}

impl EventSink for MsgSink {
    fn emit(&self, event: EngineEvent) {
        let EngineEvent::PageFetched {
            request, result, ..
        } = event;
        let result = result.map(map_page).map_err(|err| err.user_message());
        let _ = self
            .inbox
            .send(AppInput::Msg(Msg::PageLoaded { request, result }));
    }
}

fn map_page(records: Vec<ContentRecord>) -> LoadedPage {
    let returned = records.len();
    let items = records.into_iter().filter_map(map_record).collect();
    LoadedPage::new(items, returned)
}

fn map_record(record: ContentRecord) -> Option<ContentItem> {
    let Some(pricing) = PricingOption::from_code(record.pricing_option) else {
        gallery_warn!(
            "Skipping item {} with unknown pricing option {}",
            record.id,
            record.pricing_option
        );
        return None;
    };
    Some(ContentItem::new(
        record.id,
        record.title,
        record.creator,
        pricing,
        record.price,
        record.image_path,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gallery_core::{update, AppState};

    fn record(code: u8, price: Option<f64>) -> ContentRecord {
        record_with_id("1", code, price)
    }

    fn record_with_id(id: &str, code: u8, price: Option<f64>) -> ContentRecord {
        ContentRecord {
            id: id.to_string(),
            title: "Memphis".to_string(),
            creator: "Marco Alves".to_string(),
            price,
            pricing_option: code,
            image_path: "/m.jpg".to_string(),
        }
    }

    #[test]
    fn records_map_to_items() {
        let paid = map_record(record(0, Some(32.0))).unwrap();
        assert_eq!(paid.pricing(), PricingOption::Paid);
        assert_eq!(paid.price(), Some(32.0));

        let free = map_record(record(1, Some(5.0))).unwrap();
        assert_eq!(free.pricing(), PricingOption::Free);
        assert_eq!(free.price(), None);

        assert!(map_record(record(9, None)).is_none());
    }

    #[test]
    fn sink_forwards_failures_as_messages() {
        let (tx, rx) = mpsc::channel();
        let sink = MsgSink { inbox: tx };
        sink.emit(EngineEvent::PageFetched {
            request: 4,
            page: 1,
            result: Err(gallery_engine::FetchError {
                kind: gallery_engine::FailureKind::Network,
                message: "connection refused".to_string(),
            }),
        });

        match rx.recv().unwrap() {
            AppInput::Msg(Msg::PageLoaded { request, result }) => {
                assert_eq!(request, 4);
                assert_eq!(
                    result.unwrap_err(),
                    "Failed to fetch contents (network error)"
                );
            }
            other => panic!("unexpected input {other:?}"),
        }
    }

    #[test]
    fn full_page_with_unknown_pricing_keeps_pagination_open() {
        let (tx, rx) = mpsc::channel();
        let sink = MsgSink { inbox: tx };
        let records: Vec<ContentRecord> = (0..12)
            .map(|i| {
                let code = if i == 5 { 7 } else { 1 };
                record_with_id(&i.to_string(), code, None)
            })
            .collect();

        let (state, effects) = update(
            AppState::new(),
            Msg::Mounted {
                query: String::new(),
            },
        );
        let request = match effects.as_slice() {
            [Effect::FetchPage { request, .. }] => *request,
            other => panic!("unexpected effects {other:?}"),
        };
        sink.emit(EngineEvent::PageFetched {
            request,
            page: 1,
            result: Ok(records),
        });

        let msg = match rx.recv().unwrap() {
            AppInput::Msg(msg) => msg,
            other => panic!("unexpected input {other:?}"),
        };
        let (state, _) = update(state, msg);
        assert_eq!(state.items().len(), 11);
        assert!(state.has_more());
    }
}
