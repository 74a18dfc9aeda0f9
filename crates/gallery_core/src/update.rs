use gallery_logging::{gallery_debug, gallery_info, gallery_warn};

use crate::state::InFlight;
use crate::url_sync::{decode_query, encode_query};
use crate::{AppState, Effect, LoadStatus, LoadedPage, Msg, RequestId};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Mounted { query } => {
            let seeded = decode_query(&query);
            let query_mut = state.query_mut();
            query_mut.search_text = seeded.search_text;
            query_mut.filters = seeded.filters;
            state.set_mounted(true);
            start_initial(&mut state)
        }
        Msg::Navigated { query } => {
            let seeded = decode_query(&query);
            if seeded.search_text != state.query().search_text
                || seeded.filters != state.query().filters
            {
                let query_mut = state.query_mut();
                query_mut.search_text = seeded.search_text;
                query_mut.filters = seeded.filters;
            }
            Vec::new()
        }
        Msg::SearchChanged(text) => {
            if text == state.query().search_text {
                Vec::new()
            } else {
                state.query_mut().search_text = text;
                vec![url_effect(&state)]
            }
        }
        Msg::FilterToggled(option) => {
            state.query_mut().filters.toggle(option);
            vec![url_effect(&state)]
        }
        Msg::SortChanged(key) => {
            if key != state.query().sort_key {
                state.query_mut().sort_key = key;
            }
            Vec::new()
        }
        Msg::FiltersReset => {
            if state.query().filters.is_empty() {
                Vec::new()
            } else {
                state.query_mut().filters.clear();
                vec![url_effect(&state)]
            }
        }
        Msg::MoreRequested => request_more(&mut state),
        Msg::Scrolled(sample) => {
            if sample.near_bottom(state.options().scroll_threshold()) {
                request_more(&mut state)
            } else {
                Vec::new()
            }
        }
        Msg::ReloadRequested => {
            if !state.is_mounted() || state.status() == LoadStatus::LoadingInitial {
                Vec::new()
            } else {
                start_initial(&mut state)
            }
        }
        Msg::PageLoaded { request, result } => {
            apply_completion(&mut state, request, result);
            Vec::new()
        }
        Msg::Unmounted => {
            state.set_mounted(false);
            match state.take_in_flight() {
                Some(in_flight) => {
                    gallery_debug!("Unmounted with request {} pending", in_flight.request);
                    vec![Effect::CancelFetches]
                }
                None => Vec::new(),
            }
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// Load-more guard: at most one fetch in flight, nothing past the last page.
fn request_more(state: &mut AppState) -> Vec<Effect> {
    if !state.is_mounted() {
        return Vec::new();
    }
    if let Some(in_flight) = state.in_flight() {
        gallery_debug!(
            "Load-more ignored; request {} for page {} in flight",
            in_flight.request,
            in_flight.page
        );
        return Vec::new();
    }
    match state.status() {
        // Nothing was ever loaded; try the first page again.
        LoadStatus::Error if state.page() == 0 => start_initial(state),
        LoadStatus::Ready | LoadStatus::Error if state.has_more() => start_more(state),
        _ => Vec::new(),
    }
}

fn apply_completion(
    state: &mut AppState,
    request: RequestId,
    result: Result<LoadedPage, String>,
) {
    let in_flight = match state.in_flight() {
        Some(in_flight) if in_flight.request == request => in_flight,
        _ => {
            gallery_debug!("Discarding stale result for request {}", request);
            return;
        }
    };
    state.take_in_flight();

    match result {
        Ok(page) => {
            gallery_info!(
                "Page {} loaded with {} items of {} returned (request {})",
                in_flight.page,
                page.items.len(),
                page.returned,
                request
            );
            state.apply_page(in_flight, page);
        }
        Err(message) => {
            gallery_warn!(
                "Page {} failed (request {}): {}",
                in_flight.page,
                request,
                message
            );
            state.apply_failure(message);
        }
    }
}

fn start_initial(state: &mut AppState) -> Vec<Effect> {
    let in_flight = state.begin_initial();
    vec![fetch_effect(state, in_flight)]
}

fn start_more(state: &mut AppState) -> Vec<Effect> {
    let in_flight = state.begin_more();
    vec![fetch_effect(state, in_flight)]
}

fn fetch_effect(state: &AppState, in_flight: InFlight) -> Effect {
    gallery_debug!(
        "Requesting page {} (request {})",
        in_flight.page,
        in_flight.request
    );
    Effect::FetchPage {
        request: in_flight.request,
        page: in_flight.page,
        page_size: state.options().page_size(),
    }
}

fn url_effect(state: &AppState) -> Effect {
    Effect::ReplaceUrl {
        query: encode_query(state.query()),
    }
}
