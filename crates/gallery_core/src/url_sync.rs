//! Query-string codec for the shareable gallery URL.
//!
//! Only `q` and the `paid`/`free`/`view` flags travel in the URL. Parameters at
//! their default value are omitted so links stay minimal.

use url::form_urlencoded;

use crate::{FilterSet, PricingOption, QueryState};

pub const SEARCH_PARAM: &str = "q";

/// Decodes a query string (with or without the leading `?`) into a query.
///
/// Unknown parameters are ignored; names and the flag value are matched
/// exactly, so `PAID=true` or `paid=TRUE` leave the filter unset.
/// Sort order is not carried in the URL and stays at its default.
pub fn decode_query(raw: &str) -> QueryState {
    let raw = raw.strip_prefix('?').unwrap_or(raw);
    let mut query = QueryState::default();
    for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
        if key == SEARCH_PARAM {
            query.search_text = value.into_owned();
        } else if let Some(option) = PricingOption::from_param_name(&key) {
            if value == "true" {
                query.filters.insert(option);
            }
        }
    }
    query
}

/// Encodes the non-default URL fields of `query`, without a leading `?`.
///
/// Returns an empty string when everything is at its default.
pub fn encode_query(query: &QueryState) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    if !query.search_text.is_empty() {
        serializer.append_pair(SEARCH_PARAM, &query.search_text);
    }
    append_filters(&mut serializer, &query.filters);
    serializer.finish()
}

fn append_filters(serializer: &mut form_urlencoded::Serializer<'_, String>, filters: &FilterSet) {
    for option in filters.iter() {
        serializer.append_pair(option.param_name(), "true");
    }
}
