use url::Url;

use super::ui::input::query_part;

pub const DEFAULT_LOCATION: &str = "gallery://local/";

/// The shareable address of the current view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    url: Url,
}

impl Location {
    pub fn parse(link: &str) -> Result<Self, url::ParseError> {
        Ok(Self {
            url: Url::parse(link)?,
        })
    }

    /// Current query string without the leading `?`.
    pub fn query(&self) -> &str {
        self.url.query().unwrap_or("")
    }

    pub fn replace_query(&mut self, query: &str) {
        if query.is_empty() {
            self.url.set_query(None);
        } else {
            self.url.set_query(Some(query));
        }
    }

    /// Follows a pasted link or bare query string, keeping the current base.
    pub fn navigate(&mut self, link: &str) {
        self.replace_query(query_part(link));
    }

    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }
}
