use std::time::Duration;

use futures_util::StreamExt;
use gallery_logging::{gallery_debug, gallery_info};

use crate::{ContentRecord, FailureKind, FetchError};

pub const DEFAULT_ENDPOINT: &str = "https://closet-recruiting-api.azurewebsites.net/api/data";

#[derive(Debug, Clone)]
pub struct SourceSettings {
    pub endpoint: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub redirect_limit: usize,
    pub max_bytes: u64,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            redirect_limit: 5,
            max_bytes: 8 * 1024 * 1024,
        }
    }
}

/// A paged view over the remote content list.
#[async_trait::async_trait]
pub trait ContentSource: Send + Sync {
    /// Returns the items of 1-based `page`, at most `page_size` of them.
    async fn fetch(&self, page: u32, page_size: u32) -> Result<Vec<ContentRecord>, FetchError>;
}

/// Fetches the whole list with one GET and slices it locally; the endpoint has
/// no paging parameters of its own.
#[derive(Debug, Clone)]
pub struct ReqwestContentSource {
    settings: SourceSettings,
    client: reqwest::Client,
}

impl ReqwestContentSource {
    pub fn new(settings: SourceSettings) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .redirect(reqwest::redirect::Policy::limited(settings.redirect_limit))
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    pub fn settings(&self) -> &SourceSettings {
        &self.settings
    }

    async fn fetch_all(&self) -> Result<Vec<ContentRecord>, FetchError> {
        let url = reqwest::Url::parse(&self.settings.endpoint)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;

        let response = self.client.get(url).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let max_bytes = self.settings.max_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(too_large(max_bytes, content_len));
            }
        }

        let mut body = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = body.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(too_large(max_bytes, next_len));
            }
            body.extend_from_slice(&chunk);
        }

        let records: Vec<ContentRecord> = serde_json::from_slice(&body)
            .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))?;
        gallery_debug!(
            "Fetched {} records ({} bytes) from {}",
            records.len(),
            body.len(),
            self.settings.endpoint
        );
        Ok(records)
    }
}

#[async_trait::async_trait]
impl ContentSource for ReqwestContentSource {
    async fn fetch(&self, page: u32, page_size: u32) -> Result<Vec<ContentRecord>, FetchError> {
        if page == 0 || page_size == 0 {
            return Err(FetchError::new(
                FailureKind::InvalidPage,
                format!("page {page} with size {page_size}"),
            ));
        }
        let all = self.fetch_all().await?;
        let slice = paginate(all, page, page_size);
        gallery_info!("Page {} (size {}) -> {} items", page, page_size, slice.len());
        Ok(slice)
    }
}

/// Items of 1-based `page`; empty once past the end.
pub fn paginate<T>(items: Vec<T>, page: u32, page_size: u32) -> Vec<T> {
    let size = page_size as usize;
    let start = (page.saturating_sub(1) as usize).saturating_mul(size);
    items.into_iter().skip(start).take(size).collect()
}

fn too_large(max_bytes: u64, actual: u64) -> FetchError {
    FetchError::new(
        FailureKind::TooLarge {
            max_bytes,
            actual: Some(actual),
        },
        "response too large",
    )
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}

#[cfg(test)]
mod tests {
    use super::paginate;

    #[test]
    fn paginate_slices_by_page() {
        let items: Vec<u32> = (1..=30).collect();
        assert_eq!(paginate(items.clone(), 1, 12), (1..=12).collect::<Vec<_>>());
        assert_eq!(paginate(items.clone(), 3, 12), (25..=30).collect::<Vec<_>>());
        assert!(paginate(items, 4, 12).is_empty());
    }

    #[test]
    fn paginate_survives_huge_page_numbers() {
        let items: Vec<u32> = (1..=3).collect();
        assert!(paginate(items, u32::MAX, u32::MAX).is_empty());
    }
}
