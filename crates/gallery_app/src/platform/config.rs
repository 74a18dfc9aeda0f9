use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use gallery_core::{GalleryOptions, DEFAULT_PAGE_SIZE, DEFAULT_SCROLL_THRESHOLD};
use gallery_engine::{SourceSettings, DEFAULT_ENDPOINT};
use serde::Deserialize;

use super::logging::LogDestination;

pub const DEFAULT_CONFIG_FILE: &str = "gallery.ron";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
}

/// Settings read from `gallery.ron`; every field may be omitted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    pub endpoint: String,
    pub page_size: u32,
    pub scroll_threshold: u32,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub max_bytes: u64,
    pub log: LogDestination,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        let source = SourceSettings::default();
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
            connect_timeout_secs: source.connect_timeout.as_secs(),
            request_timeout_secs: source.request_timeout.as_secs(),
            max_bytes: source.max_bytes,
            log: LogDestination::default(),
        }
    }
}

impl GalleryConfig {
    /// Loads `path`; `Ok(None)` when the file does not exist.
    pub fn load(path: &Path) -> Result<Option<Self>, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        ron::from_str(&content)
            .map(Some)
            .map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Loads `path`, falling back to defaults when it is missing.
    ///
    /// The second value is false when the defaults were used, so the caller
    /// can report the fallback once logging is up.
    pub fn load_or_default(path: &Path) -> Result<(Self, bool), ConfigError> {
        Ok(match Self::load(path)? {
            Some(config) => (config, true),
            None => (Self::default(), false),
        })
    }

    pub fn gallery_options(&self) -> GalleryOptions {
        GalleryOptions::new(self.page_size, self.scroll_threshold)
    }

    pub fn source_settings(&self) -> SourceSettings {
        SourceSettings {
            endpoint: self.endpoint.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            max_bytes: self.max_bytes,
            ..SourceSettings::default()
        }
    }
}
