//! Flag image module - downloads the PNG named by a country record and
//! turns it into a fixed-size bitmap for the flag display field.

mod decode;

pub use decode::{decode, FlagBitmap, FLAG_HEIGHT, FLAG_WIDTH};

use std::time::Duration;

use iced::widget::image;
use reqwest::StatusCode;
use tracing::{debug, info, warn};

/// Placeholder shown when the record carries no flag URL.
pub const NO_FLAG: &str = "No flag available";
/// Placeholder shown when the download or decode failed.
pub const FLAG_ERROR: &str = "Error loading flag";

#[derive(Debug, thiserror::Error)]
pub enum FlagError {
    #[error("Failed to download flag: {0}")]
    Download(#[from] reqwest::Error),

    #[error("Flag server answered {0}")]
    Status(StatusCode),

    #[error("Failed to decode flag: {0}")]
    Decode(#[from] ::image::ImageError),

    #[error("Flag decode worker failed: {0}")]
    Worker(String),
}

/// Result of fetching a flag. Failures are already folded into placeholders.
#[derive(Debug, Clone, PartialEq)]
pub enum FlagOutcome {
    Loaded(FlagBitmap),
    NoFlag,
    Failed,
}

impl FlagOutcome {
    /// Placeholder text for outcomes that have no image.
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            FlagOutcome::Loaded(_) => None,
            FlagOutcome::NoFlag => Some(NO_FLAG),
            FlagOutcome::Failed => Some(FLAG_ERROR),
        }
    }
}

impl FlagBitmap {
    /// Hand the pixels to iced as an image handle.
    pub fn into_handle(self) -> image::Handle {
        image::Handle::from_rgba(self.width, self.height, self.rgba)
    }
}

/// Downloads and decodes flag images.
#[derive(Debug, Clone)]
pub struct FlagFetcher {
    http: reqwest::Client,
    timeout: Duration,
}

impl FlagFetcher {
    pub fn new(http: reqwest::Client, timeout: Duration) -> Self {
        Self { http, timeout }
    }

    /// Fetch the flag at `url`. An empty URL yields [`FlagOutcome::NoFlag`]
    /// without a request.
    pub async fn fetch(&self, url: &str) -> FlagOutcome {
        if url.is_empty() {
            debug!("Record has no flag URL");
            return FlagOutcome::NoFlag;
        }

        match self.download_and_decode(url).await {
            Ok(bitmap) => {
                info!(%url, "Flag loaded");
                FlagOutcome::Loaded(bitmap)
            }
            Err(e) => {
                warn!(error = %e, %url, "Flag unavailable");
                FlagOutcome::Failed
            }
        }
    }

    async fn download_and_decode(&self, url: &str) -> Result<FlagBitmap, FlagError> {
        let response = self.http.get(url).timeout(self.timeout).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FlagError::Status(status));
        }

        let bytes = response.bytes().await?;
        debug!(bytes = bytes.len(), "Flag downloaded, decoding");

        // Lanczos over the whole image is CPU-bound; keep it off the executor.
        tokio::task::spawn_blocking(move || decode(&bytes))
            .await
            .map_err(|e| FlagError::Worker(e.to_string()))?
    }
}
