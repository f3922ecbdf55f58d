use std::time::Duration;

use crate::error::{Error, Result};

/// BibiGPT subtitle endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.bibigpt.co/api/v1/getSubtitle";

/// Video fetched when no other URL is given.
pub const DEFAULT_VIDEO_URL: &str = "https://www.bilibili.com/video/BV1PC4y1E769";

/// Spoken-language hint sent as `audioLanguage`.
pub const DEFAULT_AUDIO_LANGUAGE: &str = "zh";

/// Transcript file name, placed next to the executable by default.
pub const DEFAULT_OUTPUT_FILENAME: &str = "奇门遁甲课程_逐字稿.txt";

/// How long to wait for the API before giving up.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Builder for fetch options.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub endpoint: String,
    pub video_url: String,
    pub api_key: Option<String>,
    pub audio_language: String,
    pub timeout: Duration,
    pub progress: bool,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            video_url: DEFAULT_VIDEO_URL.into(),
            api_key: None,
            audio_language: DEFAULT_AUDIO_LANGUAGE.into(),
            timeout: DEFAULT_TIMEOUT,
            progress: false,
        }
    }
}

impl FetchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.trim().to_string();
        self
    }

    pub fn video_url(mut self, url: &str) -> Self {
        self.video_url = url.trim().to_string();
        self
    }

    /// Set the bearer token. Blank keys are treated as absent.
    pub fn api_key(mut self, key: &str) -> Self {
        let key = key.trim();
        self.api_key = (!key.is_empty()).then(|| key.to_string());
        self
    }

    pub fn audio_language(mut self, code: &str) -> Self {
        self.audio_language = code.trim().to_string();
        self
    }

    /// Set the request timeout. Zero is rejected.
    pub fn timeout(mut self, timeout: Duration) -> Result<Self> {
        if timeout.is_zero() {
            return Err(Error::InvalidOption("timeout must be greater than zero".into()));
        }
        self.timeout = timeout;
        Ok(self)
    }

    /// Show a spinner on stderr while waiting for the response.
    pub fn progress(mut self, enabled: bool) -> Self {
        self.progress = enabled;
        self
    }

    /// The API key, or `Error::MissingApiKey`.
    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or(Error::MissingApiKey)
    }
}
