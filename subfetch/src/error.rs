/// All errors that can occur in subfetch.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unexpected API response: {body}")]
    UnexpectedResponse { body: serde_json::Value },

    #[error("no API key: pass --api-key or set BIBIGPT_API_KEY")]
    MissingApiKey,

    #[error("invalid option: {0}")]
    InvalidOption(String),

    #[error("response body is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether the API answered with well-formed JSON that lacked the expected fields.
    pub fn is_unexpected_response(&self) -> bool {
        matches!(self, Error::UnexpectedResponse { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
