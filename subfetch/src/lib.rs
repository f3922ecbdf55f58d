//! Subtitle transcript fetcher: video URL in, timestamped transcript file out.
//!
//! **subfetch** asks the BibiGPT subtitle API for a video's captions, checks
//! the response, and renders each caption as a `[HH:MM:SS] text` line.
//!
//! # Quick start
//!
//! ```rust,no_run
//! # #[tokio::main]
//! # async fn main() -> subfetch::Result<()> {
//! let options = subfetch::FetchOptions::new().api_key("my-key");
//! let transcript = subfetch::fetch_transcript(&options).await?;
//!
//! let path = subfetch::output::resolve_output_path(None)?;
//! subfetch::output::write_output(&path, &transcript.to_text())?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod fetch;
pub mod output;
pub mod response;
pub mod types;

pub use config::FetchOptions;
pub use error::{Error, Result};
pub use types::{format_timestamp, SubtitleEntry, Transcript};

/// Fetch, validate and collect the subtitles for `options.video_url`.
///
/// Returns `Error::UnexpectedResponse` when the API answers without a
/// truthy `success` flag or without `detail.subtitlesArray`.
pub async fn fetch_transcript(options: &FetchOptions) -> Result<Transcript> {
    let body = fetch::fetch_response(options).await?;
    let entries = response::extract_subtitles(body)?;

    tracing::info!(entries = entries.len(), "subtitles parsed");

    Ok(Transcript {
        source_url: options.video_url.clone(),
        language: options.audio_language.clone(),
        entries,
    })
}
