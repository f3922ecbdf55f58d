use std::time::Duration;

use futures_util::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Url;
use serde_json::Value;
use tracing::{debug, info};

use crate::config::FetchOptions;
use crate::error::{Error, Result};

/// Build the subtitle request URL. The video URL and language travel as
/// percent-encoded query parameters.
pub fn build_request_url(options: &FetchOptions) -> Result<Url> {
    Url::parse_with_params(
        &options.endpoint,
        &[
            ("url", options.video_url.as_str()),
            ("audioLanguage", options.audio_language.as_str()),
        ],
    )
    .map_err(|e| Error::InvalidOption(format!("invalid endpoint {}: {e}", options.endpoint)))
}

/// Issue the subtitle request and parse the body as JSON.
///
/// The HTTP status is not inspected: the API reports failures inside the
/// JSON body, which the caller validates. Timeouts and connection failures
/// surface as `Error::Http`.
pub async fn fetch_response(options: &FetchOptions) -> Result<Value> {
    let api_key = options.require_api_key()?;
    let url = build_request_url(options)?;

    info!(video = %options.video_url, language = %options.audio_language, "requesting subtitles");
    debug!(%url, timeout_secs = options.timeout.as_secs(), "GET");

    let client = reqwest::Client::builder().timeout(options.timeout).build()?;

    let pb = spinner(options.progress);
    let result = read_body(&client, url, api_key, &pb).await;
    pb.finish_and_clear();
    let body = result?;

    info!(bytes = body.len(), "response received");
    parse_body(body)
}

async fn read_body(
    client: &reqwest::Client,
    url: Url,
    api_key: &str,
    pb: &ProgressBar,
) -> Result<Vec<u8>> {
    let response = client.get(url).bearer_auth(api_key).send().await?;
    debug!(status = %response.status(), "response headers received");

    let mut body = Vec::new();
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        body.extend_from_slice(&chunk);
        pb.set_position(body.len() as u64);
    }
    Ok(body)
}

/// Decode as UTF-8, then parse as JSON.
fn parse_body(body: Vec<u8>) -> Result<Value> {
    let text = String::from_utf8(body)?;
    Ok(serde_json::from_str(&text)?)
}

/// Spinner ticked from indicatif's own thread; hidden (no thread) when disabled.
fn spinner(enabled: bool) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} [{elapsed_precise}] {bytes}")
            .expect("valid template"),
    );
    pb.set_message("Waiting for subtitles");
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}
