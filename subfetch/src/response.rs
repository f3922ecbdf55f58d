use serde_json::Value;
use tracing::warn;

use crate::error::{Error, Result};
use crate::types::SubtitleEntry;

/// Check the API response and pull out its subtitle entries.
///
/// Requires a truthy `success`, a non-null `detail` and a non-null
/// `detail.subtitlesArray`. Anything else is returned as
/// `Error::UnexpectedResponse` carrying the raw body.
pub fn extract_subtitles(body: Value) -> Result<Vec<SubtitleEntry>> {
    let Some(subtitles) = subtitles_array(&body).cloned() else {
        return Err(Error::UnexpectedResponse { body });
    };

    let entries: Vec<SubtitleEntry> = serde_json::from_value(subtitles)?;
    warn_if_unordered(&entries);
    Ok(entries)
}

fn subtitles_array(body: &Value) -> Option<&Value> {
    if !is_truthy(body.get("success")?) {
        return None;
    }
    body.get("detail")
        .filter(|d| !d.is_null())?
        .get("subtitlesArray")
        .filter(|s| !s.is_null())
}

/// JSON truthiness as the API's own clients judge the `success` flag.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// The API is assumed to return entries in chronological order. Keep its
/// order, but say so when that does not hold.
fn warn_if_unordered(entries: &[SubtitleEntry]) {
    if let Some(i) = entries
        .windows(2)
        .position(|w| w[1].start_time < w[0].start_time)
    {
        warn!(
            index = i + 1,
            previous = entries[i].start_time,
            current = entries[i + 1].start_time,
            "subtitle start times are not in chronological order"
        );
    }
}
