use serde::{Deserialize, Serialize};

/// One timed caption unit as returned in `detail.subtitlesArray`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubtitleEntry {
    /// Offset from the start of the video, in seconds (may be fractional).
    pub start_time: f64,
    pub text: String,
}

impl SubtitleEntry {
    /// Format as a transcript line: `[HH:MM:SS] text`.
    pub fn to_line(&self) -> String {
        format!("[{}] {}", format_timestamp(self.start_time), self.text)
    }
}

/// Ordered subtitles for one video.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    pub source_url: String,
    pub language: String,
    pub entries: Vec<SubtitleEntry>,
}

impl Transcript {
    /// Number of subtitle entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// One formatted line per entry, in API order.
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(SubtitleEntry::to_line).collect()
    }

    /// Lines joined by `\n`, without a trailing newline.
    pub fn to_text(&self) -> String {
        self.lines().join("\n")
    }

    /// Format as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Format elapsed seconds as `HH:MM:SS`, truncating the fraction.
///
/// Negative and NaN inputs clamp to zero. Hours widen past two digits
/// instead of wrapping.
pub fn format_timestamp(seconds: f64) -> String {
    let total = seconds.max(0.0).floor() as u64;
    let h = total / 3600;
    let m = (total % 3600) / 60;
    let s = total % 60;
    format!("{h:02}:{m:02}:{s:02}")
}
