use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::DEFAULT_OUTPUT_FILENAME;
use crate::error::Result;

/// Resolve where the transcript goes: `explicit` if given, otherwise the
/// default file name in the directory holding the running executable.
pub fn resolve_output_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    let exe = std::env::current_exe()?;
    let dir = exe
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    Ok(dir.join(DEFAULT_OUTPUT_FILENAME))
}

/// Write `contents` to `path` as UTF-8, replacing any existing file.
pub fn write_output(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents)?;
    info!(path = %path.display(), bytes = contents.len(), "transcript written");
    Ok(())
}
