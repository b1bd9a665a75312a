//! Utility functions for logging and file system checks.

use std::error::Error;
use std::fs as stdfs;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

/// Truncate a string for logging purposes.
///
/// Long strings are cut to at most `max` bytes (on a character boundary)
/// with an ellipsis and the number of dropped bytes appended.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log(&"a".repeat(500), 10), "aaaaaaaaaa…(+490 bytes)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut cut = max;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}…(+{} bytes)", &s[..cut], s.len() - cut)
}

/// Ensure a directory exists and is writable.
///
/// Creates the directory if needed, then creates and removes a probe file.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or is not writable
/// (permission denied, read-only filesystem, etc.).
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn ensure_writable_dir(path: &Path) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(path).await?;
    // Try a small sync write using std fs (simpler error surface)
    let probe_path = path.join("..__probe_write__");
    match stdfs::File::create(&probe_path) {
        Ok(_) => {
            let _ = stdfs::remove_file(&probe_path);
            info!("Output directory is writable");
            Ok(())
        }
        Err(e) => Err(format!("{} is not writable: {e}", path.display()).into()),
    }
}
