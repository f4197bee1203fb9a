//! Locating the log file to follow.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::ScoutError;

/// Most recently modified regular file in `dir`.
///
/// The parser plugin starts a new log per session, so the newest file is
/// the one still being written.
pub fn latest_log_file(dir: &Path) -> Result<PathBuf, ScoutError> {
    let dir_err = |source| ScoutError::LogDirectory {
        path: dir.to_path_buf(),
        source,
    };

    let mut newest: Option<(SystemTime, PathBuf)> = None;
    for entry in fs::read_dir(dir).map_err(dir_err)? {
        let entry = entry.map_err(dir_err)?;
        let metadata = entry.metadata().map_err(dir_err)?;
        if !metadata.is_file() {
            continue;
        }
        let modified = metadata.modified().map_err(dir_err)?;

        let is_newer = newest
            .as_ref()
            .is_none_or(|(current, _)| modified > *current);
        if is_newer {
            newest = Some((modified, entry.path()));
        }
    }

    newest
        .map(|(_, path)| path)
        .ok_or_else(|| ScoutError::NoLogFiles(dir.to_path_buf()))
}
