//! Default log directory detection for ACT and IINACT.

use std::path::PathBuf;

/// Where the parser plugins write their logs when left at defaults, in
/// the order they are tried.
pub fn candidate_log_directories() -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    // %APPDATA% on Windows
    if let Some(dir) = dirs::config_dir() {
        candidates.push(dir.join("Advanced Combat Tracker").join("FFXIVLogs"));
    }
    if let Some(dir) = dirs::document_dir() {
        candidates.push(dir.join("IINACT"));
    }
    if let Some(dir) = dirs::home_dir() {
        candidates.push(dir.join("Documents").join("IINACT"));
    }
    candidates.dedup();
    candidates
}

/// First candidate directory that exists.
pub fn detect_log_directory() -> Option<PathBuf> {
    candidate_log_directories()
        .into_iter()
        .find(|dir| dir.is_dir())
}
