//! Filesystem paths for cache data (TUI-mode log file).

use std::path::PathBuf;

use directories::ProjectDirs;

/// Cache directory for this application (e.g. ~/.cache/ask-me-bot on Linux).
pub fn cache_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "ask-me-bot").map(|d| d.cache_dir().to_path_buf())
}
