//! Path utilities for user-supplied file arguments.

use std::path::PathBuf;

/// `~/fotos/obra.jpg` → `/home/<user>/fotos/obra.jpg`
pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}
