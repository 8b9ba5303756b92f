//! Generic path utilities.

use std::path::{Path, PathBuf};

/// Expand a leading `~` to the user's home directory.
///
/// Paths without a tilde are returned unchanged.
pub fn expand_tilde(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}

/// Walk up from `start` looking for a directory that contains `marker`.
///
/// Returns the first ancestor (including `start` itself) where
/// `ancestor.join(marker)` exists.
pub fn find_dir_with_marker(start: &Path, marker: &str) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(marker).exists())
        .map(Path::to_path_buf)
}

/// The platform configuration directory for `app`, e.g.
/// `~/.config/halias` on Linux.
pub fn app_config_dir(app: &str) -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(app))
}
