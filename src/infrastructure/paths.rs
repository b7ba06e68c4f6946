//! Filesystem locations inside the Zellij plugin sandbox.
//!
//! Zellij mounts the host filesystem under `/host`, which normally resolves to
//! the directory Zellij was started from (usually the user's home).

use std::path::PathBuf;

/// Sandbox mount point of the host filesystem.
const HOST_ROOT: &str = "/host";

/// Returns the plugin's data directory.
///
/// Resolves to `/host/.local/share/zellij/world-cuisines`, typically
/// `~/.local/share/zellij/world-cuisines` on the host. Trace files live here.
///
/// # Examples
///
/// ```
/// use world_cuisines::infrastructure::get_data_dir;
///
/// assert!(get_data_dir().ends_with("zellij/world-cuisines"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT).join(".local/share/zellij/world-cuisines")
}

/// Maps a user-supplied path such as a `theme_file` option into the sandbox.
///
/// `~` and `~/…` point at the host root; every other path is left alone.
#[must_use]
pub fn resolve_user_path(path: &str) -> PathBuf {
    match path.strip_prefix('~') {
        Some("") => PathBuf::from(HOST_ROOT),
        Some(rest) if rest.starts_with('/') => PathBuf::from(format!("{HOST_ROOT}{rest}")),
        _ => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_paths_resolve_under_host() {
        assert_eq!(resolve_user_path("~"), PathBuf::from("/host"));
        assert_eq!(
            resolve_user_path("~/themes/spice.toml"),
            PathBuf::from("/host/themes/spice.toml")
        );
    }

    #[test]
    fn other_paths_are_untouched() {
        assert_eq!(resolve_user_path("/etc/theme.toml"), PathBuf::from("/etc/theme.toml"));
        assert_eq!(resolve_user_path("~bob/theme.toml"), PathBuf::from("~bob/theme.toml"));
    }
}
