use std::env;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

pub static PATH_HOME: LazyLock<PathBuf> =
    LazyLock::new(|| PathBuf::from(env::var("HOME").unwrap()));

pub static PATH_LOCAL_SHARE: LazyLock<PathBuf> = LazyLock::new(|| {
    if let Ok(xdg_data_home) = env::var("XDG_DATA_HOME") {
        return PathBuf::from(xdg_data_home);
    }
    PATH_HOME.join(".local/share")
});

/// Where gridscout keeps its own settings and artwork cache.
pub static PATH_GRIDSCOUT: LazyLock<PathBuf> =
    LazyLock::new(|| PATH_LOCAL_SHARE.join("gridscout"));

/// Detect the Steam install directory.
///
/// An explicit override (from settings) wins when it points at an existing
/// directory; otherwise the standard Linux locations are probed in order:
/// native install, the ~/.steam/steam symlink, flatpak.
pub fn steam_root(override_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = override_path
        && !path.as_os_str().is_empty()
        && path.is_dir()
    {
        return Some(path.to_path_buf());
    }

    let candidates = [
        PATH_LOCAL_SHARE.join("Steam"),
        PATH_HOME.join(".steam/steam"),
        PATH_HOME.join(".var/app/com.valvesoftware.Steam/.local/share/Steam"),
    ];

    candidates.into_iter().find(|path| path.is_dir())
}

/// Resolve the userdata directory for a Steam install, honoring an
/// explicit override first.
pub fn userdata_root(steam_root: &Path, override_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = override_path
        && !path.as_os_str().is_empty()
        && path.is_dir()
    {
        return Some(path.to_path_buf());
    }

    let userdata = steam_root.join("userdata");
    userdata.is_dir().then_some(userdata)
}
