use std::path::PathBuf;

/// One discovered game, Steam-installed or non-Steam shortcut.
///
/// Entries are immutable snapshots rebuilt on every scan; the only field a
/// caller ever sets afterwards is `real_id`, when the user manually matches
/// a shortcut against the Steam catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct GameEntry {
    /// Artwork key: the manifest appid for installed games, the derived
    /// 32-bit shortcut ID for non-Steam games. Grid filenames are always
    /// built from this value.
    pub app_id: String,
    pub name: String,
    /// True when sourced from an appmanifest, false for shortcuts.
    pub is_steam: bool,
    pub install_path: Option<PathBuf>,
    /// Userdata profile directory the shortcut belongs to. Installed games
    /// are machine-global and carry no profile.
    pub user_id: Option<String>,
    /// Official Steam catalog ID used for fetching reference artwork.
    /// Always equal to `app_id` for installed games; for shortcuts it is
    /// only present after a manual match and must never leak into grid
    /// filenames.
    pub real_id: Option<String>,
}

impl GameEntry {
    pub fn installed(app_id: String, name: String, install_path: Option<PathBuf>) -> Self {
        Self {
            real_id: Some(app_id.clone()),
            app_id,
            name,
            is_steam: true,
            install_path,
            user_id: None,
        }
    }

    pub fn shortcut(app_id: String, name: String, exe: Option<PathBuf>, user_id: String) -> Self {
        Self {
            app_id,
            name,
            is_steam: false,
            install_path: exe,
            user_id: Some(user_id),
            real_id: None,
        }
    }

    /// ID to use when querying the Steam catalog for artwork. Falls back to
    /// `app_id`, which for shortcuts will usually miss.
    pub fn lookup_id(&self) -> &str {
        self.real_id.as_deref().unwrap_or(&self.app_id)
    }
}
