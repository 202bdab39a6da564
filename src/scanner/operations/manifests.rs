// Installed-game discovery: libraryfolders.vdf + appmanifest_*.acf

use crate::diag::Diagnostics;
use crate::scanner::types::GameEntry;
use crate::vdf;

use std::path::{Path, PathBuf};

/// Scan every Steam library known to this install for installed games.
///
/// Library roots come from `steamapps/libraryfolders.vdf`; when that file
/// is missing (fresh or ancient installs) the install's own `steamapps`
/// directory is scanned as a library of one. A missing or unreadable
/// `steam_root` yields an empty catalog, never an error.
pub fn scan_installed(steam_root: &Path, diag: &mut Diagnostics) -> Vec<GameEntry> {
    let mut out = Vec::new();

    let library_vdf = steam_root.join("steamapps/libraryfolders.vdf");
    let root = match vdf::load_text(&library_vdf) {
        Ok(root) => root,
        Err(_) => {
            scan_manifest_dir(&steam_root.join("steamapps"), diag, &mut out);
            return out;
        }
    };

    for steamapps in library_roots(&root) {
        scan_manifest_dir(&steamapps, diag, &mut out);
    }

    out
}

/// Extract `<path>/steamapps` for every library folder entry.
///
/// libraryfolders.vdf structure:
///   "libraryfolders" { "0" { "path" "..." ... } "1" { ... } }
fn library_roots(root: &vdf::VdfMap) -> Vec<PathBuf> {
    let Some(folders) = root.get_map("libraryfolders") else {
        return Vec::new();
    };

    folders
        .iter()
        .filter_map(|(_, value)| value.as_map())
        .filter_map(|library| library.get_str("path"))
        .map(|path| Path::new(path).join("steamapps"))
        .collect()
}

fn scan_manifest_dir(steamapps: &Path, diag: &mut Diagnostics, out: &mut Vec<GameEntry>) {
    let Ok(entries) = std::fs::read_dir(steamapps) else {
        return;
    };

    for entry_result in entries {
        let Ok(entry) = entry_result else {
            continue;
        };
        let path = entry.path();
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !file_name.starts_with("appmanifest_") || !file_name.ends_with(".acf") {
            continue;
        }

        match vdf::load_text(&path) {
            Ok(doc) => {
                if let Some(game) = manifest_entry(&doc, steamapps) {
                    out.push(game);
                } else {
                    diag.warn(format!(
                        "manifest {} has no usable AppState (appid/name missing)",
                        path.display()
                    ));
                }
            }
            Err(e) => diag.warn(format!("failed to read manifest {}: {}", path.display(), e)),
        }
    }
}

/// Build a catalog entry from a parsed manifest, requiring non-empty
/// `appid` and `name` under `AppState`.
fn manifest_entry(doc: &vdf::VdfMap, steamapps: &Path) -> Option<GameEntry> {
    let state = doc.get_map("AppState")?;
    let app_id = state.get_str("appid").filter(|s| !s.is_empty())?;
    let name = state.get_str("name").filter(|s| !s.is_empty())?;

    let install_path = state
        .get_str("installdir")
        .filter(|s| !s.is_empty())
        .map(|dir| steamapps.join("common").join(dir));

    Some(GameEntry::installed(
        app_id.to_string(),
        name.to_string(),
        install_path,
    ))
}
