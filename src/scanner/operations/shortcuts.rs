// Non-Steam shortcut discovery: userdata/<id>/config/shortcuts.vdf

use crate::diag::Diagnostics;
use crate::scanner::pure::shortcut_id::derive_app_id;
use crate::scanner::types::GameEntry;
use crate::vdf;

use std::path::{Path, PathBuf};

// Field casing differs across the Steam versions that wrote the file.
const NAME_KEYS: [&str; 2] = ["AppName", "appname"];
const EXE_KEYS: [&str; 2] = ["Exe", "exe"];

/// Scan every profile under `userdata_root` for non-Steam shortcuts.
///
/// Each shortcut's artwork ID is derived fresh from `(Exe, AppName)`; the
/// `appid` stored in the file is ignored on purpose — Steam versions
/// disagree about what they write there, the derivation is what names the
/// grid files.
pub fn scan_shortcuts(userdata_root: &Path, diag: &mut Diagnostics) -> Vec<GameEntry> {
    let mut out = Vec::new();

    for (user_id, shortcuts_path) in profile_shortcut_files(userdata_root) {
        match vdf::load_binary(&shortcuts_path) {
            Ok(doc) => collect_shortcuts(&doc, &user_id, diag, &mut out),
            Err(e) => diag.error(format!(
                "failed to read {}: {}",
                shortcuts_path.display(),
                e
            )),
        }
    }

    out
}

/// `(profile dir name, shortcuts.vdf path)` for every digit-named profile
/// that has one. Order is filesystem iteration order.
fn profile_shortcut_files(userdata_root: &Path) -> Vec<(String, PathBuf)> {
    let mut out = Vec::new();

    let Ok(entries) = std::fs::read_dir(userdata_root) else {
        return out;
    };

    for entry_result in entries {
        if let Ok(entry) = entry_result
            && let Ok(file_type) = entry.file_type()
            && file_type.is_dir()
            && let Some(name) = entry.file_name().to_str()
            && !name.is_empty()
            && name.bytes().all(|b| b.is_ascii_digit())
        {
            let shortcuts_path = entry.path().join("config/shortcuts.vdf");
            if shortcuts_path.exists() {
                out.push((name.to_string(), shortcuts_path));
            }
        }
    }

    out
}

fn collect_shortcuts(doc: &vdf::VdfMap, user_id: &str, diag: &mut Diagnostics, out: &mut Vec<GameEntry>) {
    let Some(shortcuts) = doc.get_map("shortcuts") else {
        return;
    };

    for (index, value) in shortcuts.iter() {
        let Some(entry) = value.as_map() else {
            continue;
        };

        let Some(name) = entry.get_str_alias(&NAME_KEYS).filter(|s| !s.is_empty()) else {
            diag.warn(format!(
                "shortcut {} in profile {} has no display name, skipped",
                index, user_id
            ));
            continue;
        };
        let exe = entry.get_str_alias(&EXE_KEYS).unwrap_or("");

        out.push(GameEntry::shortcut(
            derive_app_id(exe, name),
            name.to_string(),
            (!exe.is_empty()).then(|| PathBuf::from(exe)),
            user_id.to_string(),
        ));
    }
}

/// Re-derive a shortcut's artwork ID from current on-disk state.
///
/// A scanned ID goes stale when the user edits the shortcut's executable
/// path, so callers that are about to write files should prefer this over a
/// cached value and fall back to the last scanned ID only on `None`.
/// Matching is exact and case-sensitive on the display name; if two
/// shortcuts share a name, whichever profile iteration reaches first wins.
pub fn resolve_live(userdata_root: &Path, display_name: &str) -> Option<String> {
    for (_, shortcuts_path) in profile_shortcut_files(userdata_root) {
        let Ok(doc) = vdf::load_binary(&shortcuts_path) else {
            continue;
        };
        let Some(shortcuts) = doc.get_map("shortcuts") else {
            continue;
        };

        for (_, value) in shortcuts.iter() {
            if let Some(entry) = value.as_map()
                && let Some(name) = entry.get_str_alias(&NAME_KEYS)
                && name == display_name
            {
                let exe = entry.get_str_alias(&EXE_KEYS).unwrap_or("");
                return Some(derive_app_id(exe, name));
            }
        }
    }

    None
}
