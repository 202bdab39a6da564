// Grid directory resolution and the artwork apply (copy) step

use crate::grid::types::{ALL_ART_KINDS, ArtKind};
use crate::scanner::GameEntry;

use std::error::Error;
use std::path::{Path, PathBuf};

/// All `config/grid` directories under a userdata root, one per digit-named
/// profile directory. Order is filesystem iteration order — callers may use
/// it to pick a representative first profile, nothing more.
pub fn grid_dirs(userdata_root: &Path) -> Vec<PathBuf> {
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
            out.push(entry.path().join("config/grid"));
        }
    }

    out
}

/// Grid directory artwork for this entry should be written to.
///
/// Shortcuts go to their owning profile; installed games are machine-global,
/// so the first available profile stands in for them.
pub fn target_grid_dir(userdata_root: &Path, entry: &GameEntry) -> Option<PathBuf> {
    if let Some(user_id) = &entry.user_id {
        return Some(userdata_root.join(user_id).join("config/grid"));
    }
    grid_dirs(userdata_root).into_iter().next()
}

/// Copy a local image file into a grid directory under the canonical
/// filename for `(app_id, kind)`, creating the directory if needed.
///
/// `app_id` must be the entry's artwork ID (`GameEntry::app_id`, re-derived
/// live for shortcuts when available) — never the matched catalog ID.
pub fn apply_art(
    source: &Path,
    grid_dir: &Path,
    app_id: &str,
    kind: ArtKind,
) -> Result<PathBuf, Box<dyn Error>> {
    if !source.is_file() {
        return Err(format!("source image {} does not exist", source.display()).into());
    }

    std::fs::create_dir_all(grid_dir)?;
    let target = grid_dir.join(kind.filename(app_id));
    std::fs::copy(source, &target)?;
    Ok(target)
}

/// Which of the four artwork slots already have a file on disk for this ID.
pub fn installed_art(grid_dir: &Path, app_id: &str) -> Vec<(ArtKind, PathBuf)> {
    ALL_ART_KINDS
        .iter()
        .map(|kind| (*kind, grid_dir.join(kind.filename(app_id))))
        .filter(|(_, path)| path.is_file())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::GameEntry;
    use std::fs;

    #[test]
    fn test_grid_dirs_only_digit_profiles() {
        let tmp = tempfile::tempdir().unwrap();
        let userdata = tmp.path();
        fs::create_dir_all(userdata.join("1")).unwrap();
        fs::create_dir_all(userdata.join("2")).unwrap();
        fs::create_dir_all(userdata.join("backup")).unwrap();
        fs::write(userdata.join("3"), b"a file, not a profile").unwrap();

        let mut dirs = grid_dirs(userdata);
        dirs.sort();

        assert_eq!(
            dirs,
            vec![
                userdata.join("1/config/grid"),
                userdata.join("2/config/grid"),
            ]
        );
    }

    #[test]
    fn test_grid_dirs_missing_root_is_empty() {
        assert!(grid_dirs(Path::new("/nonexistent/userdata")).is_empty());
    }

    #[test]
    fn test_target_grid_dir_prefers_owning_profile() {
        let tmp = tempfile::tempdir().unwrap();
        let userdata = tmp.path();
        fs::create_dir_all(userdata.join("100")).unwrap();

        let shortcut = GameEntry::shortcut(
            "3000000000".into(),
            "Game".into(),
            None,
            "55667788".into(),
        );
        assert_eq!(
            target_grid_dir(userdata, &shortcut),
            Some(userdata.join("55667788/config/grid"))
        );

        let installed = GameEntry::installed("440".into(), "TF2".into(), None);
        assert_eq!(
            target_grid_dir(userdata, &installed),
            Some(userdata.join("100/config/grid"))
        );
    }

    #[test]
    fn test_apply_art_copies_under_canonical_name() {
        let tmp = tempfile::tempdir().unwrap();
        let source = tmp.path().join("downloaded.jpg");
        fs::write(&source, b"jpegbytes").unwrap();
        let grid_dir = tmp.path().join("77/config/grid");

        let target = apply_art(&source, &grid_dir, "440", ArtKind::Portrait).unwrap();

        assert_eq!(target, grid_dir.join("440p.jpg"));
        assert_eq!(fs::read(&target).unwrap(), b"jpegbytes");

        let found = installed_art(&grid_dir, "440");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].0, ArtKind::Portrait);
    }

    #[test]
    fn test_apply_art_missing_source_errors() {
        let tmp = tempfile::tempdir().unwrap();
        let result = apply_art(
            &tmp.path().join("missing.jpg"),
            &tmp.path().join("grid"),
            "440",
            ArtKind::Hero,
        );
        assert!(result.is_err());
    }
}
