//! Local artwork cache
//!
//! Byte-level file cache for downloaded reference artwork, keyed by
//! `(lookup id, art kind)`. The fetch itself lives outside this crate; the
//! cache only stores and hands back bytes so the apply step can copy them
//! into a grid directory.

use crate::grid::ArtKind;
use crate::paths::PATH_GRIDSCOUT;

use std::error::Error;
use std::path::{Path, PathBuf};

pub struct ArtCache {
    cache_dir: PathBuf,
}

impl ArtCache {
    /// Cache rooted at an explicit directory (settings override).
    pub fn new(cache_dir: PathBuf) -> Self {
        Self { cache_dir }
    }

    /// Cache at the default location under the gridscout data dir.
    pub fn default_location() -> Self {
        Self::new(PATH_GRIDSCOUT.join("cache"))
    }

    /// Expected path for a cached image, whether or not it exists yet.
    /// Logo sources are png, everything else jpg, mirroring the grid scheme.
    pub fn image_path(&self, lookup_id: &str, kind: ArtKind) -> PathBuf {
        let ext = match kind {
            ArtKind::Logo => "png",
            _ => "jpg",
        };
        self.cache_dir
            .join(format!("{}_{}.{}", lookup_id, kind.label(), ext))
    }

    pub fn has_image(&self, lookup_id: &str, kind: ArtKind) -> bool {
        self.image_path(lookup_id, kind).is_file()
    }

    pub fn save_image(
        &self,
        lookup_id: &str,
        kind: ArtKind,
        data: &[u8],
    ) -> Result<PathBuf, Box<dyn Error>> {
        std::fs::create_dir_all(&self.cache_dir)?;
        let path = self.image_path(lookup_id, kind);
        std::fs::write(&path, data)?;
        Ok(path)
    }

    pub fn load_image(&self, lookup_id: &str, kind: ArtKind) -> Option<Vec<u8>> {
        std::fs::read(self.image_path(lookup_id, kind)).ok()
    }

    pub fn clear(&self) -> Result<(), Box<dyn Error>> {
        if self.cache_dir.exists() {
            std::fs::remove_dir_all(&self.cache_dir)?;
        }
        std::fs::create_dir_all(&self.cache_dir)?;
        Ok(())
    }

    pub fn dir(&self) -> &Path {
        &self.cache_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_load_roundtrip_and_paths() {
        let tmp = tempfile::tempdir().unwrap();
        let cache = ArtCache::new(tmp.path().join("cache"));

        assert!(!cache.has_image("440", ArtKind::Hero));
        let path = cache.save_image("440", ArtKind::Hero, b"jpegbytes").unwrap();
        assert_eq!(path.file_name().unwrap(), "440_hero.jpg");
        assert!(cache.has_image("440", ArtKind::Hero));
        assert_eq!(cache.load_image("440", ArtKind::Hero).unwrap(), b"jpegbytes");

        assert_eq!(
            cache.image_path("440", ArtKind::Logo).file_name().unwrap(),
            "440_logo.png"
        );

        cache.clear().unwrap();
        assert!(!cache.has_image("440", ArtKind::Hero));
        assert!(cache.dir().exists());
    }
}
