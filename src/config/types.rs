use serde::{Deserialize, Serialize};

/// Persisted settings. Every field defaults so old settings files keep
/// loading after new fields appear.
#[derive(Clone, Serialize, Deserialize, Default)]
pub struct GridscoutConfig {
    /// Steam install directory override; empty = auto-detect.
    #[serde(default)]
    pub steam_path: String,
    /// Userdata directory override; empty = `<steam_path>/userdata`.
    #[serde(default)]
    pub userdata_path: String,
    /// Artwork cache directory override; empty = default data dir.
    #[serde(default)]
    pub cache_dir: String,
}
