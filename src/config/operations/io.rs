use crate::config::types::GridscoutConfig;
use crate::paths::PATH_GRIDSCOUT;

use std::error::Error;
use std::fs::File;
use std::io::BufReader;

pub fn load_cfg() -> GridscoutConfig {
    let path = PATH_GRIDSCOUT.join("settings.json");

    if let Ok(file) = File::open(path)
        && let Ok(config) = serde_json::from_reader::<_, GridscoutConfig>(BufReader::new(file))
    {
        return config;
    }

    // Return default settings if file doesn't exist or has error
    GridscoutConfig::default()
}

pub fn save_cfg(config: &GridscoutConfig) -> Result<(), Box<dyn Error>> {
    std::fs::create_dir_all(&*PATH_GRIDSCOUT)?;
    let path = PATH_GRIDSCOUT.join("settings.json");
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, config)?;
    Ok(())
}
