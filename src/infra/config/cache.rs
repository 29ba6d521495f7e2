use std::fs;
use std::path::PathBuf;

use color_eyre::eyre::{Result, eyre};

pub const APP_DIR_NAME: &str = "gacha";

pub fn get_cache_dir() -> Result<PathBuf> {
    let cache_base = dirs::cache_dir().ok_or_else(|| eyre!("Could not find cache directory"))?;
    let cache_dir = cache_base.join(APP_DIR_NAME);

    if !cache_dir.exists() {
        fs::create_dir_all(&cache_dir)?;
    }

    Ok(cache_dir)
}
