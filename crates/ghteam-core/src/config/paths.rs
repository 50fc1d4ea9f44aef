//! Config path resolution helpers.

use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "ghteam.toml";

pub fn config_path_in(global_dir: &Path) -> PathBuf {
    global_dir.join(CONFIG_FILE_NAME)
}

/// `~/.config/ghteam/ghteam.toml` on Linux, the platform equivalent elsewhere.
pub fn default_config_path() -> anyhow::Result<PathBuf> {
    let global_dir = dirs::config_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
        .join("ghteam");
    Ok(config_path_in(&global_dir))
}
