mod settings;

pub use settings::{Config, DisplaySettings, OrderSettings};

use crate::error::{ProcureError, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the data directory path (XDG data dir, or ~/.procure/)
pub fn data_dir() -> Result<PathBuf> {
    if let Some(proj_dirs) = ProjectDirs::from("", "", "procure") {
        return Ok(proj_dirs.data_dir().to_path_buf());
    }

    // Fallback to ~/.procure/
    let home = dirs_home().ok_or_else(|| {
        ProcureError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not determine home directory",
        ))
    })?;

    Ok(home.join(".procure"))
}

fn dirs_home() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}

/// Load config.toml from the data directory (defaults if missing)
pub fn load_config(data_dir: &Path) -> Result<Config> {
    let path = data_dir.join("config.toml");
    if !path.exists() {
        return Ok(Config::default());
    }
    let content = fs::read_to_string(&path)?;
    toml::from_str(&content).map_err(|e| ProcureError::ConfigParse { path, source: e })
}

/// Template content for config.toml
pub const CONFIG_TEMPLATE: &str = r#"[display]
currency_symbol = "FCFA"   # shown after amounts, e.g. 750,000 FCFA

[orders]
reference_prefix = "APP"   # generated references look like APP-2026-006
"#;
