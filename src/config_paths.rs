//! Centralized configuration paths for token-sheet
//!
//! All config files live under:
//! - Unix/macOS: `~/.config/token-sheet/`
//! - Windows: `%APPDATA%\token-sheet\`

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "token-sheet";

/// Base config directory for token-sheet
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/token-sheet`
///   - Else: `~/.config/token-sheet`
///
/// Windows:
///   - `%APPDATA%\token-sheet`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/token-sheet/sheet.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("sheet.yaml"))
}

/// `~/.config/token-sheet/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

fn ensure_dir(path: &Path) -> Result<(), String> {
    fs::create_dir_all(path)
        .map_err(|e| format!("Failed to create directory {}: {}", path.display(), e))
}

/// Ensure logs dir exists, returning it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = logs_dir().ok_or_else(|| "No config directory available".to_string())?;
    ensure_dir(&logs)?;
    Ok(logs)
}
