//! Path resolution for the codec's config file and logs.
//!
//! In development mode (cargo run), paths resolve to the current directory.
//! Installed builds use platform locations:
//! - Windows: `%APPDATA%\mizforge\`
//! - macOS: `~/Library/Application Support/mizforge/`
//! - Linux: `~/.config/mizforge/` (config), `~/.local/share/mizforge/` (logs)

use std::path::PathBuf;

const APP_DIR: &str = "mizforge";
const CONFIG_FILE_NAME: &str = "mizforge.json";

/// Returns true when running in development mode (cargo run or debug build).
pub fn is_dev_mode() -> bool {
    std::env::var("CARGO").is_ok() || cfg!(debug_assertions)
}

/// Platform-appropriate config directory.
pub fn config_dir() -> Option<PathBuf> {
    if is_dev_mode() {
        return Some(PathBuf::from("."));
    }

    #[cfg(target_os = "linux")]
    {
        dirs::config_dir().map(|p| p.join(APP_DIR))
    }

    #[cfg(not(target_os = "linux"))]
    {
        data_dir()
    }
}

/// Platform-appropriate data directory.
pub fn data_dir() -> Option<PathBuf> {
    if is_dev_mode() {
        return Some(PathBuf::from("."));
    }

    dirs::data_dir().map(|p| p.join(APP_DIR))
}

/// Path to the config file.
///
/// - Dev mode: `./mizforge.json`
/// - Installed: `{config_dir}/mizforge.json`
pub fn config_file() -> PathBuf {
    config_dir()
        .map(|p| p.join(CONFIG_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
}

/// Path to the logs directory.
pub fn logs_dir() -> PathBuf {
    data_dir()
        .map(|p| p.join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}
