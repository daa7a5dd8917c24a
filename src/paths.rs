//! Centralized path definitions for taskflow
//!
//! Single source of truth for the filesystem locations taskflow reads.
//!
//! ## Layout
//!
//! ```text
//! project/
//! └── .taskflow.toml            # Project layout settings
//!
//! ~/.config/taskflow/
//! └── config.toml               # User-level layout settings
//! ```
//!
//! Setting `TASKFLOW_CONFIG_DIR` replaces `~/.config/taskflow/`.

use std::path::PathBuf;

/// Project configuration filename
pub const PROJECT_CONFIG: &str = ".taskflow.toml";

/// Environment variable overriding the global config directory
pub const CONFIG_DIR_ENV: &str = "TASKFLOW_CONFIG_DIR";

/// Global config directory name under the platform config dir
const GLOBAL_DIR: &str = "taskflow";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get path to `.taskflow.toml` in the current directory.
#[must_use]
pub fn project_config() -> PathBuf {
    PathBuf::from(PROJECT_CONFIG)
}

/// Get the global taskflow directory.
///
/// Returns `$TASKFLOW_CONFIG_DIR` when set, otherwise
/// `~/.config/taskflow/` (or the platform equivalent).
#[must_use]
pub fn global_config_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return PathBuf::from(dir);
    }
    dirs::config_dir().unwrap_or_else(|| PathBuf::from("~/.config")).join(GLOBAL_DIR)
}

/// Get the global config file path.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}
