//! Configuration loading
//!
//! Settings are layered: built-in defaults, then the global file
//! (`~/.config/taskflow/config.toml`), then `.taskflow.toml` in the current
//! directory. Later layers override individual keys of earlier ones. An
//! explicit `--config` file replaces both discovered files.

use std::fs;
use std::path::Path;

use log::{debug, warn};
use toml::{Table, Value};

use crate::core::models::Settings;
use crate::error::{FlowError, Result};
use crate::paths;

/// Template written by `taskflow init`; every key shows its default
pub const DEFAULT_CONFIG_TEMPLATE: &str = r##"# taskflow layout settings
# Every key is optional; removed keys fall back to the values shown.

[layout]
# Vertical distance between consecutive tasks of a column
row_spacing = 200.0
# Horizontal shift applied to every odd row
stagger = 50.0
# Collaboration edges leaving one task (0 disables them)
collaboration_cap = 1

[layout.columns]
todo = { x = 50.0, y = 50.0 }
in_progress = { x = 350.0, y = 50.0 }
review = { x = 650.0, y = 50.0 }
done = { x = 950.0, y = 50.0 }

[palette]
todo = "#64748b"
in_progress = "#3b82f6"
review = "#f59e0b"
done = "#10b981"
collaboration = "#8b5cf6"
"##;

fn read_table(path: &Path) -> Result<Table> {
    let content = fs::read_to_string(path).map_err(|source| FlowError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let table: Table = toml::from_str(&content).map_err(|source| FlowError::Config {
        path: path.to_path_buf(),
        source,
    })?;
    // Reject files whose values do not fit the schema, not just bad syntax
    settings_from_table(table.clone(), path)?;
    Ok(table)
}

fn settings_from_table(table: Table, path: &Path) -> Result<Settings> {
    Value::Table(table).try_into().map_err(|source| FlowError::Config {
        path: path.to_path_buf(),
        source,
    })
}

/// Overlay `overlay` onto `base`, merging nested tables key by key
pub fn merge_tables(base: &mut Table, overlay: Table) {
    for (key, value) in overlay {
        if let Value::Table(incoming) = value {
            if let Some(Value::Table(existing)) = base.get_mut(&key) {
                merge_tables(existing, incoming);
                continue;
            }
            base.insert(key, Value::Table(incoming));
        } else {
            base.insert(key, value);
        }
    }
}

/// Load a single settings file; missing keys take their defaults
pub fn load_file(path: &Path) -> Result<Settings> {
    let table = read_table(path)?;
    settings_from_table(table, path)
}

/// Load layered settings
///
/// With `explicit`, only that file is read and any problem is an error.
/// Otherwise the global and project files are read when present; a broken
/// discovered file is skipped with a warning.
pub fn load(explicit: Option<&Path>) -> Result<Settings> {
    if let Some(path) = explicit {
        debug!("Loading config from {}", path.display());
        return load_file(path);
    }

    let mut merged = Table::new();
    for path in [paths::global_config(), paths::project_config()] {
        if !path.exists() {
            continue;
        }
        match read_table(&path) {
            Ok(table) => {
                debug!("Loading config from {}", path.display());
                merge_tables(&mut merged, table);
            },
            Err(e) => warn!("Ignoring config: {e}"),
        }
    }

    settings_from_table(merged, &paths::project_config())
}
