//! Initialize taskflow settings in the current directory

use std::fs;

use taskflow::config::DEFAULT_CONFIG_TEMPLATE;
use taskflow::output::{OperationResult, OutputMode};
use taskflow::paths::{PROJECT_CONFIG, project_config};

/// Write a default `.taskflow.toml`
pub fn init(force: bool, mode: OutputMode) -> anyhow::Result<()> {
    let path = project_config();

    if path.exists() && !force {
        OperationResult {
            success: false,
            message: format!("Already initialized ({PROJECT_CONFIG} exists). Use --force to overwrite."),
        }
        .render(mode);
        return Ok(());
    }

    fs::write(&path, DEFAULT_CONFIG_TEMPLATE)?;

    OperationResult {
        success: true,
        message: format!("Created {PROJECT_CONFIG}"),
    }
    .render(mode);
    Ok(())
}
