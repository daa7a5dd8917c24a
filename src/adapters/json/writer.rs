//! Export file writer

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::core::services::ExportDocument;
use crate::error::{FlowError, Result};

/// Write an export document into `dir`
///
/// The file is named after the workflow (see
/// [`crate::core::services::export_filename`]). Returns the written path.
pub fn write_export(doc: &ExportDocument, dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir).map_err(|source| FlowError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(doc.filename());
    let content = serde_json::to_string_pretty(doc).map_err(|source| FlowError::Json {
        path: path.clone(),
        source,
    })?;
    fs::write(&path, content).map_err(|source| FlowError::Io {
        path: path.clone(),
        source,
    })?;

    debug!("Wrote export to {}", path.display());
    Ok(path)
}
