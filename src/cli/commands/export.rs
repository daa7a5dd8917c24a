//! Export command - write the flow export file

use std::path::Path;

use taskflow::adapters::json::write_export;
use taskflow::output::{ExportResult, OutputMode};

use super::open_session;
use crate::cli::app::InputArgs;

/// Write `<workflow>-task-flow.json` into `out`
pub fn export(input: &InputArgs, workflow: &str, out: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let session = open_session(input)?;
    let doc = session.export(workflow, chrono::Utc::now());
    let path = write_export(&doc, out)?;

    let result = ExportResult {
        path: path.display().to_string(),
        workflow: doc.workflow,
        nodes: doc.nodes.len(),
        edges: doc.edges.len(),
    };
    result.render(mode);
    Ok(())
}
