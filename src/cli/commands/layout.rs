//! Layout command - print nodes and edges

use taskflow::output::{LayoutResult, OutputMode};

use super::open_session;
use crate::cli::app::InputArgs;

/// Compute the layout of the given task files and print it
pub fn layout(input: &InputArgs, mode: OutputMode) -> anyhow::Result<()> {
    let session = open_session(input)?;

    let result = LayoutResult {
        layout: session.layout().clone(),
    };
    result.render(mode);
    Ok(())
}
