//! Summary command - count tasks and edges

use taskflow::output::{OutputMode, SummaryResult};

use super::open_session;
use crate::cli::app::InputArgs;

/// Print task counts per status and edge counts per kind
pub fn summary(input: &InputArgs, mode: OutputMode) -> anyhow::Result<()> {
    let session = open_session(input)?;
    SummaryResult::from_layout(session.layout()).render(mode);
    Ok(())
}
