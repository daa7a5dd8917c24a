//! Command implementations

mod export;
mod init;
mod layout;
mod summary;

pub use export::export;
pub use init::init;
pub use layout::layout;
pub use summary::summary;

use taskflow::adapters::json::{JsonMemberFile, JsonTaskFiles};
use taskflow::config;
use taskflow::core::services::FlowSession;

use super::app::InputArgs;

/// Read settings, tasks and members named by the command line
fn open_session(input: &InputArgs) -> anyhow::Result<FlowSession> {
    let settings = config::load(input.config.as_deref())?;
    let source = JsonTaskFiles::new(input.inputs.clone());
    let directory = JsonMemberFile::new(input.members.clone());
    Ok(FlowSession::load(&source, &directory, settings)?)
}
