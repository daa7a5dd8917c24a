//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the layout logic and the
//! systems that feed it (files on disk, the task backend, the team directory).
//!
//! Implementations live in the `adapters` module. Plain vectors implement
//! both traits, which covers in-memory callers and tests.

mod member_directory;
mod task_source;

pub use member_directory::MemberDirectory;
pub use task_source::TaskSource;
