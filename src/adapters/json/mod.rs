//! JSON file adapters
//!
//! - [`reader`] - Read task and member files, expand glob inputs
//! - [`writer`] - Write export documents
//! - [`source`] - `TaskSource` / `MemberDirectory` implementations

pub mod reader;
pub mod source;
pub mod writer;

pub use reader::{expand_inputs, is_glob, read_members, read_tasks};
pub use source::{JsonMemberFile, JsonTaskFiles};
pub use writer::write_export;
