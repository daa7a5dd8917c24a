//! Member directory port
//!
//! Defines where team member records come from.

use crate::core::models::TeamMember;
use crate::error::Result;

/// Supplier of the team directory
pub trait MemberDirectory: Send + Sync {
    /// Load every known team member
    fn load_members(&self) -> Result<Vec<TeamMember>>;
}

impl MemberDirectory for Vec<TeamMember> {
    fn load_members(&self) -> Result<Vec<TeamMember>> {
        Ok(self.clone())
    }
}
