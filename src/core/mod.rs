//! Core domain logic for taskflow
//!
//! This module contains the layout pipeline with no I/O dependencies.
//! External inputs are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Task, TeamMember, Layout, Settings)
//! - `services/` - Grouping, positions, edges, layout, session, export
//! - `ports/` - Trait definitions for task and member sources

pub mod models;
pub mod ports;
pub mod services;
