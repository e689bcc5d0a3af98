//! Layout Components
//!
//! Header and log panel framing the workspace.

pub mod header;
pub mod log_panel;
