//! Utilities
//!
//! Filesystem, configuration storage and formatting helpers.

pub mod config_store;
pub mod format;
pub mod fs;
