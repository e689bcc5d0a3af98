//! Catalog Feature
//!
//! Paginated artwork table with a selection that survives page changes
//! and restarts.

pub mod controller;
pub mod page;
pub mod selection_panel;
