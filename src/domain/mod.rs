//! Domain - Pure Data Structures
//!
//! These types don't depend on GPUI and represent the catalog domain.

pub mod artwork;
pub mod config;
pub mod pagination;
pub mod selection;
