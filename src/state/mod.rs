//! State - GPUI Entity State Modules
//!
//! Each state module represents a distinct piece of application state,
//! split by update frequency to avoid unnecessary re-renders.

pub mod catalog_state;
pub mod i18n_state;
pub mod log_state;
pub mod selection_state;
