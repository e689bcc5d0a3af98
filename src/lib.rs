//! Artic Viewer Library
//!
//! A native table viewer for the Art Institute of Chicago artwork catalog:
//! server-side pagination, a selection that spans pages, and local
//! persistence of that selection.

pub mod app;
pub mod components;
pub mod domain;
pub mod error;
pub mod eventing;
pub mod features;
pub mod i18n;
pub mod logging;
pub mod services;
pub mod state;
pub mod theme;
pub mod utils;
