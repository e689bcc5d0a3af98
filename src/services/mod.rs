//! Service Layer
//!
//! The service layer talks to the outside world (the catalog HTTP API and
//! the local storage file) and runs async work on the tokio runtime.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                     ServiceHub                       │
//! │  ┌───────────────┐  ┌──────────────┐  ┌───────────┐  │
//! │  │ CatalogClient │  │ LocalStorage │  │  runtime  │  │
//! │  │  (HTTP API)   │  │ (JSON blob)  │  │  (tokio)  │  │
//! │  └───────────────┘  └──────────────┘  └───────────┘  │
//! └──────────────────────────────────────────────────────┘
//!                            │
//!                            ▼ AppEvent
//! ┌──────────────────────────────────────────────────────┐
//! │                     State Layer                      │
//! │             (CatalogState, SelectionState)           │
//! └──────────────────────────────────────────────────────┘
//! ```

pub mod catalog_client;
pub mod local_storage;
pub mod runtime;
pub mod service_hub;
