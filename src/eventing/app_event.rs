//! AppEvent - Application Event Enum
//!
//! All events that can be sent from services to the UI layer.

use chrono::{DateTime, Local};

use crate::domain::artwork::ArtworkPage;
use crate::domain::pagination::PageRequest;
use crate::state::log_state::LogLevel;

/// Application events for service -> UI communication
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Log message
    Log {
        level: LogLevel,
        message: String,
        timestamp: DateTime<Local>,
    },

    /// A catalog page arrived
    PageLoaded {
        seq: u64,
        request: PageRequest,
        page: ArtworkPage,
    },

    /// A catalog page request failed
    PageFailed {
        seq: u64,
        request: PageRequest,
        message: String,
    },
}

impl AppEvent {
    /// Create a log event with current timestamp
    pub fn log(level: LogLevel, message: impl Into<String>) -> Self {
        Self::Log {
            level,
            message: message.into(),
            timestamp: Local::now(),
        }
    }
}
