//! Logging - tracing subscriber setup
//!
//! Events go to stderr, to a daily rolling file in the data directory, and
//! (for this crate at INFO and above, other crates at WARN and above) to the
//! in-app log panel through [`PanelLayer`].

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::eventing::app_event::AppEvent;
use crate::state::log_state::LogLevel;
use crate::utils::fs::get_or_create_data_dir;

const CRATE_TARGET: &str = env!("CARGO_CRATE_NAME");

/// Collects the `message` field and any extra fields of an event
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: Vec<(&'static str, String)>,
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            self.fields.push((field.name(), format!("{value:?}")));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields.push((field.name(), value.to_string()));
        }
    }
}

impl MessageVisitor {
    fn into_line(self) -> String {
        if self.fields.is_empty() {
            return self.message;
        }
        let fields = self
            .fields
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join(" ");
        format!("{} {}", self.message, fields)
    }
}

/// A [`tracing_subscriber::Layer`] that mirrors events into the log panel
pub struct PanelLayer {
    event_tx: flume::Sender<AppEvent>,
}

impl PanelLayer {
    pub fn new(event_tx: flume::Sender<AppEvent>) -> Self {
        Self { event_tx }
    }

    fn accepts(target: &str, level: &Level) -> bool {
        if target.starts_with(CRATE_TARGET) {
            *level <= Level::INFO
        } else {
            *level <= Level::WARN
        }
    }
}

impl<S: Subscriber> Layer<S> for PanelLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !Self::accepts(metadata.target(), metadata.level()) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let level = LogLevel::from_tracing(metadata.level());
        let _ = self.event_tx.send(AppEvent::log(level, visitor.into_line()));
    }
}

/// Install the global subscriber
///
/// The returned guard flushes the log file on drop and must live until exit.
/// File logging is skipped when the data directory is unavailable.
pub fn init_logging(event_tx: flume::Sender<AppEvent>) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let (file_layer, guard) = match get_or_create_data_dir() {
        Ok(dir) => {
            let appender = tracing_appender::rolling::daily(dir.join("logs"), "artic-viewer.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        Err(_) => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .with(file_layer)
        .with(PanelLayer::new(event_tx))
        .init();

    guard
}
