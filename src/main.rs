//! Artic Viewer - Main Entry Point

use artic_viewer::app::application::run_app;
use artic_viewer::eventing::app_event::AppEvent;
use artic_viewer::logging::init_logging;
use artic_viewer::services::local_storage::{LocalStorage, STORAGE_FILE};
use artic_viewer::services::service_hub::ServiceHub;
use artic_viewer::utils::config_store::{config_path, load_config};

fn main() {
    // Service -> UI channel; the log panel layer feeds it too
    let (event_tx, event_rx) = flume::unbounded::<AppEvent>();
    let _log_guard = init_logging(event_tx.clone());

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting Artic Viewer");

    let config = load_config();

    let storage = match LocalStorage::open_default() {
        Ok(storage) => storage,
        Err(e) => {
            let fallback = std::env::temp_dir().join(STORAGE_FILE);
            tracing::warn!(error = %e, path = %fallback.display(), "Data directory unavailable, using temporary storage");
            LocalStorage::open(fallback)
        }
    };
    tracing::debug!(path = %storage.path().display(), "Local storage ready");

    let prefs_path = config_path()
        .inspect_err(|e| tracing::warn!(error = %e, "UI preferences will not be saved"))
        .ok();

    let service_hub = match ServiceHub::new(&config, storage, prefs_path, event_tx) {
        Ok(hub) => hub,
        Err(e) => {
            tracing::error!(error = %e, "Failed to start services");
            std::process::exit(1);
        }
    };

    run_app(config, service_hub, event_rx);
}
