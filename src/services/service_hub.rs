//! ServiceHub - Unified Service Management
//!
//! Owns the catalog client and local storage, and runs catalog requests on
//! the tokio runtime. Results flow back to the UI as [`AppEvent`]s.

use std::path::PathBuf;
use std::sync::Arc;

use gpui::Global;

use crate::domain::config::AppConfig;
use crate::domain::pagination::PageRequest;
use crate::error::Result;
use crate::eventing::app_event::AppEvent;
use crate::i18n::Locale;
use crate::services::catalog_client::CatalogClient;
use crate::services::local_storage::LocalStorage;
use crate::services::runtime::{spawn_in_tokio, spawn_named_in_tokio};
use crate::utils::config_store::update_config_at;

/// Commands that can be sent to services
#[derive(Debug, Clone)]
pub enum ServiceCommand {
    /// Fetch one catalog page, tagged with the caller's sequence number
    FetchPage { seq: u64, request: PageRequest },
    /// Store the serialized selection map; `None` removes it
    PersistSelection { blob: Option<String> },
    /// Write the panel visibility and locale back to the config file
    SaveUiPrefs { panel_open: bool, locale: Locale },
}

/// ServiceHub manages all background services
pub struct ServiceHub {
    /// Channel to send events to UI
    event_tx: flume::Sender<AppEvent>,
    /// Channel to send commands to services
    command_tx: flume::Sender<ServiceCommand>,
    /// Catalog API client
    client: Arc<CatalogClient>,
    /// Key-value store holding the selection blob
    storage: Arc<LocalStorage>,
    /// Key of the selection blob
    selection_key: Arc<str>,
    /// Config file receiving UI preferences; `None` leaves them unsaved
    config_path: Option<Arc<PathBuf>>,
}

impl Global for ServiceHub {}

impl ServiceHub {
    /// Create a new service hub
    ///
    /// UI preferences are written to `config_path` when one is given.
    pub fn new(
        config: &AppConfig,
        storage: LocalStorage,
        config_path: Option<PathBuf>,
        event_tx: flume::Sender<AppEvent>,
    ) -> Result<Self> {
        let (command_tx, command_rx) = flume::unbounded::<ServiceCommand>();

        let hub = Self {
            event_tx,
            command_tx,
            client: Arc::new(CatalogClient::new(&config.api)?),
            storage: Arc::new(storage),
            selection_key: Arc::from(config.storage.selection_key.as_str()),
            config_path: config_path.map(Arc::new),
        };

        hub.start_command_handler(command_rx);
        tracing::info!(base_url = %config.api.base_url, "Service hub started");

        Ok(hub)
    }

    /// Start the command handler task
    fn start_command_handler(&self, command_rx: flume::Receiver<ServiceCommand>) {
        let client = self.client.clone();
        let storage = self.storage.clone();
        let selection_key = self.selection_key.clone();
        let config_path = self.config_path.clone();
        let event_tx = self.event_tx.clone();

        spawn_named_in_tokio("service-commands", async move {
            while let Ok(cmd) = command_rx.recv_async().await {
                match cmd {
                    ServiceCommand::FetchPage { seq, request } => {
                        // Each fetch runs on its own task so a slow response
                        // never delays a newer request.
                        let client = client.clone();
                        let event_tx = event_tx.clone();
                        spawn_in_tokio(async move {
                            let event = match client.fetch_page(&request).await {
                                Ok(page) => AppEvent::PageLoaded { seq, request, page },
                                Err(e) => {
                                    tracing::error!(page = request.page, error = %e, "Catalog fetch failed");
                                    AppEvent::PageFailed {
                                        seq,
                                        request,
                                        message: e.to_string(),
                                    }
                                }
                            };
                            let _ = event_tx.send(event);
                        });
                    }
                    ServiceCommand::PersistSelection { blob } => {
                        let result = match blob {
                            Some(blob) => storage.set_item(&selection_key, blob),
                            None => storage.remove_item(&selection_key),
                        };
                        if let Err(e) = result {
                            tracing::error!(error = %e, "Failed to persist selection");
                        }
                    }
                    ServiceCommand::SaveUiPrefs { panel_open, locale } => {
                        let Some(path) = config_path.as_deref() else {
                            tracing::debug!("No config file, UI preferences not saved");
                            continue;
                        };
                        let result = update_config_at(path, |config| {
                            config.ui.panel_open = panel_open;
                            config.ui.locale = locale.tag().to_string();
                        });
                        match result {
                            Ok(_) => tracing::debug!(panel_open, locale = locale.tag(), "UI preferences saved"),
                            Err(e) => tracing::error!(error = %e, "Failed to save UI preferences"),
                        }
                    }
                }
            }
            tracing::debug!("Service command channel closed");
        });
    }

    /// Send a command to the services
    pub fn send(&self, cmd: ServiceCommand) {
        if self.command_tx.send(cmd).is_err() {
            tracing::warn!("Service command handler is not running");
        }
    }

    /// Request a catalog page
    pub fn fetch_page(&self, seq: u64, request: PageRequest) {
        self.send(ServiceCommand::FetchPage { seq, request });
    }

    /// Persist the serialized selection map
    pub fn persist_selection(&self, blob: Option<String>) {
        self.send(ServiceCommand::PersistSelection { blob });
    }

    /// Remember the panel visibility and locale for the next launch
    pub fn save_ui_prefs(&self, panel_open: bool, locale: Locale) {
        self.send(ServiceCommand::SaveUiPrefs { panel_open, locale });
    }

    /// Selection blob stored by a previous session
    pub fn stored_selection(&self) -> Option<String> {
        self.storage.get_item(&self.selection_key)
    }

    /// Shared catalog client
    pub fn client(&self) -> Arc<CatalogClient> {
        self.client.clone()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::services::local_storage::STORAGE_FILE;
    use crate::utils::config_store::{CONFIG_FILE, load_config_from};

    fn hub_in(dir: &std::path::Path) -> (ServiceHub, flume::Receiver<AppEvent>) {
        let (tx, rx) = flume::unbounded();
        let storage = LocalStorage::open(dir.join(STORAGE_FILE));
        let hub = ServiceHub::new(&AppConfig::default(), storage, Some(dir.join(CONFIG_FILE)), tx)
            .expect("hub");
        (hub, rx)
    }

    #[test]
    fn persists_and_removes_selection_blob() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (hub, _rx) = hub_in(dir.path());

        hub.persist_selection(Some("{\"1\":{}}".to_string()));
        let deadline = std::time::Instant::now() + Duration::from_secs(2);
        while hub.stored_selection().is_none() && std::time::Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(10));
        }
        assert_eq!(hub.stored_selection().as_deref(), Some("{\"1\":{}}"));

        hub.persist_selection(None);
        let deadline = std::time::Instant::now() + Duration::from_secs(2);
        while hub.stored_selection().is_some() && std::time::Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(10));
        }
        assert_eq!(hub.stored_selection(), None);
    }

    #[test]
    fn reports_failed_fetch_with_sequence() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (tx, rx) = flume::unbounded();
        let mut config = AppConfig::default();
        // Nothing listens on port 9 of the loopback interface.
        config.api.base_url = "http://127.0.0.1:9/api/v1".to_string();
        config.api.timeout_secs = 2;
        let storage = LocalStorage::open(dir.path().join(STORAGE_FILE));
        let hub = ServiceHub::new(&config, storage, None, tx).expect("hub");

        hub.fetch_page(7, PageRequest::new(2, 12));

        let failed = std::iter::from_fn(|| rx.recv_timeout(Duration::from_secs(5)).ok())
            .find(|event| matches!(event, AppEvent::PageFailed { .. }));
        match failed {
            Some(AppEvent::PageFailed { seq, request, .. }) => {
                assert_eq!(seq, 7);
                assert_eq!(request.page, 2);
            }
            other => panic!("expected PageFailed, got {other:?}"),
        }
    }

    #[test]
    fn saves_ui_prefs_to_config_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (hub, _rx) = hub_in(dir.path());
        let path = dir.path().join(CONFIG_FILE);

        hub.save_ui_prefs(false, Locale::ZhCN);
        let saved = || {
            path.exists()
                && load_config_from(&path).is_ok_and(|config| config.ui.locale == "zh-CN")
        };
        let deadline = std::time::Instant::now() + Duration::from_secs(2);
        while !saved() && std::time::Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(10));
        }

        let config = load_config_from(&path).expect("load");
        assert!(!config.ui.panel_open);
        assert_eq!(config.ui.locale, "zh-CN");
    }
}
