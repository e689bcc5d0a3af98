//! Workspace - Main Shell with Layout and Event Pump
//!
//! The workspace holds the header, the catalog page, and the log panel.
//! It also runs the event pump that bridges service events to UI updates.

use gpui::{
    App, AppContext, Context, Entity, IntoElement, ParentElement, Render, Styled, Window, div,
};

use crate::app::entities::AppEntities;
use crate::components::layout::header::Header;
use crate::components::layout::log_panel::LogPanel;
use crate::eventing::app_event::AppEvent;
use crate::features::catalog::controller::CatalogController;
use crate::features::catalog::page::CatalogPage;
use crate::theme::colors::Palette;

/// Main workspace containing the application layout
pub struct Workspace {
    header: Entity<Header>,
    catalog_page: Entity<CatalogPage>,
    log_panel: Entity<LogPanel>,
}

impl Workspace {
    pub fn new(
        entities: AppEntities,
        event_rx: flume::Receiver<AppEvent>,
        cx: &mut Context<Self>,
    ) -> Self {
        let header = cx.new(|cx| Header::new(entities.clone(), cx));
        let catalog_page = cx.new(|cx| CatalogPage::new(entities.clone(), cx));
        let log_panel = cx.new(|cx| LogPanel::new(entities.clone(), cx));

        Self::start_event_pump(event_rx, entities, cx);

        Self {
            header,
            catalog_page,
            log_panel,
        }
    }

    /// Start the event pump that dispatches service events to UI
    fn start_event_pump(
        event_rx: flume::Receiver<AppEvent>,
        entities: AppEntities,
        cx: &mut Context<Self>,
    ) {
        cx.spawn(async move |_this, cx| {
            while let Ok(event) = event_rx.recv_async().await {
                let entities = entities.clone();
                let _ = cx.update(|cx: &mut App| {
                    dispatch_event(event, &entities, cx);
                });
            }
        })
        .detach();
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(Palette::background())
            .child(self.header.clone())
            .child(
                div()
                    .flex_1()
                    .overflow_hidden()
                    .child(self.catalog_page.clone()),
            )
            .child(self.log_panel.clone())
    }
}

/// Dispatch an AppEvent to the appropriate entity
fn dispatch_event(event: AppEvent, entities: &AppEntities, cx: &mut App) {
    match event {
        AppEvent::Log {
            level,
            message,
            timestamp,
        } => {
            entities.logs.update(cx, |logs, cx| {
                logs.push(level, message, timestamp);
                cx.notify();
            });
        }
        AppEvent::PageLoaded { seq, page, .. } => {
            CatalogController::new(entities.clone()).on_page_loaded(seq, page, cx);
        }
        AppEvent::PageFailed {
            seq,
            request,
            message,
        } => {
            tracing::debug!(seq, page = request.page, "Page request failed");
            CatalogController::new(entities.clone()).on_page_failed(seq, message, cx);
        }
    }
}
