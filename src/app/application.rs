//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application. Also acts as the embedding
//! application for the language screen: it owns the selection sink.

use std::sync::Arc;

use gpui::{
    actions, px, size, App, AppContext, Application, Bounds, KeyBinding, TitlebarOptions, Window,
    WindowBounds, WindowOptions,
};
use tracing::{error, info};

use crate::app::shell::Shell;
use crate::constants::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::domain::config::AppConfig;
use crate::domain::language::LanguageCatalog;
use crate::eventing::app_event::AppEvent;
use crate::features::language::controller::{SelectableGrid, SelectionSink};
use crate::features::language::page::LanguageScreen;
use crate::i18n::{t, Locale};
use crate::state::press::PressTiming;

actions!(language_picker, [Quit]);

/// Run the language picker application
pub fn run_app(config: AppConfig) {
    Application::new().run(move |cx: &mut App| {
        gpui_component::init(cx);

        // Set up action handlers
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());
        cx.bind_keys([KeyBinding::new("secondary-q", Quit, None)]);

        // Quit the app when all windows are closed (macOS behavior)
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let locale = Locale::resolve(config.locale.as_deref());
        info!(locale = locale.code(), "Resolved screen locale");

        // Sink -> UI channel
        let (event_tx, event_rx) = flume::unbounded::<AppEvent>();
        let grid = SelectableGrid::new(
            Arc::new(LanguageCatalog::default()),
            selection_sink(event_tx),
        );
        let timing = PressTiming {
            press: config.press_duration(),
            release: config.release_duration(),
        };

        // Create main window
        let bounds = Bounds::centered(
            None,
            size(px(config.window_width), px(config.window_height)),
            cx,
        );
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            window_min_size: Some(size(px(MIN_WINDOW_WIDTH), px(MIN_WINDOW_HEIGHT))),
            titlebar: Some(TitlebarOptions {
                title: Some(t(locale, "app-title")),
                ..Default::default()
            }),
            ..Default::default()
        };

        let result = cx.open_window(window_options, move |window, cx| {
            window.on_window_should_close(cx, move |window, _cx| {
                remember_window_size(&config, window);
                true
            });

            let screen = cx.new(|cx| LanguageScreen::new(grid, timing, locale, cx));
            cx.new(|cx| Shell::new(screen, event_rx, cx))
        });

        if let Err(e) = result {
            error!(error = %e, "Failed to open main window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}

/// The embedding application's sink: log, then hand the selection to the UI
fn selection_sink(event_tx: flume::Sender<AppEvent>) -> SelectionSink {
    SelectionSink::new(move |identifier, label| {
        info!(identifier, label, "Language selected");
        let event = AppEvent::LanguageSelected {
            identifier: identifier.to_string(),
            label: label.to_string(),
        };
        if let Err(e) = event_tx.send(event) {
            error!(error = %e, "Failed to forward language selection");
        }
    })
}

/// Persist the window size if it changed
fn remember_window_size(config: &AppConfig, window: &Window) {
    let bounds = window.bounds();
    let updated = AppConfig {
        window_width: f32::from(bounds.size.width),
        window_height: f32::from(bounds.size.height),
        ..config.clone()
    };

    if updated != *config {
        if let Err(e) = updated.save() {
            error!(error = %e, "Failed to save window size");
        }
    }
}
