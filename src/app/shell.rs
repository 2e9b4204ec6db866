//! Shell - Window Root with Event Pump
//!
//! Hosts the language screen and applies events coming back from the
//! embedding application's selection sink.

use gpui::{div, prelude::*, Context, Entity, IntoElement, ParentElement, Render, Styled, Window};
use tracing::{debug, info};

use crate::eventing::app_event::AppEvent;
use crate::features::language::page::LanguageScreen;
use crate::i18n::Locale;
use crate::theme::colors::PickerColors;

/// Root view of the main window
pub struct Shell {
    screen: Entity<LanguageScreen>,
}

impl Shell {
    pub fn new(
        screen: Entity<LanguageScreen>,
        event_rx: flume::Receiver<AppEvent>,
        cx: &mut Context<Self>,
    ) -> Self {
        Self::start_event_pump(event_rx, cx);
        Self { screen }
    }

    /// Start the event pump that dispatches sink events to the UI
    fn start_event_pump(event_rx: flume::Receiver<AppEvent>, cx: &mut Context<Self>) {
        cx.spawn(async move |this, cx| {
            while let Ok(event) = event_rx.recv_async().await {
                if this
                    .update(cx, |shell, cx| shell.dispatch_event(event, cx))
                    .is_err()
                {
                    debug!("Shell released, stopping event pump");
                    break;
                }
            }
        })
        .detach();
    }

    fn dispatch_event(&mut self, event: AppEvent, cx: &mut Context<Self>) {
        match event {
            AppEvent::LanguageSelected { identifier, label } => {
                let Some(locale) = Locale::from_code(&identifier) else {
                    debug!(identifier, "No chrome strings for selected language");
                    return;
                };
                if self.screen.read(cx).locale() == locale {
                    return;
                }
                info!(identifier, label, "Switching screen language");
                self.screen.update(cx, |screen, cx| screen.set_locale(locale, cx));
            }
        }
    }
}

impl Render for Shell {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .bg(PickerColors::background())
            .child(self.screen.clone())
    }
}
