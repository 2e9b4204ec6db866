//! Language Screen
//!
//! Title, the scrollable language grid and a hint underneath.

use gpui::{
    div, prelude::*, px, App, AppContext, Context, Entity, FontWeight, IntoElement, ParentElement,
    Render, Styled, Window,
};
use gpui_component::{h_flex, v_flex};

use crate::constants::{CARD_GAP, ROW_GAP, SCREEN_PADDING_TOP, SCREEN_PADDING_X};
use crate::features::language::card::LanguageCard;
use crate::features::language::controller::SelectableGrid;
use crate::i18n::{t, Locale};
use crate::state::press::PressTiming;
use crate::theme::colors::PickerColors;
use crate::theme::typography::Typography;

/// Language selection screen
pub struct LanguageScreen {
    grid: SelectableGrid,
    cards: Vec<Entity<LanguageCard>>,
    locale: Locale,
}

impl LanguageScreen {
    pub fn new(
        grid: SelectableGrid,
        timing: PressTiming,
        locale: Locale,
        cx: &mut Context<Self>,
    ) -> Self {
        let select_label = t(locale, "card-select");
        let cards = grid
            .catalog()
            .iter()
            .map(|record| {
                let card = LanguageCard::new(
                    record.clone(),
                    grid.clone(),
                    timing,
                    select_label.clone(),
                );
                cx.new(|_| card)
            })
            .collect();

        Self {
            grid,
            cards,
            locale,
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Switch the chrome language
    pub fn set_locale(&mut self, locale: Locale, cx: &mut Context<Self>) {
        if self.locale == locale {
            return;
        }
        self.locale = locale;

        let select_label = t(locale, "card-select");
        for card in &self.cards {
            card.update(cx, |card, cx| card.set_select_label(select_label.clone(), cx));
        }
        cx.notify();
    }

    fn card(&self, identifier: &str, cx: &App) -> Option<Entity<LanguageCard>> {
        self.cards
            .iter()
            .find(|card| card.read(cx).identifier() == identifier)
            .cloned()
    }

    fn render_rows(&self, cx: &App) -> impl IntoElement + use<> {
        let rows = self.grid.arrange(|identifier| self.card(identifier, cx));

        v_flex()
            .w_full()
            .gap(px(ROW_GAP))
            .pb(px(40.0))
            .children(rows.into_iter().map(|row| {
                h_flex()
                    .w_full()
                    .gap(px(CARD_GAP))
                    .children(row)
            }))
    }
}

impl Render for LanguageScreen {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        v_flex()
            .size_full()
            .bg(PickerColors::background())
            .pt(px(SCREEN_PADDING_TOP))
            .px(px(SCREEN_PADDING_X))
            .child(
                // Title
                div()
                    .mb(px(18.0))
                    .text_size(px(Typography::TITLE))
                    .font_weight(FontWeight::BOLD)
                    .text_color(PickerColors::text_title())
                    .child(t(self.locale, "screen-title")),
            )
            .child(
                // Grid
                div()
                    .id("language-grid")
                    .flex_1()
                    .overflow_y_scroll()
                    .child(self.render_rows(cx)),
            )
            .child(
                // Hint
                div()
                    .w_full()
                    .mt(px(18.0))
                    .mb(px(24.0))
                    .text_center()
                    .text_size(px(Typography::HINT))
                    .text_color(PickerColors::text_hint())
                    .child(t(self.locale, "screen-hint")),
            )
    }
}
