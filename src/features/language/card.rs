//! Language Card
//!
//! One pressable gradient card. Owns its press-feedback animation; the
//! animation is dropped together with the card entity.

use std::time::Instant;

use gpui::{
    div, linear_color_stop, linear_gradient, prelude::*, px, relative, ClickEvent, Context,
    FontWeight, IntoElement, MouseButton, MouseDownEvent, MouseUpEvent, ParentElement, Render,
    SharedString, Styled, Window,
};
use tracing::trace;

use crate::constants::{
    CARD_GRADIENT_ANGLE, CARD_MIN_HEIGHT, CARD_PADDING, CARD_RADIUS, PRESSED_OPACITY,
    RESTING_SCALE,
};
use crate::domain::language::LanguageRecord;
use crate::features::language::controller::{card_element_id, SelectableGrid};
use crate::state::press::{PressAnimation, PressTiming};
use crate::theme::colors::PickerColors;
use crate::theme::typography::Typography;

/// Card geometry at a given scale factor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardMetrics {
    /// Minimum outer height, padding included
    pub min_height: f32,
    pub padding: f32,
    pub label_size: f32,
    pub pill_size: f32,
}

impl CardMetrics {
    pub fn at_scale(scale: f32) -> Self {
        Self {
            min_height: (CARD_MIN_HEIGHT + CARD_PADDING * 2.0) * scale,
            padding: CARD_PADDING * scale,
            label_size: Typography::CARD_LABEL * scale,
            pill_size: Typography::PILL * scale,
        }
    }

    /// Height the slot reserves; it grows past this with the card's content
    pub fn slot_min_height() -> f32 {
        Self::at_scale(RESTING_SCALE).min_height
    }
}

/// Card view for a single language
pub struct LanguageCard {
    record: LanguageRecord,
    label: SharedString,
    select_label: SharedString,
    grid: SelectableGrid,
    press: PressAnimation,
}

impl LanguageCard {
    pub fn new(
        record: LanguageRecord,
        grid: SelectableGrid,
        timing: PressTiming,
        select_label: SharedString,
    ) -> Self {
        Self {
            label: SharedString::from(record.label.clone()),
            record,
            select_label,
            grid,
            press: PressAnimation::new(timing),
        }
    }

    pub fn identifier(&self) -> &str {
        &self.record.identifier
    }

    /// Update the translated pill text
    pub fn set_select_label(&mut self, select_label: SharedString, cx: &mut Context<Self>) {
        if self.select_label != select_label {
            self.select_label = select_label;
            cx.notify();
        }
    }

    fn on_press(&mut self, cx: &mut Context<Self>) {
        trace!(identifier = %self.record.identifier, "Card pressed");
        self.press.press(Instant::now());
        cx.notify();
    }

    fn on_release(&mut self, cx: &mut Context<Self>) {
        if self.press.release(Instant::now()) {
            trace!(identifier = %self.record.identifier, "Card released");
            cx.notify();
        }
    }

    fn on_tap(&mut self) {
        self.grid.tap(&self.record.identifier);
    }

    fn render_pill(&self, metrics: CardMetrics) -> impl IntoElement + use<> {
        div()
            .mt(px(6.0))
            .px(px(12.0))
            .py(px(6.0))
            .rounded(px(20.0))
            .bg(PickerColors::pill_bg())
            .text_size(px(metrics.pill_size))
            .font_weight(FontWeight::BOLD)
            .text_color(PickerColors::pill_text())
            .child(self.select_label.clone())
    }
}

impl Render for LanguageCard {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let now = Instant::now();
        self.press.tick(now);
        let scale = self.press.scale_at(now);
        let metrics = CardMetrics::at_scale(scale);
        if self.press.is_animating(now) {
            window.request_animation_frame();
        }

        let opacity = if self.press.is_pressed() {
            PRESSED_OPACITY
        } else {
            1.0
        };

        let gradient = linear_gradient(
            CARD_GRADIENT_ANGLE,
            linear_color_stop(PickerColors::from_catalog(self.record.gradient.start), 0.0),
            linear_color_stop(PickerColors::from_catalog(self.record.gradient.end), 1.0),
        );

        // The slot keeps the resting size while the card shrinks inside it,
        // and grows with the card when its text wraps
        div()
            .flex_1()
            .flex()
            .items_center()
            .justify_center()
            .min_h(px(CardMetrics::slot_min_height()))
            .child(
                div()
                    .id(SharedString::from(card_element_id(&self.record.identifier)))
                    .w(relative(scale))
                    .min_h(px(metrics.min_height))
                    .p(px(metrics.padding))
                    .rounded(px(CARD_RADIUS))
                    .bg(gradient)
                    .shadow_lg()
                    .opacity(opacity)
                    .cursor_pointer()
                    .flex()
                    .flex_col()
                    .justify_between()
                    .items_start()
                    .on_mouse_down(
                        MouseButton::Left,
                        cx.listener(|this, _: &MouseDownEvent, _window, cx| this.on_press(cx)),
                    )
                    .on_mouse_up(
                        MouseButton::Left,
                        cx.listener(|this, _: &MouseUpEvent, _window, cx| this.on_release(cx)),
                    )
                    // Gesture cancelled: released outside the card
                    .on_mouse_up_out(
                        MouseButton::Left,
                        cx.listener(|this, _: &MouseUpEvent, _window, cx| this.on_release(cx)),
                    )
                    .on_click(cx.listener(|this, _: &ClickEvent, _window, _cx| this.on_tap()))
                    .child(
                        div()
                            .text_size(px(metrics.label_size))
                            .font_weight(FontWeight::EXTRA_BOLD)
                            .text_color(PickerColors::card_label())
                            .child(self.label.clone()),
                    )
                    .child(self.render_pill(metrics)),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::PRESSED_SCALE;

    #[test]
    fn test_resting_metrics() {
        let metrics = CardMetrics::at_scale(RESTING_SCALE);
        assert_eq!(metrics.min_height, CARD_MIN_HEIGHT + CARD_PADDING * 2.0);
        assert_eq!(metrics.padding, CARD_PADDING);
        assert_eq!(metrics.label_size, Typography::CARD_LABEL);
    }

    #[test]
    fn test_card_fits_slot_at_every_scale() {
        let slot = CardMetrics::slot_min_height();
        for step in 0..=30 {
            let scale = (PRESSED_SCALE + (RESTING_SCALE - PRESSED_SCALE) * step as f32 / 30.0).min(RESTING_SCALE);
            let metrics = CardMetrics::at_scale(scale);
            assert!(
                metrics.min_height <= slot + 1e-3,
                "card min height {} exceeds slot {slot} at scale {scale}",
                metrics.min_height
            );
            assert!(metrics.padding * 2.0 < metrics.min_height);
        }
    }
}
