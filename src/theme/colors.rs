//! Colors - Picker Theme Colors

use gpui::{rgb, rgba, Hsla, Rgba};

use crate::domain::language::RgbColor;

/// Picker color palette - All colors are accessed via associated functions
pub struct PickerColors;

impl PickerColors {
    // Background colors
    /// Screen background - Slate
    pub fn background() -> Rgba { rgb(0x0f172a) }

    // Text colors
    /// Title text
    pub fn text_title() -> Rgba { rgb(0xe6eef8) }
    /// Hint text
    pub fn text_hint() -> Rgba { rgb(0x9fb3d8) }
    /// Language label on a card
    pub fn card_label() -> Rgba { rgb(0x06202a) }
    /// "Select" pill text
    pub fn pill_text() -> Rgba { rgb(0x051422) }

    // Overlays
    /// "Select" pill background
    pub fn pill_bg() -> Rgba { rgba(0x00000014) }
}

/// Convert a catalog color to Hsla for gradient stops
impl PickerColors {
    pub fn from_catalog(color: RgbColor) -> Hsla {
        Hsla::from(rgb(color.hex()))
    }
}
