//! Theme - Screen Palette and Typography

pub mod colors;
pub mod typography;
