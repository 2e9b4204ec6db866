//! UI Constants
//!
//! Centralized UI constants for consistent layout across the application.

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 420.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 760.0;
pub const MIN_WINDOW_WIDTH: f32 = 320.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Number of columns in the language grid
pub const GRID_COLUMNS: usize = 2;

/// Card scale while fully pressed
pub const PRESSED_SCALE: f32 = 0.97;
/// Card scale at rest
pub const RESTING_SCALE: f32 = 1.0;
/// Card opacity while the pointer is held down
pub const PRESSED_OPACITY: f32 = 0.92;

/// Press-feedback timings
pub const PRESS_DURATION_MS: u64 = 120;
pub const RELEASE_DURATION_MS: u64 = 160;

/// Card geometry
pub const CARD_MIN_HEIGHT: f32 = 110.0;
pub const CARD_RADIUS: f32 = 16.0;
pub const CARD_PADDING: f32 = 18.0;
pub const CARD_GAP: f32 = 12.0;
pub const ROW_GAP: f32 = 16.0;

/// Screen padding
pub const SCREEN_PADDING_TOP: f32 = 60.0;
pub const SCREEN_PADDING_X: f32 = 20.0;

/// Gradient angle in degrees (top-left to bottom-right)
pub const CARD_GRADIENT_ANGLE: f32 = 135.0;
