//! Typography - Font Sizes

/// Typography constants
pub struct Typography;

impl Typography {
    /// Screen title
    pub const TITLE: f32 = 28.0;
    /// Language label on a card
    pub const CARD_LABEL: f32 = 18.0;
    /// Hint under the grid
    pub const HINT: f32 = 13.0;
    /// "Select" pill
    pub const PILL: f32 = 12.0;
}
