//! AppEvent - Application Event Enum
//!
//! Events the embedding application sends back to the UI layer.

/// Application events for sink -> UI communication
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// A language card was tapped
    LanguageSelected { identifier: String, label: String },
}
