//! Language Picker Library
//!
//! A language-selection screen: a fixed catalog of languages laid out as a
//! two-column grid of gradient cards with press feedback. Selections are
//! forwarded to a sink supplied by the embedding application.

pub mod app;
pub mod constants;
pub mod domain;
pub mod error;
pub mod eventing;
pub mod features;
pub mod helpers;
pub mod i18n;
pub mod state;
pub mod theme;
