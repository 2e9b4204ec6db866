//! Language Selection Feature
//!
//! A two-column grid of gradient cards, one per catalog language.

pub mod card;
pub mod controller;
pub mod page;
