//! State - Per-Card UI State
//!
//! Plain state machines owned by views. Nothing here depends on GPUI.

pub mod press;
