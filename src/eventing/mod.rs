//! Eventing - Messages Into the UI Thread

pub mod app_event;
