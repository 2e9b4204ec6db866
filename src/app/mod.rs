//! Application Layer
//!
//! Contains app initialization, window management, and the root shell.

pub mod application;
pub mod shell;
