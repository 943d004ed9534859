//! Pure form, grid and formatting logic shared by every launcher.

pub mod config;
pub mod format;
pub mod grid;
pub mod platform;
pub mod state;
