//! Plant Store - storefront screen with a fanned product carousel
//!
//! The carousel math and screen state are plain Rust; `gui` renders them with egui.

pub mod carousel;
pub mod config;
pub mod content;
pub mod gui;
pub mod state;
