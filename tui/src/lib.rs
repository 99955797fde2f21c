//! Herodex TUI - Terminal interface for the hero browser
//!
//! This crate provides a full-screen terminal UI over the headless
//! `herodex-core` pipeline: password gate, main menu, search box, roster
//! list, and the hero detail view with PDF export.
//!
//! # Architecture
//!
//! - **App**: Event loop; converts key events into controller actions
//! - **Screens**: Per-screen rendering plus the modal notice overlay
//! - **Assets**: Optional banner art with graceful fallback
//! - **Theme**: Fixed palette (crimson on grey)

pub mod app;
pub mod assets;
pub mod screens;
pub mod theme;

pub use app::App;
