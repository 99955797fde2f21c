//! Herodex Core - Headless Hero Lookup Pipeline
//!
//! This crate provides the lookup-and-render pipeline for herodex,
//! completely independent of any UI framework. It can drive a TUI, a
//! native GUI, or run headless for testing.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                      UI Surfaces                          │
//! │        ┌─────────┐  ┌─────────┐  ┌──────────────┐        │
//! │        │   TUI   │  │ Desktop │  │   Headless   │        │
//! │        │(ratatui)│  │         │  │  (testing)   │        │
//! │        └────┬────┘  └────┬────┘  └──────┬───────┘        │
//! │             └────────────┴──────────────┘                │
//! │                      Action (up)                         │
//! │                  Screen + Notice (down)                  │
//! └──────────────────────────┼───────────────────────────────┘
//!                            │
//! ┌──────────────────────────┼───────────────────────────────┐
//! │                      CONTROLLER                           │
//! │  ┌─────────┐  ┌────────────┐  ┌───────────┐  ┌────────┐ │
//! │  │ Roster  │  │ HeroSource │  │ Normalizer│  │ Export │ │
//! │  │ Registry│  │  (HTTP)    │  │           │  │ (PDF)  │ │
//! │  └─────────┘  └────────────┘  └───────────┘  └────────┘ │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! # Module Overview
//!
//! - [`roster`]: The fixed registry of playable character names
//! - [`record`]: Raw API payload types and the record normalizer
//! - [`lookup`]: The [`HeroSource`] trait and the Superhero API client
//! - [`controller`]: The screen state machine that owns the current record
//! - [`export`]: Single-page PDF export of the displayed record
//! - [`config`]: TOML configuration with env overrides
//! - [`error`]: Error taxonomy shared across the pipeline
//!
//! # No TUI Dependencies
//!
//! This crate has **zero** dependencies on ratatui, crossterm, or any other
//! UI framework. It's pure pipeline logic that can be used anywhere.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod controller;
pub mod error;
pub mod export;
pub mod lookup;
pub mod record;
pub mod roster;

// Re-exports for convenience
pub use config::{default_config_path, load_config, load_config_from_path, AppConfig};
pub use controller::{Action, Controller, Notice, NoticeLevel, Screen};
pub use error::{AssetMissingError, ConfigError, ExportError, LookupError};
pub use export::{default_export_path, export_pdf};
pub use lookup::{HeroSource, SuperheroApi};
pub use record::{HeroRecord, PortraitImage, RawCandidate, SearchEnvelope};
pub use roster::Roster;
