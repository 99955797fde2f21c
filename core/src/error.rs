//! Error Taxonomy
//!
//! Shared error types for the lookup pipeline. Every error raised by the
//! lookup client or the exporter is caught at the controller boundary and
//! surfaced to the user as a notice; none of these are fatal to the process.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from the lookup side of the pipeline.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The query was empty or named a character outside the roster.
    /// No network call is issued for these.
    #[error("{0}")]
    Validation(String),

    /// The remote search reported no successful result for the name.
    #[error("no hero found for '{0}'")]
    NotFound(String),

    /// Transport failure or timeout while reaching the remote service.
    #[error("could not reach the hero service: {0}")]
    Connection(#[from] reqwest::Error),
}

/// Errors from the PDF exporter.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Export was requested while no record is loaded.
    #[error("no hero record is loaded to export")]
    NoRecord,

    /// The destination path could not be created or written.
    #[error("could not write the export file: {0}")]
    Io(#[from] std::io::Error),

    /// The portrait bytes could not be decoded for embedding.
    #[error("portrait image could not be embedded: {0}")]
    Image(String),

    /// The underlying PDF renderer failed.
    #[error("pdf rendering failed: {0}")]
    Render(String),
}

/// Errors from loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("could not read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The config file is not valid TOML.
    #[error("could not parse config file {path}: {source}")]
    Parse {
        /// Path that failed to parse.
        path: PathBuf,
        /// Underlying TOML error.
        source: toml::de::Error,
    },
}

/// A local static asset (banner art, icon) was not found.
///
/// Asset misses degrade gracefully: callers log the miss and substitute a
/// neutral fallback rather than failing the application.
#[derive(Debug, Error)]
#[error("asset not found: {path}")]
pub struct AssetMissingError {
    /// The missing asset path.
    pub path: PathBuf,
}
