//! Theme and Colors
//!
//! The herodex palette - a crimson-on-grey scheme mapped to terminal
//! cells. The exporter carries the same crimson and grey into the PDF.

use ratatui::style::Color;

// ============================================================================
// Brand Palette
// ============================================================================

/// Primary crimson (#9f0000) for accents, highlights, and values
pub const PRIMARY: Color = Color::Rgb(159, 0, 0);

/// Darker crimson (#7a0000) for pressed/secondary accents
pub const PRIMARY_DARK: Color = Color::Rgb(122, 0, 0);

/// Panel backdrop grey (#d9d9d9)
pub const BACKDROP: Color = Color::Rgb(217, 217, 217);

/// Dark text on light panels
pub const TEXT_DARK: Color = Color::Rgb(20, 20, 20);

/// Light text on crimson/dark panels
pub const TEXT_LIGHT: Color = Color::Rgb(245, 245, 245);

// ============================================================================
// UI Colors
// ============================================================================

/// System/dim text
pub const DIM_GRAY: Color = Color::Rgb(100, 100, 100);

/// Error red for notices
pub const ERROR_RED: Color = Color::Rgb(255, 80, 80);

/// Warning amber for notices
pub const WARNING_AMBER: Color = Color::Rgb(230, 180, 80);

/// Success green for notices
pub const SUCCESS_GREEN: Color = Color::Rgb(120, 230, 120);
