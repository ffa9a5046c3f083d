//! Color conversion and formatting module
//!
//! This module handles the RGB to HSL conversion and the cached output
//! projections (hex, RGB, HSL, percentages) of a ranked palette.

pub mod conversion;
pub mod formatter;

pub use conversion::{ColorConverter, Hsl};
pub use formatter::ColorFormatter;
