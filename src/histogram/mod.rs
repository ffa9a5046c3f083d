//! Histogram parsing and ranking module
//!
//! This module turns the quantizer's textual histogram into color records
//! and orders them by pixel coverage.

pub mod record;
pub mod parser;
pub mod ranker;

pub use record::ColorRecord;
pub use parser::HistogramParser;
pub use ranker::{ColorRanker, RankedPalette};
