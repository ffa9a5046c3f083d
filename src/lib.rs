//! # Dominant Colors
//!
//! A Rust crate for extracting the dominant colors of an image from its
//! quantized color histogram.
//!
//! This library provides:
//! - Parsing of `histogram:info:` text emitted by ImageMagick-style quantizers
//! - Ranking of colors by pixel coverage
//! - Hex, RGB and HSL output, with or without alpha, plus percentage weights
//!
//! Decoding the image and running the quantizer are left to a
//! [`HistogramSource`] supplied by the caller.
//!
//! ## Example
//!
//! ```rust
//! use dominant_colors::DominantColors;
//!
//! let histogram = "100: (255,0,0,255) #FF0000FF\n50: (0,0,255,255) #0000FFFF";
//! let colors = DominantColors::from_histogram(histogram, 2)?;
//!
//! assert_eq!(colors.to_hex()?, ["#FF0000", "#0000FF"]);
//! assert_eq!(colors.to_pct()?, [66.67, 33.33]);
//! # Ok::<(), dominant_colors::PaletteError>(())
//! ```

use once_cell::unsync::OnceCell;
use tracing::debug;

pub mod error;
pub mod constants;
pub mod config;
pub mod source;
pub mod histogram;
pub mod color;

pub use color::{ColorConverter, ColorFormatter, Hsl};
pub use config::PaletteConfig;
pub use error::{PaletteError, Result};
pub use histogram::{ColorRanker, ColorRecord, HistogramParser, RankedPalette};
pub use source::{AcquisitionError, AcquisitionErrorKind, HistogramSource};

/// Dominant colors of one image, for one requested color count
///
/// Parsing happens on construction; ranking and every output projection are
/// computed on first use and cached.
#[derive(Debug)]
pub struct DominantColors {
    colors: u32,
    records: Vec<ColorRecord>,
    formatter: OnceCell<ColorFormatter>,
}

impl DominantColors {
    /// Parse histogram text produced for `colors` requested colors
    ///
    /// # Errors
    ///
    /// Returns `PaletteError::MalformedHistogramLine` for the first line that
    /// does not follow the histogram grammar.
    pub fn from_histogram(text: &str, colors: u32) -> Result<Self> {
        let records = HistogramParser::new().parse(text)?;
        Ok(Self::from_records(records, colors))
    }

    /// Use already-decoded histogram entries, bypassing text parsing
    pub fn from_records(records: Vec<ColorRecord>, colors: u32) -> Self {
        Self {
            colors,
            records,
            formatter: OnceCell::new(),
        }
    }

    /// Ask a [`HistogramSource`] for the histogram of `source` and parse it
    ///
    /// # Errors
    ///
    /// Configuration errors, the source's own [`AcquisitionError`] as
    /// `PaletteError::Acquisition`, or a malformed histogram.
    pub fn from_source<S>(histograms: &S, source: &str, config: &PaletteConfig) -> Result<Self>
    where
        S: HistogramSource + ?Sized,
    {
        config.validate()?;
        let text = histograms.histogram(source, config)?;
        debug!(colors = config.colors, bytes = text.len(), "received histogram");
        Self::from_histogram(&text, config.colors)
    }

    /// Number of colors requested from the quantizer
    pub fn colors(&self) -> u32 {
        self.colors
    }

    /// Parsed entries in histogram order
    pub fn records(&self) -> &[ColorRecord] {
        &self.records
    }

    fn formatter(&self) -> Result<&ColorFormatter> {
        self.formatter.get_or_try_init(|| {
            let palette = ColorRanker::new().rank(self.records.clone())?;
            Ok::<_, PaletteError>(ColorFormatter::new(palette))
        })
    }

    /// Colors ranked by pixel count with the total pixel count
    ///
    /// # Errors
    ///
    /// Returns `PaletteError::EmptyPalette` when the histogram has no colors or no pixels.
    pub fn palette(&self) -> Result<&RankedPalette> {
        Ok(self.formatter()?.palette())
    }

    /// Hex strings as printed by the quantizer, alpha digits included, most prevalent first
    ///
    /// # Errors
    ///
    /// Returns `PaletteError::EmptyPalette` when the histogram has no colors or no pixels.
    pub fn to_hex_alpha(&self) -> Result<&[String]> {
        Ok(self.formatter()?.to_hex_alpha())
    }

    /// `#RRGGBB` hex strings, most prevalent first
    ///
    /// # Errors
    ///
    /// Returns `PaletteError::EmptyPalette` when the histogram has no colors or no pixels.
    pub fn to_hex(&self) -> Result<&[String]> {
        Ok(self.formatter()?.to_hex())
    }

    /// `(r, g, b, alpha)` tuples with alpha in [0, 1], most prevalent first
    ///
    /// # Errors
    ///
    /// Returns `PaletteError::EmptyPalette` when the histogram has no colors or no pixels.
    pub fn to_rgb_alpha(&self) -> Result<&[(u8, u8, u8, f64)]> {
        Ok(self.formatter()?.to_rgb_alpha())
    }

    /// `(r, g, b)` tuples, most prevalent first
    ///
    /// # Errors
    ///
    /// Returns `PaletteError::EmptyPalette` when the histogram has no colors or no pixels.
    pub fn to_rgb(&self) -> Result<&[(u8, u8, u8)]> {
        Ok(self.formatter()?.to_rgb())
    }

    /// HSL values carrying each color's alpha, most prevalent first
    ///
    /// # Errors
    ///
    /// Returns `PaletteError::EmptyPalette` when the histogram has no colors or no pixels.
    pub fn to_hsl_alpha(&self) -> Result<&[Hsl]> {
        Ok(self.formatter()?.to_hsl_alpha())
    }

    /// HSL values without alpha, most prevalent first
    ///
    /// # Errors
    ///
    /// Returns `PaletteError::EmptyPalette` when the histogram has no colors or no pixels.
    pub fn to_hsl(&self) -> Result<&[Hsl]> {
        Ok(self.formatter()?.to_hsl())
    }

    /// Share of total pixels per color, in percent with two decimals
    ///
    /// # Errors
    ///
    /// Returns `PaletteError::EmptyPalette` when the histogram has no colors or no pixels.
    pub fn to_pct(&self) -> Result<&[f64]> {
        Ok(self.formatter()?.to_pct())
    }
}
