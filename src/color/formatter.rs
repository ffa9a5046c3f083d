//! Output projections over a ranked palette
//!
//! Each projection is derived on first access and cached for the lifetime
//! of the formatter. All of them follow the palette's ranked order.

use once_cell::unsync::OnceCell;

use crate::color::{ColorConverter, Hsl};
use crate::constants::{precision::PERCENT_DECIMALS, round_to, HEX_RGB_LEN};
use crate::histogram::RankedPalette;

/// Lazily cached hex, RGB, HSL and percentage views of a palette
#[derive(Debug)]
pub struct ColorFormatter {
    palette: RankedPalette,
    converter: ColorConverter,
    hex_alpha: OnceCell<Vec<String>>,
    hex: OnceCell<Vec<String>>,
    rgb_alpha: OnceCell<Vec<(u8, u8, u8, f64)>>,
    rgb: OnceCell<Vec<(u8, u8, u8)>>,
    hsl_alpha: OnceCell<Vec<Hsl>>,
    hsl: OnceCell<Vec<Hsl>>,
    pct: OnceCell<Vec<f64>>,
}

impl ColorFormatter {
    pub fn new(palette: RankedPalette) -> Self {
        Self {
            palette,
            converter: ColorConverter::new(),
            hex_alpha: OnceCell::new(),
            hex: OnceCell::new(),
            rgb_alpha: OnceCell::new(),
            rgb: OnceCell::new(),
            hsl_alpha: OnceCell::new(),
            hsl: OnceCell::new(),
            pct: OnceCell::new(),
        }
    }

    /// The palette being formatted
    pub fn palette(&self) -> &RankedPalette {
        &self.palette
    }

    /// Hex strings as printed by the quantizer, alpha digits included
    pub fn to_hex_alpha(&self) -> &[String] {
        self.hex_alpha
            .get_or_init(|| self.palette.iter().map(|c| c.hex.clone()).collect())
    }

    /// `#RRGGBB` strings, truncating any alpha digits
    pub fn to_hex(&self) -> &[String] {
        self.hex.get_or_init(|| {
            self.to_hex_alpha()
                .iter()
                .map(|hex| hex.chars().take(HEX_RGB_LEN).collect())
                .collect()
        })
    }

    pub fn to_rgb_alpha(&self) -> &[(u8, u8, u8, f64)] {
        self.rgb_alpha
            .get_or_init(|| self.palette.iter().map(|c| (c.r, c.g, c.b, c.alpha)).collect())
    }

    pub fn to_rgb(&self) -> &[(u8, u8, u8)] {
        self.rgb
            .get_or_init(|| self.palette.iter().map(|c| c.rgb()).collect())
    }

    pub fn to_hsl_alpha(&self) -> &[Hsl] {
        self.hsl_alpha.get_or_init(|| {
            self.palette
                .iter()
                .map(|c| self.converter.record_to_hsl(c, true))
                .collect()
        })
    }

    pub fn to_hsl(&self) -> &[Hsl] {
        self.hsl.get_or_init(|| {
            self.palette
                .iter()
                .map(|c| self.converter.record_to_hsl(c, false))
                .collect()
        })
    }

    /// Share of total pixels per color, in percent with two decimals
    ///
    /// Rounding drift means the values sum to roughly, not exactly, 100.
    pub fn to_pct(&self) -> &[f64] {
        self.pct.get_or_init(|| {
            let total = self.palette.total_pixels() as f64;
            self.palette
                .iter()
                .map(|c| round_to(c.pixel_count as f64 / total * 100.0, PERCENT_DECIMALS))
                .collect()
        })
    }
}
