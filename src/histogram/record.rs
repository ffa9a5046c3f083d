//! A single quantized color and its pixel coverage

use palette::Srgba;
use serde::{Deserialize, Serialize};

use crate::constants::{precision::ALPHA_DECIMALS, round_to, CHANNEL_MAX};

/// One histogram entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorRecord {
    /// Number of pixels quantized to this color
    pub pixel_count: u64,
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity in [0, 1], rounded to two decimals
    pub alpha: f64,
    /// `#RRGGBB` or `#RRGGBBAA` exactly as the quantizer printed it
    pub hex: String,
}

impl ColorRecord {
    /// Build a record from structured histogram data
    ///
    /// `alpha` is the 8-bit channel value; `None` means the entry had no
    /// alpha channel and is treated as fully opaque. The hex literal is kept
    /// as given, even if it disagrees with the numeric channels.
    pub fn new(
        pixel_count: u64,
        (r, g, b): (u8, u8, u8),
        alpha: Option<u8>,
        hex: impl Into<String>,
    ) -> Self {
        let alpha = alpha.map_or(1.0, |a| {
            round_to(f64::from(a) / CHANNEL_MAX, ALPHA_DECIMALS)
        });
        Self {
            pixel_count,
            r,
            g,
            b,
            alpha,
            hex: hex.into(),
        }
    }

    /// Channels as a tuple
    pub fn rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Channels normalized to [0, 1]
    pub fn normalized(&self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / CHANNEL_MAX,
            f64::from(self.g) / CHANNEL_MAX,
            f64::from(self.b) / CHANNEL_MAX,
        )
    }

    /// sRGB color with alpha for use with the `palette` crate
    pub fn to_srgba(&self) -> Srgba<f64> {
        let (r, g, b) = self.normalized();
        Srgba::new(r, g, b, self.alpha)
    }
}
