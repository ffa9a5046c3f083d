//! RGB to HSL conversion
//!
//! Uses the min/max hue-sector derivation on channels normalized to
//! [0, 1], then rounds to whole degrees and percents.

use serde::{Deserialize, Serialize};

use crate::histogram::ColorRecord;

/// HSL color in display units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue in degrees, 0-360 (360 is not folded to 0)
    pub hue: u16,
    /// Saturation percent, 0-100
    pub saturation: u8,
    /// Lightness percent, 0-100
    pub lightness: u8,
    /// Opacity carried through from the source color, when requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f64>,
}

impl Hsl {
    /// `(hue, saturation, lightness)` without alpha
    pub fn to_tuple(&self) -> (u16, u8, u8) {
        (self.hue, self.saturation, self.lightness)
    }
}

/// Color converter from normalized RGB to HSL
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorConverter;

impl ColorConverter {
    pub fn new() -> Self {
        Self
    }

    /// Convert normalized RGB to HSL
    ///
    /// # Arguments
    ///
    /// * `r`, `g`, `b` - channels in [0, 1]
    /// * `alpha` - copied unchanged into the result; `None` yields three-component HSL
    ///
    /// # Rounding
    ///
    /// Hue, saturation and lightness are rounded half away from zero
    /// (`f64::round`). A hue that rounds to 360 stays 360.
    pub fn rgb_to_hsl(&self, r: f64, g: f64, b: f64, alpha: Option<f64>) -> Hsl {
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        let (h, s) = if max == min {
            // achromatic
            (0.0, 0.0)
        } else {
            let d = max - min;
            let s = if l >= 0.5 {
                d / (2.0 - max - min)
            } else {
                d / (max + min)
            };
            let h = if max == r {
                (g - b) / d + if g < b { 6.0 } else { 0.0 }
            } else if max == g {
                (b - r) / d + 2.0
            } else {
                (r - g) / d + 4.0
            };
            (h / 6.0, s)
        };

        Hsl {
            hue: (h * 360.0).round() as u16,
            saturation: (s * 100.0).round() as u8,
            lightness: (l * 100.0).round() as u8,
            alpha,
        }
    }

    /// Convert a histogram color, optionally carrying its alpha
    pub fn record_to_hsl(&self, record: &ColorRecord, with_alpha: bool) -> Hsl {
        let (r, g, b) = record.normalized();
        self.rgb_to_hsl(r, g, b, with_alpha.then_some(record.alpha))
    }
}
