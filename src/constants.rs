//! Channel limits, quantizer defaults and rounding precisions
//!
//! Values here pin the exact integers and decimals produced by the
//! formatter, so fixtures depend on them.

/// 8-bit channel ceiling used to normalize RGB and alpha
pub const CHANNEL_MAX: f64 = 255.0;

/// Alpha value assumed when a histogram entry has no alpha token
pub const OPAQUE_ALPHA: u8 = 255;

/// Length of a `#RRGGBB` literal, used to drop trailing alpha digits
pub const HEX_RGB_LEN: usize = 7;

/// Length of a `#RRGGBBAA` literal
pub const HEX_RGBA_LEN: usize = 9;

/// Quantizer defaults
pub mod quantizer {
    /// Number of colors requested when none is configured
    pub const DEFAULT_COLORS: u32 = 5;

    /// Bits per channel of the emitted histogram; the parser reads 8-bit channels only
    pub const DEPTH: u8 = 8;

    /// Upper bound on requested colors; a histogram is tens of entries, not thousands
    pub const MAX_COLORS: u32 = 256;
}

/// Decimal places kept when rounding derived values
pub mod precision {
    /// Alpha is reported with two decimals (0.5 -> 0.5, 128/255 -> 0.5)
    pub const ALPHA_DECIMALS: i32 = 2;

    /// Percent weights are reported with two decimals
    pub const PERCENT_DECIMALS: i32 = 2;
}

/// Round half away from zero to `decimals` places
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_two_decimals() {
        assert_eq!(round_to(66.666_666, 2), 66.67);
        assert_eq!(round_to(33.333_333, 2), 33.33);
        assert_eq!(round_to(128.0 / CHANNEL_MAX, precision::ALPHA_DECIMALS), 0.5);
        assert_eq!(round_to(1.0, 2), 1.0);
    }

    #[test]
    fn test_quantizer_defaults_are_consistent() {
        assert_eq!(f64::from(u8::MAX), CHANNEL_MAX);
        assert_eq!(quantizer::DEPTH, 8);
        assert!(quantizer::DEFAULT_COLORS <= quantizer::MAX_COLORS);
    }
}
