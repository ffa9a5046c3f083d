//! Histogram text parser
//!
//! Reads the `histogram:info:` format emitted by ImageMagick-style
//! quantizers, one color per line:
//!
//! ```text
//!     100: (255,  0,  0,255) #FF0000FF red
//!      50: (  0,  0,255,255) #0000FFFF blue
//! ```
//!
//! Whitespace is ignored, the alpha component is optional and anything after
//! the hex literal (color names, `srgba(...)` forms) is discarded.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

use crate::constants::{HEX_RGBA_LEN, HEX_RGB_LEN, OPAQUE_ALPHA};
use crate::histogram::ColorRecord;
use crate::{PaletteError, Result};

static LINE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<count>[0-9]+):\((?P<r>[0-9]+),(?P<g>[0-9]+),(?P<b>[0-9]+)(?:,(?P<a>[0-9]+))?\)(?P<hex>#[0-9A-F]+)",
    )
    .expect("histogram line pattern is valid")
});

/// Parser for quantizer histogram text
#[derive(Debug, Clone, Copy, Default)]
pub struct HistogramParser;

impl HistogramParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse every entry of a histogram, preserving line order
    ///
    /// Blank lines are skipped. The first line that does not match the
    /// grammar aborts the parse.
    ///
    /// # Errors
    ///
    /// Returns `PaletteError::MalformedHistogramLine` carrying the raw line.
    pub fn parse(&self, text: &str) -> Result<Vec<ColorRecord>> {
        let records = text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| self.parse_line(line))
            .collect::<Result<Vec<_>>>()?;

        debug!(colors = records.len(), "parsed histogram");
        Ok(records)
    }

    /// Parse a single histogram entry
    pub fn parse_line(&self, line: &str) -> Result<ColorRecord> {
        let compact: String = line.chars().filter(|c| !c.is_whitespace()).collect();
        let caps = LINE_PATTERN
            .captures(&compact)
            .ok_or_else(|| PaletteError::malformed(line))?;

        let pixel_count: u64 = caps["count"]
            .parse()
            .map_err(|_| PaletteError::malformed(line))?;
        let channel = |name: &str| -> Result<u8> {
            caps[name].parse().map_err(|_| PaletteError::malformed(line))
        };
        let rgb = (channel("r")?, channel("g")?, channel("b")?);
        let alpha = match caps.name("a") {
            Some(a) => a.as_str().parse().map_err(|_| PaletteError::malformed(line))?,
            None => OPAQUE_ALPHA,
        };

        let hex = &caps["hex"];
        if hex.len() != HEX_RGB_LEN && hex.len() != HEX_RGBA_LEN {
            return Err(PaletteError::malformed(line));
        }

        let record = ColorRecord::new(pixel_count, rgb, Some(alpha), hex);
        trace!(count = record.pixel_count, hex = %record.hex, "parsed histogram line");
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_imagemagick_output() {
        let text = "    100: (255,  0,  0,255) #FF0000FF red\n     50: (  0,  0,255,255) #0000FFFF blue\n";
        let records = HistogramParser::new().parse(text).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].pixel_count, 100);
        assert_eq!(records[0].rgb(), (255, 0, 0));
        assert_eq!(records[0].alpha, 1.0);
        assert_eq!(records[0].hex, "#FF0000FF");
        assert_eq!(records[1].rgb(), (0, 0, 255));
        assert_eq!(records[1].hex, "#0000FFFF");
    }

    #[test]
    fn test_parse_srgba_suffix_is_ignored() {
        let record = HistogramParser::new()
            .parse_line("  12: ( 10, 20, 30,128) #0A141E80 srgba(10,20,30,0.501961)")
            .unwrap();
        assert_eq!(record.pixel_count, 12);
        assert_eq!(record.rgb(), (10, 20, 30));
        assert_eq!(record.alpha, 0.5);
        assert_eq!(record.hex, "#0A141E80");
    }

    #[test]
    fn test_parse_without_alpha_defaults_to_opaque() {
        let record = HistogramParser::new()
            .parse_line("7: (255,255,255) #FFFFFF white")
            .unwrap();
        assert_eq!(record.rgb(), (255, 255, 255));
        assert_eq!(record.alpha, 1.0);
        assert_eq!(record.hex, "#FFFFFF");
    }

    #[test]
    fn test_parse_preserves_line_order() {
        let text = "1:(1,1,1,255)#010101FF\n3:(3,3,3,255)#030303FF\n2:(2,2,2,255)#020202FF";
        let counts: Vec<u64> = HistogramParser::new()
            .parse(text)
            .unwrap()
            .iter()
            .map(|r| r.pixel_count)
            .collect();
        assert_eq!(counts, vec![1, 3, 2]);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let records = HistogramParser::new()
            .parse("\n1:(1,1,1,255)#010101FF\n   \n")
            .unwrap();
        assert_eq!(records.len(), 1);
        assert!(HistogramParser::new().parse("").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_line_aborts_parse() {
        let text = "1:(1,1,1,255)#010101FF\nabc\n2:(2,2,2,255)#020202FF";
        match HistogramParser::new().parse(text) {
            Err(PaletteError::MalformedHistogramLine { line }) => assert_eq!(line, "abc"),
            other => panic!("Expected MalformedHistogramLine, got: {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range_channel_is_malformed() {
        let parser = HistogramParser::new();
        assert!(parser.parse_line("1:(256,0,0,255)#FF0000FF").is_err());
        assert!(parser.parse_line("1:(0,0,0,300)#000000FF").is_err());
    }

    #[test]
    fn test_missing_hex_is_malformed() {
        let parser = HistogramParser::new();
        assert!(parser.parse_line("1:(0,0,0,255)").is_err());
        assert!(parser.parse_line("1:(0,0,0,255)#0000").is_err());
        assert!(parser.parse_line("(0,0,0,255)#000000FF").is_err());
    }

    #[test]
    fn test_hex_of_wrong_length_is_malformed() {
        let parser = HistogramParser::new();
        for line in ["1:(255,0,0,255)#FF00000", "1:(255,0,0,255)#FF0000FFA", "1:(255,0,0)#FF00"] {
            match parser.parse_line(line) {
                Err(PaletteError::MalformedHistogramLine { line: raw }) => assert_eq!(raw, line),
                other => panic!("Expected MalformedHistogramLine for {}, got: {:?}", line, other),
            }
        }
    }

    #[test]
    fn test_hex_is_kept_in_full() {
        let parser = HistogramParser::new();
        assert_eq!(parser.parse_line("1:(255,0,0)#FF0000 red").unwrap().hex, "#FF0000");
        assert_eq!(
            parser.parse_line("1:(255,0,0,128)#FF000080 srgba(255,0,0,0.5)").unwrap().hex,
            "#FF000080"
        );
    }
}
