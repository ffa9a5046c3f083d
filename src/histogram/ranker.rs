//! Ranking of histogram colors by pixel coverage

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::histogram::ColorRecord;
use crate::{PaletteError, Result};

/// Colors ordered by pixel count, most prevalent first
///
/// Deserializing re-ranks the colors and recomputes the total, so a stored
/// palette cannot bypass [`ColorRanker`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StoredPalette")]
pub struct RankedPalette {
    colors: Vec<ColorRecord>,
    total_pixels: u128,
}

/// Serialized form of a palette; any stored total is ignored
#[derive(Deserialize)]
struct StoredPalette {
    colors: Vec<ColorRecord>,
}

impl TryFrom<StoredPalette> for RankedPalette {
    type Error = PaletteError;

    fn try_from(stored: StoredPalette) -> Result<Self> {
        ColorRanker::new().rank(stored.colors)
    }
}

impl RankedPalette {
    /// Ranked colors
    pub fn colors(&self) -> &[ColorRecord] {
        &self.colors
    }

    /// Sum of the pixel counts of every color
    ///
    /// Wider than a single count so large histograms cannot overflow.
    pub fn total_pixels(&self) -> u128 {
        self.total_pixels
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// False for any palette produced by [`ColorRanker`]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ColorRecord> {
        self.colors.iter()
    }
}

impl<'a> IntoIterator for &'a RankedPalette {
    type Item = &'a ColorRecord;
    type IntoIter = std::slice::Iter<'a, ColorRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Orders parsed colors into a [`RankedPalette`]
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorRanker;

impl ColorRanker {
    pub fn new() -> Self {
        Self
    }

    /// Sort by pixel count descending; equal counts keep their input order
    ///
    /// # Errors
    ///
    /// Returns `PaletteError::EmptyPalette` when there are no colors or no
    /// pixels at all, since percentage weights have no defined value.
    pub fn rank(&self, mut colors: Vec<ColorRecord>) -> Result<RankedPalette> {
        if colors.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }

        // sort_by_key is stable
        colors.sort_by_key(|c| Reverse(c.pixel_count));
        let total_pixels: u128 = colors.iter().map(|c| u128::from(c.pixel_count)).sum();
        if total_pixels == 0 {
            return Err(PaletteError::EmptyPalette);
        }

        debug!(colors = colors.len(), total_pixels, "ranked palette");
        Ok(RankedPalette {
            colors,
            total_pixels,
        })
    }
}
