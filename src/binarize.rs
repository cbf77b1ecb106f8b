//! Gray page → foreground mask.

use crate::image::{BinaryMask, ImageU8, ImageView, ImageViewMut};
use serde::{Deserialize, Serialize};

/// Turns an 8-bit page into the mask consumed by blob extraction.
pub trait Binarizer {
    fn binarize(&self, gray: &ImageU8<'_>) -> BinaryMask;
}

/// Global threshold with automatic detection of light-on-dark pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdBinarizer {
    /// Gray level at and above which a pixel counts as white.
    pub threshold: u8,
}

impl Default for ThresholdBinarizer {
    fn default() -> Self {
        Self { threshold: 128 }
    }
}

/// Fraction of the page height (width) sampled on the top/bottom
/// (left/right) borders.
const BORDER_BAND: f64 = 0.05;

impl ThresholdBinarizer {
    pub fn new(threshold: u8) -> Self {
        Self { threshold }
    }

    #[inline]
    fn is_white(&self, v: u8) -> bool {
        v >= self.threshold
    }

    /// True when the page borders are mostly dark, i.e. panels are drawn
    /// light on a black background.
    pub fn is_inverted(&self, gray: &ImageU8<'_>) -> bool {
        let (w, h) = (gray.width(), gray.height());
        let vband = (h as f64 * BORDER_BAND) as usize;
        let hband = (w as f64 * BORDER_BAND) as usize;

        let mut white = 0usize;
        for i in 0..vband {
            for y in [i, h - i - 1] {
                white += gray.row(y).iter().filter(|&&v| self.is_white(v)).count();
            }
        }
        for i in 0..hband {
            for x in [i, w - i - 1] {
                white += (0..h).filter(|&y| self.is_white(gray.pixel(x, y))).count();
            }
        }
        // corner pixels count once per band
        let sampled = 2 * (vband * w + hband * h);
        (white as f64) < sampled as f64 * 0.5
    }
}

impl Binarizer for ThresholdBinarizer {
    fn binarize(&self, gray: &ImageU8<'_>) -> BinaryMask {
        let inverted = self.is_inverted(gray);
        let mut mask = BinaryMask::new(gray.width(), gray.height());
        for y in 0..gray.height() {
            let src = gray.row(y);
            for (dst, &v) in mask.row_mut(y).iter_mut().zip(src) {
                *dst = self.is_white(v) == inverted;
            }
        }
        log::debug!(
            "binarized {}x{} page at threshold {} (inverted={})",
            gray.width(),
            gray.height(),
            self.threshold,
            inverted
        );
        mask
    }
}
