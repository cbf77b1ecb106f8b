use crate::blobs::BlobSizeFilter;
use serde::{Deserialize, Serialize};

/// Options for turning a gray page into candidate cell outlines.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentationOptions {
    /// Gray level at and above which a pixel is white.
    pub threshold: u8,
    /// Blobs must exceed this fraction of the page on both axes.
    pub min_blob_fraction: f64,
    /// Blobs reaching this fraction on both axes are discarded.
    pub max_blob_fraction: f64,
}

impl Default for SegmentationOptions {
    fn default() -> Self {
        Self {
            threshold: 128,
            min_blob_fraction: 0.05,
            max_blob_fraction: 0.95,
        }
    }
}

impl SegmentationOptions {
    pub fn size_filter(&self) -> BlobSizeFilter {
        BlobSizeFilter {
            min_fraction: self.min_blob_fraction,
            max_fraction: self.max_blob_fraction,
        }
    }
}

/// Thresholds deciding that a page has no usable panel structure.
///
/// - `white_ratio`: mean intensity above this share of 255 means a blank page.
/// - `black_ratio`: mean intensity at or below `(1 - black_ratio) * 255` means
///   a dark page.
/// - `min_coverage`: detected cells covering less than this share of the page
///   fall back to a single whole-page cell.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FullPageOptions {
    pub white_ratio: f64,
    pub black_ratio: f64,
    pub min_coverage: f64,
}

impl Default for FullPageOptions {
    fn default() -> Self {
        Self {
            white_ratio: 0.95,
            black_ratio: 0.6,
            min_coverage: 0.4,
        }
    }
}
