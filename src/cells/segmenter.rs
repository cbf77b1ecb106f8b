use super::filter::filter_contained;
use super::full_page::is_full_page;
use super::options::{FullPageOptions, SegmentationOptions};
use crate::binarize::{Binarizer, ThresholdBinarizer};
use crate::blobs::{build_hulls, extract_blobs, filter_blobs_by_size};
use crate::diagnostics::{elapsed_ms, TimingBreakdown};
use crate::error::Result;
use crate::geometry::Polygon;
use crate::image::{BinaryMask, ImageU8, ImageView};
use serde::Serialize;
use std::time::Instant;

/// Counters collected while segmenting one page.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentationStats {
    pub inverted: bool,
    pub blobs: usize,
    pub size_filtered: usize,
    pub hulls: usize,
    pub cells: usize,
    pub timings: TimingBreakdown,
}

/// Cells found on a page, in extraction order.
#[derive(Clone, Debug)]
pub struct ExtractionResult {
    pub polygons: Vec<Polygon>,
    pub full_page: bool,
    pub stats: SegmentationStats,
}

/// Gray page → binary mask → blobs → convex cells.
#[derive(Clone, Debug, Default)]
pub struct CellSegmenter {
    pub options: SegmentationOptions,
    pub full_page: FullPageOptions,
}

impl CellSegmenter {
    pub fn new(options: SegmentationOptions, full_page: FullPageOptions) -> Self {
        Self { options, full_page }
    }

    pub fn binarizer(&self) -> ThresholdBinarizer {
        ThresholdBinarizer::new(self.options.threshold)
    }

    /// Threshold `gray` and extract its cells.
    pub fn extract(&self, gray: &ImageU8<'_>) -> Result<ExtractionResult> {
        let start = Instant::now();
        let binarizer = self.binarizer();
        let inverted = binarizer.is_inverted(gray);
        let mask = binarizer.binarize(gray);
        let binarize_ms = elapsed_ms(start);

        let mut result = self.extract_from_mask(&mask, gray)?;
        result.stats.inverted = inverted;
        result.stats.timings.record_first("binarize", binarize_ms);
        Ok(result)
    }

    /// Extract cells from an already binarized page. `gray` is only used for
    /// the full-page intensity check.
    pub fn extract_from_mask(
        &self,
        mask: &BinaryMask,
        gray: &ImageU8<'_>,
    ) -> Result<ExtractionResult> {
        let total = Instant::now();
        let mut stats = SegmentationStats::default();

        let filter = self.options.size_filter();
        let blobs = stats.timings.measure("blobs", || extract_blobs(mask))?;
        stats.blobs = blobs.len();
        let blobs = filter_blobs_by_size(blobs, mask.width(), mask.height(), &filter);
        stats.size_filtered = blobs.len();

        let hulls = stats.timings.measure("hulls", || build_hulls(blobs))?;
        stats.hulls = hulls.len();

        let (polygons, full_page) = stats.timings.measure("filter", || {
            let polygons = filter_contained(hulls);
            let full_page = is_full_page(gray, &polygons, &self.full_page);
            (polygons, full_page)
        });
        stats.cells = polygons.len();

        stats.timings.total_ms = elapsed_ms(total);
        log::debug!(
            "segmentation: {} blobs, {} sized, {} cells, full_page={}",
            stats.blobs,
            stats.size_filtered,
            stats.cells,
            full_page
        );
        Ok(ExtractionResult {
            polygons,
            full_page,
            stats,
        })
    }
}
