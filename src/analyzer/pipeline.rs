//! End-to-end page pipeline.
//!
//! Stages
//! - Binarize: global threshold, with light-on-dark pages detected from their
//!   borders.
//! - Segment: blob extraction, size filter, convex hulls, containment filter
//!   and the full-page check (`cells::CellSegmenter`).
//! - Order: cells are mapped into reading space for the page's direction and
//!   walked through the relation graph (`reading`).
//!
//! Views are computed afterwards on demand with [`Page::compute_view`].

use super::page::Page;
use super::params::PageParams;
use crate::binarize::Binarizer;
use crate::cells::{CellSegmenter, ExtractionResult};
use crate::diagnostics::{
    elapsed_ms, InputDescriptor, PageReport, PipelineTrace, ReadingStage, TimingBreakdown,
    ViewStage,
};
use crate::error::{PanelError, Result};
use crate::geometry::{Polygon, ReadingDirection, ReadingTransform, TransformedPolygon};
use crate::image::{BinaryMask, ImageU8, ImageView};
use crate::reading::{ReadingOrder, RelationGraph};
use crate::views::PageViewer;
use std::time::Instant;

/// Runs the page pipeline with a fixed set of parameters.
#[derive(Clone, Debug, Default)]
pub struct PageAnalyzer {
    params: PageParams,
}

struct OrderOutcome {
    cells: Vec<Polygon>,
    stage: Option<ReadingStage>,
}

impl PageAnalyzer {
    pub fn new(params: PageParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &PageParams {
        &self.params
    }

    /// Threshold `gray` the way [`analyze`](Self::analyze) does.
    pub fn binarize(&self, gray: &ImageU8<'_>) -> BinaryMask {
        self.segmenter().binarizer().binarize(gray)
    }

    fn segmenter(&self) -> CellSegmenter {
        CellSegmenter::new(self.params.segmentation, self.params.full_page)
    }

    /// Segment and order the cells of a gray page.
    pub fn analyze(&self, gray: &ImageU8<'_>, direction: ReadingDirection) -> Result<Page> {
        Ok(self.analyze_with_diagnostics(gray, direction)?.page)
    }

    /// Like [`analyze`](Self::analyze) but starting from a precomputed mask.
    /// `gray` only feeds the full-page check.
    pub fn analyze_mask(
        &self,
        mask: &BinaryMask,
        gray: &ImageU8<'_>,
        direction: ReadingDirection,
    ) -> Result<Page> {
        Ok(self
            .analyze_mask_with_diagnostics(mask, gray, direction)?
            .page)
    }

    pub fn analyze_mask_with_diagnostics(
        &self,
        mask: &BinaryMask,
        gray: &ImageU8<'_>,
        direction: ReadingDirection,
    ) -> Result<PageReport> {
        if mask.dimensions() != gray.dimensions() {
            return Err(PanelError::Format(format!(
                "mask is {}x{} but the page is {}x{}",
                mask.width(),
                mask.height(),
                gray.width(),
                gray.height()
            )));
        }
        let start = Instant::now();
        let extraction = self.segmenter().extract_from_mask(mask, gray)?;
        Ok(self.finish(extraction, gray, direction, start))
    }

    /// Run the pipeline and keep a trace of every stage.
    pub fn analyze_with_diagnostics(
        &self,
        gray: &ImageU8<'_>,
        direction: ReadingDirection,
    ) -> Result<PageReport> {
        let start = Instant::now();
        let extraction = self.segmenter().extract(gray)?;
        Ok(self.finish(extraction, gray, direction, start))
    }

    fn finish(
        &self,
        extraction: ExtractionResult,
        gray: &ImageU8<'_>,
        direction: ReadingDirection,
        start: Instant,
    ) -> PageReport {
        let (width, height) = (gray.width(), gray.height());
        let ExtractionResult {
            polygons,
            full_page,
            stats,
        } = extraction;

        let OrderOutcome { cells, stage } = if full_page {
            log::warn!("no usable cells on {width}x{height} page, showing it whole");
            OrderOutcome {
                cells: vec![Polygon::rectangle(0, 0, width as i32, height as i32)],
                stage: None,
            }
        } else {
            order_cells(polygons, ReadingTransform::for_direction(direction))
        };

        let mut timings = TimingBreakdown::default();
        timings.nest("segmentation", &stats.timings);
        if let Some(reading) = &stage {
            timings.record("reading", reading.elapsed_ms);
        }
        timings.total_ms = elapsed_ms(start);

        PageReport {
            page: Page {
                width,
                height,
                direction,
                full_page,
                cells,
            },
            trace: PipelineTrace {
                input: InputDescriptor {
                    width,
                    height,
                    direction,
                },
                timings,
                segmentation: stats,
                reading: stage,
                views: None,
            },
        }
    }
}

/// Reorder `polygons` by reading order under `transform`.
fn order_cells(polygons: Vec<Polygon>, transform: ReadingTransform) -> OrderOutcome {
    let start = Instant::now();
    let (order, edges, simplified_edges) = {
        let transformed: Vec<TransformedPolygon<'_>> = polygons
            .iter()
            .map(|p| TransformedPolygon::new(p, transform))
            .collect();
        let mut graph = RelationGraph::build(&transformed);
        let edges = graph.edge_count();
        graph.simplify();
        let simplified_edges = graph.edge_count();
        let mut walk = ReadingOrder::new(&transformed, graph);
        let order: Vec<usize> = std::iter::from_fn(|| walk.next_index()).collect();
        (order, edges, simplified_edges)
    };

    let mut slots: Vec<Option<Polygon>> = polygons.into_iter().map(Some).collect();
    let cells: Vec<Polygon> = order.iter().filter_map(|&i| slots[i].take()).collect();
    log::debug!(
        "reading order over {} cells ({} -> {} edges)",
        cells.len(),
        edges,
        simplified_edges
    );
    OrderOutcome {
        cells,
        stage: Some(ReadingStage {
            edges,
            simplified_edges,
            order,
            elapsed_ms: elapsed_ms(start),
        }),
    }
}

impl PageReport {
    /// Compute views for `viewer` and record them in the trace.
    pub fn with_views(mut self, viewer: &PageViewer) -> Result<Self> {
        let start = Instant::now();
        let rects = self.page.compute_view(viewer)?;
        let elapsed = elapsed_ms(start);
        self.trace.timings.record("views", elapsed);
        self.trace.timings.total_ms += elapsed;
        self.trace.views = Some(ViewStage {
            viewer: format!("{viewer:?}"),
            rects,
            elapsed_ms: elapsed,
        });
        Ok(self)
    }
}
