use super::timing::TimingBreakdown;
use crate::analyzer::Page;
use crate::cells::SegmentationStats;
use crate::geometry::{ReadingDirection, Rectangle};
use serde::Serialize;

/// Result of [`PageAnalyzer::analyze_with_diagnostics`](crate::PageAnalyzer).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageReport {
    pub page: Page,
    pub trace: PipelineTrace,
}

/// What each stage of the page pipeline saw and how long it took.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTrace {
    pub input: InputDescriptor,
    pub timings: TimingBreakdown,
    pub segmentation: SegmentationStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading: Option<ReadingStage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub views: Option<ViewStage>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub direction: ReadingDirection,
}

/// Reading-order graph statistics. Absent for full-page fallbacks.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingStage {
    pub edges: usize,
    pub simplified_edges: usize,
    /// Extraction index of each cell, in reading order.
    pub order: Vec<usize>,
    pub elapsed_ms: f64,
}

/// Views computed for the page, in page coordinates.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewStage {
    pub viewer: String,
    pub rects: Vec<Rectangle>,
    pub elapsed_ms: f64,
}
