//! Page cells: the size-filtered, non-nested convex outlines of a page, plus
//! the heuristic that decides when a page has no usable panel structure.

mod filter;
mod full_page;
mod options;
mod segmenter;

pub use filter::filter_contained;
pub use full_page::is_full_page;
pub use options::{FullPageOptions, SegmentationOptions};
pub use segmenter::{CellSegmenter, ExtractionResult, SegmentationStats};
