#![doc = include_str!("../README.md")]

// Core pipeline
pub mod analyzer;
pub mod binarize;
pub mod blobs;
pub mod cells;
pub mod reading;
pub mod views;

// Supporting types
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod geometry;
pub mod image;

// --- High-level re-exports -------------------------------------------------

pub use crate::analyzer::{Page, PageAnalyzer, PageParams};
pub use crate::diagnostics::{PageReport, PipelineTrace};
pub use crate::error::{PanelError, Result};
pub use crate::geometry::{Polygon, ReadingDirection, Rectangle, Shape};
pub use crate::reading::get_reading_order;
pub use crate::views::{compute_view, PageViewer, ViewerOptions};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use manga_panels::prelude::*;
///
/// # fn main() -> manga_panels::Result<()> {
/// let (w, h) = (800usize, 1200usize);
/// let gray = vec![255u8; w * h];
/// let img = ImageU8::try_new(w, h, w, &gray)?;
///
/// let page = PageAnalyzer::default().analyze(&img, ReadingDirection::DownLeft)?;
/// let views = page.compute_view(&PageViewer::Strip { max_width: 600, max_height: -1 })?;
/// println!("cells={} views={}", page.cells.len(), views.len());
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::ImageU8;
    pub use crate::{Page, PageAnalyzer, PageParams, PageViewer, ReadingDirection, Shape};
}
