use crate::error::Result;
use crate::geometry::{Polygon, ReadingDirection, ReadingTransform, Rectangle, TransformedPolygon};
use crate::views::PageViewer;
use serde::Serialize;

/// An analyzed page: its cells in reading order, in page coordinates.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub width: usize,
    pub height: usize,
    pub direction: ReadingDirection,
    /// Set when the page is shown whole; `cells` then holds one page-sized rectangle.
    pub full_page: bool,
    pub cells: Vec<Polygon>,
}

impl Page {
    pub fn transform(&self) -> ReadingTransform {
        ReadingTransform::for_direction(self.direction)
    }

    /// Cells mapped into reading space, borrowing the page's polygons.
    pub fn transformed_cells(&self) -> Vec<TransformedPolygon<'_>> {
        let t = self.transform();
        self.cells
            .iter()
            .map(|c| TransformedPolygon::new(c, t))
            .collect()
    }

    /// Views for `viewer`, mapped back to page coordinates.
    pub fn compute_view(&self, viewer: &PageViewer) -> Result<Vec<Rectangle>> {
        let t = self.transform();
        let views = viewer.compute_view(&self.transformed_cells(), &t)?;
        let back = t.inverse();
        Ok(views.iter().map(|r| back.transform_rect(r)).collect())
    }
}
