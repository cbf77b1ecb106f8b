//! Viewport composition: turning ordered cells into a short sequence of
//! display rectangles that respect a maximum view size.
//!
//! Viewers run in reading space (cells already mapped by the page's reading
//! transform) and return rectangles in that same space.

mod merge;
mod strip;

pub use merge::{merge_cells_iterative, Merges, OverlapRule, SizeCap};
pub use strip::{balance, group_unions, split_greedy};

use crate::error::{PanelError, Result};
use crate::geometry::{ReadingTransform, Rectangle, Shape, Size};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewerKind {
    /// The whole page at once.
    FullPage,
    /// Cells one at a time, merging boxes that mostly overlap.
    #[default]
    Cells,
    /// One row of cells at a time.
    Strip,
}

/// Viewer selection as it appears in configuration files. Limits of `-1`
/// mean unbounded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerOptions {
    pub kind: ViewerKind,
    pub max_width: i32,
    pub max_height: i32,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            kind: ViewerKind::Cells,
            max_width: -1,
            max_height: -1,
        }
    }
}

/// How a page is cut into views.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageViewer {
    FullPage,
    Cells { max_width: i32, max_height: i32 },
    Strip { max_width: i32, max_height: i32 },
}

impl From<ViewerOptions> for PageViewer {
    fn from(opts: ViewerOptions) -> Self {
        match opts.kind {
            ViewerKind::FullPage => PageViewer::FullPage,
            ViewerKind::Cells => PageViewer::Cells {
                max_width: opts.max_width,
                max_height: opts.max_height,
            },
            ViewerKind::Strip => PageViewer::Strip {
                max_width: opts.max_width,
                max_height: opts.max_height,
            },
        }
    }
}

impl PageViewer {
    /// Views over `cells` (in reading order and reading space).
    ///
    /// `transform` is the reading transform the cells went through; the Cells
    /// viewer uses it to orient its size cap. Only the full-page viewer fails,
    /// and only on an empty cell list.
    pub fn compute_view<S: Shape>(
        &self,
        cells: &[S],
        transform: &ReadingTransform,
    ) -> Result<Vec<Rectangle>> {
        let boxes: Vec<Rectangle> = cells.iter().map(|c| c.bounding_box()).collect();
        let views = match *self {
            PageViewer::FullPage => vec![full_page_view(&boxes)?],
            PageViewer::Cells {
                max_width,
                max_height,
            } => cells_view(&boxes, max_width, max_height, transform),
            PageViewer::Strip {
                max_width,
                max_height,
            } => strip_view(&boxes, max_width, max_height),
        };
        log::debug!("{:?} produced {} views from {} cells", self, views.len(), cells.len());
        Ok(views)
    }
}

fn full_page_view(boxes: &[Rectangle]) -> Result<Rectangle> {
    let (first, rest) = boxes
        .split_first()
        .ok_or(PanelError::EmptyInput("full page view of zero cells"))?;
    Ok(rest.iter().fold(*first, |acc, b| acc.union(b)))
}

fn cells_view(
    boxes: &[Rectangle],
    max_width: i32,
    max_height: i32,
    transform: &ReadingTransform,
) -> Vec<Rectangle> {
    let cap = SizeCap::from_limits(max_width, max_height).transformed(transform);
    merge_cells_iterative(boxes, OverlapRule::Cells, &cap)
        .into_iter()
        .map(|m| m.rect)
        .collect()
}

/// Rows of cells; rows wider than `max_width` are cut at cell boundaries into
/// balanced sub-views.
fn strip_view(boxes: &[Rectangle], max_width: i32, max_height: i32) -> Vec<Rectangle> {
    let strips = merge_cells_iterative(boxes, OverlapRule::Strip, &SizeCap::UNBOUNDED);
    let mut views = Vec::with_capacity(strips.len());
    for strip in strips {
        if max_width < 0 || strip.rect.width < max_width {
            views.push(strip.rect);
            continue;
        }
        let cells: Vec<Rectangle> = merge_cells_iterative(
            &strip.contributors,
            OverlapRule::Cells,
            &SizeCap::from_limits(max_width, max_height),
        )
        .into_iter()
        .map(|m| m.rect)
        .collect();
        let ends = balance(split_greedy(&cells, max_width), &cells, max_width);
        views.extend(group_unions(&cells, &ends));
    }
    views
}

/// Cells viewer over `polygons` with a size cap given in reading space.
pub fn compute_view<S: Shape>(
    polygons: &[S],
    max_width: i32,
    max_height: i32,
    transform: &ReadingTransform,
) -> Vec<Rectangle> {
    let boxes: Vec<Rectangle> = polygons.iter().map(|p| p.bounding_box()).collect();
    cells_view(&boxes, max_width, max_height, transform)
}

/// A width/height limit mapped through `transform`, as magnitudes.
pub fn transform_size(width: i32, height: i32, transform: &ReadingTransform) -> Size {
    transform.transform_size(Size::new(width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Polygon;

    fn ltrb(l: i32, t: i32, r: i32, b: i32) -> Polygon {
        Polygon::rectangle(l, t, r - l, b - t)
    }

    #[test]
    fn full_page_is_the_union_and_rejects_empty_input() {
        let cells = [ltrb(10, 10, 50, 50), ltrb(100, 200, 150, 260)];
        let views = PageViewer::FullPage
            .compute_view(&cells, &ReadingTransform::identity())
            .unwrap();
        assert_eq!(views, vec![Rectangle::from_ltrb(10, 10, 150, 260)]);

        let none: [Polygon; 0] = [];
        assert!(matches!(
            PageViewer::FullPage.compute_view(&none, &ReadingTransform::identity()),
            Err(PanelError::EmptyInput(_))
        ));
    }

    #[test]
    fn unbounded_strips_are_never_split() {
        let cells = [ltrb(0, 0, 400, 100), ltrb(420, 0, 800, 100)];
        let views = PageViewer::Strip {
            max_width: -1,
            max_height: -1,
        }
        .compute_view(&cells, &ReadingTransform::identity())
        .unwrap();
        assert_eq!(views, vec![Rectangle::from_ltrb(0, 0, 800, 100)]);
    }

    #[test]
    fn wide_strip_is_split_into_balanced_views() {
        let cells: Vec<Polygon> = (0..4).map(|i| ltrb(i * 110, 0, i * 110 + 100, 100)).collect();
        let views = PageViewer::Strip {
            max_width: 400,
            max_height: -1,
        }
        .compute_view(&cells, &ReadingTransform::identity())
        .unwrap();
        assert_eq!(
            views,
            vec![
                Rectangle::from_ltrb(0, 0, 210, 100),
                Rectangle::from_ltrb(220, 0, 430, 100)
            ]
        );
    }

    #[test]
    fn viewer_options_deserialize_with_defaults() {
        let opts: ViewerOptions =
            serde_json::from_str(r#"{"kind":"strip","max_width":900}"#).unwrap();
        assert_eq!(
            PageViewer::from(opts),
            PageViewer::Strip {
                max_width: 900,
                max_height: -1
            }
        );
        let opts: ViewerOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts, ViewerOptions::default());
    }

    #[test]
    fn transform_size_swaps_for_columns() {
        let t = ReadingTransform::for_direction(crate::geometry::ReadingDirection::RightDown);
        assert_eq!(transform_size(640, 480, &t), Size::new(480, 640));
    }
}
