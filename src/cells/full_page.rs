use super::options::FullPageOptions;
use crate::geometry::Shape;
use crate::image::{ImageU8, ImageView};

/// Whether the page should be shown whole instead of cell by cell.
///
/// Holds for nearly blank or nearly black pages (judged on total gray
/// intensity) and when the cells cover too little of the page.
pub fn is_full_page<S: Shape>(gray: &ImageU8<'_>, cells: &[S], opts: &FullPageOptions) -> bool {
    let area = (gray.width() * gray.height()) as f64;
    let total = gray.total_intensity() as f64;

    let white = total > area * 255.0 * opts.white_ratio;
    let black = total <= area * 255.0 * (1.0 - opts.black_ratio);
    let covered: i64 = cells.iter().map(|c| c.area()).sum();
    let sparse = (covered as f64) < opts.min_coverage * area;

    if white || black || sparse {
        log::debug!(
            "full page fallback: white={white} black={black} coverage={:.3}",
            if area > 0.0 { covered as f64 / area } else { 0.0 }
        );
    }
    white || black || sparse
}
