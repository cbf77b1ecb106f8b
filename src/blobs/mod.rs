//! Connected foreground regions of a binary page mask.
//!
//! The extractor walks the mask one scanline at a time:
//!
//! - Each row is packed into half-open runs of foreground pixels.
//! - Runs are matched against the previous row with two cursors. A run that
//!   touches nothing above opens a new blob, a run under a single blob extends
//!   it, and a run bridging several blobs merges them first.
//! - Merges fold the smaller blob into the larger one and record the move in a
//!   union-find table, so ids already assigned to the previous row keep
//!   resolving to the live blob.
//!
//! Connectivity is 4-neighbour: runs on consecutive rows belong together only
//! when they share at least one column.
//!
//! Once extraction finishes, blobs are frozen into convex [`Polygon`]s whose
//! center of gravity is the pixel centroid. Hull building is independent per
//! blob and runs on rayon when the `parallel` feature is enabled.
//!
//! [`Polygon`]: crate::geometry::Polygon

mod blob;
mod extractor;
mod filter;
mod hull;
mod segment;

pub use blob::Blob;
pub use extractor::BlobExtractor;
pub use filter::{filter_blobs_by_size, BlobSizeFilter};
pub use hull::{build_hull, build_hulls};
pub use segment::{pack_row, Segment};

use crate::error::Result;
use crate::image::ImageView;

/// All maximal 4-connected foreground regions of `mask`.
pub fn extract_blobs<I>(mask: &I) -> Result<Vec<Blob>>
where
    I: ImageView<Pixel = bool>,
{
    BlobExtractor::new().extract(mask)
}
