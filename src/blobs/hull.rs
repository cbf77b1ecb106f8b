use super::blob::Blob;
use crate::error::{PanelError, Result};
use crate::geometry::Polygon;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Freeze a blob into its convex outline, anchored at the pixel centroid.
pub fn build_hull(blob: &Blob) -> Result<Polygon> {
    if blob.is_empty() {
        return Err(PanelError::EmptyInput("convex hull of an empty blob"));
    }
    Ok(Polygon::new(
        blob.bounding_box(),
        blob.convex_hull().to_vec(),
        blob.center_of_gravity(),
    ))
}

/// Hulls of finalized blobs, in input order. Independent per blob.
pub fn build_hulls(blobs: Vec<Blob>) -> Result<Vec<Polygon>> {
    #[cfg(feature = "parallel")]
    {
        blobs.into_par_iter().map(|blob| build_hull(&blob)).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        blobs.iter().map(build_hull).collect()
    }
}
