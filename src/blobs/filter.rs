use super::blob::Blob;
use serde::{Deserialize, Serialize};

/// Page-relative size window for candidate panels.
///
/// A blob survives when both sides exceed `min_fraction` of the page and at
/// least one side stays under `max_fraction` (a blob spanning the page in
/// both directions is background or a frame).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlobSizeFilter {
    pub min_fraction: f64,
    pub max_fraction: f64,
}

impl Default for BlobSizeFilter {
    fn default() -> Self {
        Self {
            min_fraction: 0.05,
            max_fraction: 0.95,
        }
    }
}

impl BlobSizeFilter {
    pub fn accepts(&self, blob: &Blob, page_width: usize, page_height: usize) -> bool {
        let bbox = blob.bounding_box();
        let (w, h) = (bbox.width as f64, bbox.height as f64);
        let (pw, ph) = (page_width as f64, page_height as f64);
        w > pw * self.min_fraction
            && h > ph * self.min_fraction
            && (w < pw * self.max_fraction || h < ph * self.max_fraction)
    }
}

pub fn filter_blobs_by_size(
    blobs: Vec<Blob>,
    page_width: usize,
    page_height: usize,
    filter: &BlobSizeFilter,
) -> Vec<Blob> {
    let before = blobs.len();
    let kept: Vec<Blob> = blobs
        .into_iter()
        .filter(|b| filter.accepts(b, page_width, page_height))
        .collect();
    log::debug!("size filter kept {}/{} blobs", kept.len(), before);
    kept
}
