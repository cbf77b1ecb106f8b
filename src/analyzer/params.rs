use crate::cells::{FullPageOptions, SegmentationOptions};
use serde::{Deserialize, Serialize};

/// Parameters of the page pipeline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageParams {
    pub segmentation: SegmentationOptions,
    pub full_page: FullPageOptions,
}
