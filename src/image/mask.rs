//! Foreground masks fed to the blob extractor.

use super::traits::{ImageView, ImageViewMut};
use crate::error::{PanelError, Result};
use image::DynamicImage;

/// Owned binary image; `true` marks foreground (ink or panel content).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryMask {
    w: usize,
    h: usize,
    data: Vec<bool>,
}

impl BinaryMask {
    /// All-background mask.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![false; w * h],
        }
    }

    pub fn from_vec(w: usize, h: usize, data: Vec<bool>) -> Result<Self> {
        if data.len() != w * h {
            return Err(PanelError::Format(format!(
                "mask buffer holds {} pixels, expected {}x{}",
                data.len(),
                w,
                h
            )));
        }
        Ok(Self { w, h, data })
    }

    pub fn from_fn(w: usize, h: usize, mut f: impl FnMut(usize, usize) -> bool) -> Self {
        let mut data = Vec::with_capacity(w * h);
        for y in 0..h {
            for x in 0..w {
                data.push(f(x, y));
            }
        }
        Self { w, h, data }
    }

    /// Interpret a decoded 8-bit gray image as a mask (non-zero is foreground).
    ///
    /// Colour or 16-bit images are rejected rather than converted.
    pub fn from_image(img: &DynamicImage) -> Result<Self> {
        match img {
            DynamicImage::ImageLuma8(gray) => {
                let w = gray.width() as usize;
                let h = gray.height() as usize;
                let data = gray.as_raw().iter().map(|&v| v != 0).collect();
                Ok(Self { w, h, data })
            }
            other => Err(PanelError::Format(format!(
                "expected an 8-bit single channel mask, got {:?}",
                other.color()
            ))),
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.data[y * self.w + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        self.data[y * self.w + x] = value;
    }

    pub fn count_foreground(&self) -> usize {
        self.count_where(|v| v)
    }

    /// Render as 0/255 bytes, foreground white.
    pub fn to_luma_bytes(&self) -> Vec<u8> {
        self.data.iter().map(|&v| if v { 255 } else { 0 }).collect()
    }
}

impl ImageView for BinaryMask {
    type Pixel = bool;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[bool] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }
}

impl ImageViewMut for BinaryMask {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [bool] {
        let start = y * self.w;
        &mut self.data[start..start + self.w]
    }
}
