use super::traits::ImageView;
use crate::error::{PanelError, Result};

/// Borrowed 8-bit grayscale page.
#[derive(Clone, Debug)]
pub struct ImageU8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // bytes between rows
    pub data: &'a [u8],
}

impl<'a> ImageU8<'a> {
    /// Wrap a raw buffer, rejecting layouts that are not single-channel 8-bit.
    pub fn try_new(w: usize, h: usize, stride: usize, data: &'a [u8]) -> Result<Self> {
        if stride < w {
            return Err(PanelError::Format(format!(
                "stride {stride} is smaller than width {w}"
            )));
        }
        let needed = if h == 0 { 0 } else { (h - 1) * stride + w };
        if data.len() < needed {
            return Err(PanelError::Format(format!(
                "buffer of {} bytes cannot hold a {w}x{h} single-channel image with stride {stride}",
                data.len()
            )));
        }
        Ok(Self { w, h, stride, data })
    }

    /// Sum of all pixel intensities.
    pub fn total_intensity(&self) -> u64 {
        self.rows()
            .map(|row| row.iter().map(|&v| v as u64).sum::<u64>())
            .sum()
    }
}

impl<'a> ImageView for ImageU8<'a> {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}
