//! Disk helpers for the page tool.
//!
//! - `load_grayscale_image`: decode any supported format into an owned 8-bit gray buffer.
//! - `load_mask_image`: decode an 8-bit gray image as a `BinaryMask`.
//! - `save_mask`: write a mask as a black/white PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{BinaryMask, ImageU8, ImageView};
use crate::error::{PanelError, Result};
use image::{GrayImage, ImageBuffer, Luma};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Owned 8-bit grayscale page with a borrowed view conversion.
#[derive(Clone, Debug)]
pub struct GrayPage {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl GrayPage {
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        if data.len() != width * height {
            return Err(PanelError::Format(format!(
                "gray buffer holds {} bytes, expected {width}x{height}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn as_view(&self) -> ImageU8<'_> {
        ImageU8 {
            w: self.width,
            h: self.height,
            stride: self.width,
            data: &self.data,
        }
    }
}

/// Load an image from disk and convert it to 8-bit grayscale.
pub fn load_grayscale_image(path: &Path) -> Result<GrayPage> {
    let img = image::open(path)?.into_luma8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    GrayPage::new(width, height, img.into_raw())
}

/// Load a precomputed foreground mask; the file must already be 8-bit gray.
pub fn load_mask_image(path: &Path) -> Result<BinaryMask> {
    let img = image::open(path)?;
    BinaryMask::from_image(&img)
}

pub fn save_mask(mask: &BinaryMask, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let image: GrayImage = ImageBuffer::<Luma<u8>, Vec<u8>>::from_raw(
        mask.width() as u32,
        mask.height() as u32,
        mask.to_luma_bytes(),
    )
    .ok_or_else(|| PanelError::Format("mask dimensions overflow image buffer".into()))?;
    image.save(path)?;
    Ok(())
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value).map_err(|e| {
        PanelError::Format(format!("cannot serialize JSON for {}: {e}", path.display()))
    })?;
    fs::write(path, json).map_err(|e| PanelError::io(path, e))
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| PanelError::io(parent, e))?;
        }
    }
    Ok(())
}
