//! Framebuffer captures and PNG output.

use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::error::CoreError;

const BYTES_PER_PIXEL: usize = 4;

/// Which image row the first row of a capture holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowOrder {
    /// Row 0 is the top of the image (wgpu texture readback).
    TopDown,
    /// Row 0 is the bottom of the image (GL-style framebuffer, fragment coordinates).
    BottomUp,
}

/// Tightly packed RGBA8 pixels as captured from a presenter.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    row_order: RowOrder,
    data: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(
        width: u32,
        height: u32,
        row_order: RowOrder,
        data: Vec<u8>,
    ) -> Result<Self, CoreError> {
        let expected = width as usize * height as usize * BYTES_PER_PIXEL;
        if data.len() != expected {
            return Err(CoreError::PixelBufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            row_order,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn row_order(&self) -> RowOrder {
        self.row_order
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// RGBA at `(x, y)` with the origin at the top-left of the image,
    /// whatever order the capture was stored in.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let offset = self.offset(x, self.storage_row(y));
        [
            self.data[offset],
            self.data[offset + 1],
            self.data[offset + 2],
            self.data[offset + 3],
        ]
    }

    /// Convert to a top-left origin image with every pixel fully opaque.
    pub fn to_image(&self) -> Result<RgbaImage, CoreError> {
        let row_bytes = self.width as usize * BYTES_PER_PIXEL;
        let mut out = Vec::with_capacity(self.data.len());

        for y in 0..self.height {
            let start = self.storage_row(y) as usize * row_bytes;
            out.extend_from_slice(&self.data[start..start + row_bytes]);
        }
        for alpha in out.iter_mut().skip(3).step_by(BYTES_PER_PIXEL) {
            *alpha = u8::MAX;
        }

        let expected = out.len();
        RgbaImage::from_raw(self.width, self.height, out).ok_or(CoreError::PixelBufferSize {
            expected,
            actual: self.data.len(),
        })
    }

    /// Encode as PNG at `path`, creating parent directories and replacing
    /// any existing file.
    pub fn save_png(&self, path: &Path) -> Result<(), CoreError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| CoreError::OutputDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        self.to_image()?.save_with_format(path, ImageFormat::Png)?;
        log::info!(
            "Wrote {}x{} image to {}",
            self.width,
            self.height,
            path.display()
        );
        Ok(())
    }

    fn storage_row(&self, image_row: u32) -> u32 {
        match self.row_order {
            RowOrder::TopDown => image_row,
            RowOrder::BottomUp => self.height - 1 - image_row,
        }
    }

    fn offset(&self, x: u32, storage_row: u32) -> usize {
        (storage_row as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL
    }
}
