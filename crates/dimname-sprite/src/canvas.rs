//! RGB raster used for the master sheet, glyphs and the growable name canvas.

use std::ops::RangeInclusive;

use crate::color::Rgb8;

/// Width added to the name canvas every time content would overflow it.
pub const GROWTH_INCREMENT: u32 = 80;

/// A 2D RGB pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    /// Pixel data (row-major).
    data: Vec<Rgb8>,
}

impl Canvas {
    /// Create a new canvas filled with a color.
    pub fn new(width: u32, height: u32, fill: Rgb8) -> Self {
        let size = (width * height) as usize;
        Self {
            width,
            height,
            data: vec![fill; size],
        }
    }

    /// Create a new canvas filled with the background color.
    pub fn new_background(width: u32, height: u32) -> Self {
        Self::new(width, height, Rgb8::BACKGROUND)
    }

    /// Build a canvas from packed 8-bit RGB bytes.
    ///
    /// Returns `None` if `bytes` is not exactly `width * height * 3` long.
    pub fn from_rgb8(width: u32, height: u32, bytes: &[u8]) -> Option<Self> {
        if bytes.len() != (width * height * 3) as usize {
            return None;
        }
        let data = bytes.chunks_exact(3).map(Rgb8::from_slice).collect();
        Some(Self {
            width,
            height,
            data,
        })
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get a pixel at the given coordinates.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Rgb8 {
        let idx = (y * self.width + x) as usize;
        self.data[idx]
    }

    /// Set a pixel at the given coordinates.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, color: Rgb8) {
        let idx = (y * self.width + x) as usize;
        self.data[idx] = color;
    }

    /// True if the pixel at `(x, y)` is foreground ink.
    #[inline]
    pub fn is_ink(&self, x: u32, y: u32) -> bool {
        self.get(x, y).is_ink()
    }

    /// True if any pixel of column `x` within `rows` is ink.
    ///
    /// Rows outside the canvas are ignored.
    pub fn column_has_ink(&self, x: u32, rows: RangeInclusive<u32>) -> bool {
        if x >= self.width {
            return false;
        }
        let bottom = (*rows.end()).min(self.height.saturating_sub(1));
        (*rows.start()..=bottom).any(|y| self.is_ink(x, y))
    }

    /// Copy a rectangular region into a new canvas.
    ///
    /// The region is clipped to the canvas bounds.
    pub fn crop(&self, x: u32, y: u32, width: u32, height: u32) -> Canvas {
        let width = width.min(self.width.saturating_sub(x));
        let height = height.min(self.height.saturating_sub(y));
        let mut out = Canvas::new_background(width, height);
        for py in 0..height {
            for px in 0..width {
                out.set(px, py, self.get(x + px, y + py));
            }
        }
        out
    }

    /// Paste every pixel of `src` with its top-left corner at `(x, y)`.
    ///
    /// Background pixels of `src` are copied too, so pasting erases whatever
    /// was underneath. Anything falling outside this canvas is clipped.
    pub fn paste(&mut self, src: &Canvas, x: u32, y: u32) {
        let cols = src.width.min(self.width.saturating_sub(x));
        let rows = src.height.min(self.height.saturating_sub(y));
        for py in 0..rows {
            for px in 0..cols {
                self.set(x + px, y + py, src.get(px, py));
            }
        }
    }

    /// Grow the canvas to the right in [`GROWTH_INCREMENT`] steps until
    /// `required_width` columns fit.
    ///
    /// New columns are background. Width never decreases. Returns the number
    /// of increments added.
    pub fn ensure_capacity(&mut self, required_width: u32) -> u32 {
        if required_width <= self.width {
            return 0;
        }
        let increments = (required_width - self.width).div_ceil(GROWTH_INCREMENT);
        let new_width = self.width + increments * GROWTH_INCREMENT;

        let old_width = self.width as usize;
        let added = (new_width - self.width) as usize;
        let mut grown = Vec::with_capacity((new_width * self.height) as usize);
        for y in 0..self.height as usize {
            grown.extend_from_slice(&self.data[y * old_width..(y + 1) * old_width]);
            grown.resize(grown.len() + added, Rgb8::BACKGROUND);
        }

        self.width = new_width;
        self.data = grown;
        increments
    }

    #[cfg(test)]
    pub(crate) fn non_background_pixels(&self) -> usize {
        self.data.iter().filter(|&&c| c != Rgb8::BACKGROUND).count()
    }

    /// Convert to packed 8-bit RGB bytes.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.data.len() * 3);
        for color in &self.data {
            bytes.extend_from_slice(&color.to_bytes());
        }
        bytes
    }
}
