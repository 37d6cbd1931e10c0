//! Image and pixel data model shared by every filter.

use ndarray::Array3;

/// Number of color channels per pixel (no alpha).
pub const CHANNELS: usize = 3;

/// A single RGB pixel. Channels are independent 8-bit values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pixel {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Pixel {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

/// A row-major grid of RGB pixels.
///
/// Storage is an `Array3<u8>` of shape `(height, width, 3)`, channels last.
/// Filters borrow the image mutably for a single pass, never resize it, and
/// never retain a reference afterward. Channels are `u8` by construction, so
/// the 0-255 range invariant holds for anything stored here.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    data: Array3<u8>,
}

impl Image {
    /// Create an all-black image of the given dimensions. 0x0 is valid.
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            data: Array3::zeros((height, width, CHANNELS)),
        }
    }

    pub fn height(&self) -> usize {
        self.data.dim().0
    }

    pub fn width(&self) -> usize {
        self.data.dim().1
    }

    /// Bounds-checked read.
    pub fn get(&self, row: usize, col: usize) -> Option<Pixel> {
        if row < self.height() && col < self.width() {
            Some(self.pixel(row, col))
        } else {
            None
        }
    }

    /// Read a pixel known to be in range.
    ///
    /// # Panics
    /// If `(row, col)` lies outside the grid.
    pub fn pixel(&self, row: usize, col: usize) -> Pixel {
        Pixel {
            red: self.data[[row, col, 0]],
            green: self.data[[row, col, 1]],
            blue: self.data[[row, col, 2]],
        }
    }

    /// Overwrite a pixel known to be in range.
    ///
    /// # Panics
    /// If `(row, col)` lies outside the grid.
    pub fn set(&mut self, row: usize, col: usize, px: Pixel) {
        self.data[[row, col, 0]] = px.red;
        self.data[[row, col, 1]] = px.green;
        self.data[[row, col, 2]] = px.blue;
    }

    /// Raw grid access for filters that index channels directly.
    pub(crate) fn data(&self) -> &Array3<u8> {
        &self.data
    }

    /// Replace the backing grid wholesale. Shapes must match; this is how the
    /// neighborhood filters commit their temporary buffer without ever
    /// overwriting a pixel mid-pass.
    pub(crate) fn replace(&mut self, data: Array3<u8>) {
        debug_assert_eq!(self.data.dim(), data.dim());
        self.data = data;
    }
}
