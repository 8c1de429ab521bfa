pub mod histogram;
pub mod io;
pub mod scale;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::DEFAULT_MAX_VAL;
use crate::pgm::PgmData;

/// Intensity of a single pixel.
pub type Pixel = i32;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ImageError {
    #[error("pixel ({row}, {col}) is out of range for a {rows}x{cols} image")]
    OutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Grayscale image stored as a row-major pixel buffer.
///
/// `pixels[row * cols + col]` holds the intensity at (`row`, `col`).
/// `max_val` describes the expected intensity range; it is not enforced on
/// writes through [`Image::at_mut`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PgmData", into = "PgmData")]
pub struct Image {
    rows: usize,
    cols: usize,
    max_val: Pixel,
    pixels: Vec<Pixel>,
}

impl Default for Image {
    fn default() -> Self {
        Self::new()
    }
}

impl Image {
    /// Creates an image with no pixels.
    pub fn new() -> Self {
        Self {
            rows: 0,
            cols: 0,
            max_val: DEFAULT_MAX_VAL,
            pixels: Vec::new(),
        }
    }

    /// Creates a zero-filled `rows` x `cols` image.
    pub fn with_size(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            max_val: DEFAULT_MAX_VAL,
            pixels: vec![0; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn max_val(&self) -> Pixel {
        self.max_val
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, ImageError> {
        if row >= self.rows || col >= self.cols {
            return Err(ImageError::OutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }

    /// Returns the pixel at (`row`, `col`).
    pub fn at(&self, row: usize, col: usize) -> Result<Pixel, ImageError> {
        let index = self.index(row, col)?;
        Ok(self.pixels[index])
    }

    /// Returns a mutable reference to the pixel at (`row`, `col`).
    ///
    /// ```
    /// let mut image = lib_pgm::Image::with_size(2, 3);
    /// *image.at_mut(1, 2).unwrap() = 255;
    /// assert_eq!(image.at(1, 2), Ok(255));
    /// ```
    pub fn at_mut(&mut self, row: usize, col: usize) -> Result<&mut Pixel, ImageError> {
        let index = self.index(row, col)?;
        Ok(&mut self.pixels[index])
    }
}
