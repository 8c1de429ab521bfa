use log::{debug, warn};

use super::{Image, Pixel};

/// Dimensions of `rows` x `cols` scaled by `scale`, if the enlarged buffer
/// can still be allocated.
fn scaled_size(rows: usize, cols: usize, scale: usize) -> Option<(usize, usize)> {
    let rows = rows.checked_mul(scale)?;
    let cols = cols.checked_mul(scale)?;
    let bytes = rows
        .checked_mul(cols)?
        .checked_mul(std::mem::size_of::<Pixel>())?;
    (bytes <= isize::MAX as usize).then_some((rows, cols))
}

impl Image {
    /// Shrinks the image by keeping every `scale`-th pixel in both
    /// directions. No averaging is done.
    ///
    /// The new size is `rows / scale` by `cols / scale`. A `scale` of zero,
    /// or one larger than a dimension, leaves an image with no pixels.
    pub fn downscale(&mut self, scale: usize) {
        if scale == 0 {
            warn!("Downscale by 0 requested, emptying {}x{} image", self.rows, self.cols);
            self.replace_pixels(0, 0, Vec::new());
            return;
        }

        let src_cols = self.cols;
        let rows = self.rows / scale;
        let cols = self.cols / scale;

        let mut scaled: Vec<Pixel> = vec![0; rows * cols];
        for r in 0..rows {
            for c in 0..cols {
                scaled[r * cols + c] = self.pixels[(r * src_cols + c) * scale];
            }
        }

        debug!(
            "Downscaled {}x{} by {} to {}x{}",
            self.rows, self.cols, scale, rows, cols
        );
        self.replace_pixels(rows, cols, scaled);
    }

    /// Enlarges the image by copying every pixel into a `scale` x `scale`
    /// block. A `scale` of zero leaves an image with no pixels; a `scale`
    /// whose result cannot be addressed leaves the image unchanged.
    pub fn upscale(&mut self, scale: usize) {
        if scale == 0 {
            warn!("Upscale by 0 requested, emptying {}x{} image", self.rows, self.cols);
            self.replace_pixels(0, 0, Vec::new());
            return;
        }

        let Some((rows, cols)) = scaled_size(self.rows, self.cols, scale) else {
            warn!(
                "Upscale of {}x{} by {} overflows, keeping image",
                self.rows, self.cols, scale
            );
            return;
        };

        let mut scaled: Vec<Pixel> = vec![0; rows * cols];
        for r in 0..self.rows {
            for c in 0..self.cols {
                let value = self.pixels[r * self.cols + c];
                for block_row in 0..scale {
                    let start = (r * scale + block_row) * cols + c * scale;
                    scaled[start..start + scale].fill(value);
                }
            }
        }

        debug!(
            "Upscaled {}x{} by {} to {}x{}",
            self.rows, self.cols, scale, rows, cols
        );
        self.replace_pixels(rows, cols, scaled);
    }

    fn replace_pixels(&mut self, rows: usize, cols: usize, pixels: Vec<Pixel>) {
        self.rows = rows;
        self.cols = cols;
        self.pixels = pixels;
    }
}
