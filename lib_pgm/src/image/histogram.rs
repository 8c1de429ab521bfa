use log::debug;

use super::{Image, ImageError};

impl Image {
    /// Computes the normalized intensity histogram over `bins` equal-width
    /// bins spanning `0..max_val`.
    ///
    /// Every value at or above `max_val` lands in the last bin. The result
    /// sums to 1.0 for a non-empty image and is all zeros for an empty one.
    ///
    /// # Errors
    /// - Returns `ImageError::InvalidArgument` if `bins` is zero
    pub fn compute_histogram(&self, bins: usize) -> Result<Vec<f32>, ImageError> {
        if bins == 0 {
            return Err(ImageError::InvalidArgument(
                "histogram needs at least one bin".to_string(),
            ));
        }

        let mut histogram = vec![0.0f32; bins];
        let div = self.max_val as f32 / bins as f32;

        for &pixel in &self.pixels {
            let location = if pixel >= self.max_val {
                bins - 1
            } else {
                // `as usize` saturates: negative and NaN quotients map to 0
                ((pixel as f32 / div).floor() as usize).min(bins - 1)
            };
            histogram[location] += 1.0;
        }

        if !self.pixels.is_empty() {
            let size = self.pixels.len() as f32;
            histogram.iter_mut().for_each(|n| *n /= size);
        }
        debug!("Histogram over {} bins: {:?}", bins, histogram);

        Ok(histogram)
    }
}
