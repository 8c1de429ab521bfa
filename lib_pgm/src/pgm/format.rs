use serde::{Deserialize, Serialize};

use crate::image::Pixel;

/// Raw contents of a PGM file, named after the header order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PgmData {
    pub width: usize,
    pub height: usize,
    pub max_val: Pixel,
    pub data: Vec<Pixel>,
}

impl PgmData {
    pub fn new(width: usize, height: usize, max_val: Pixel, data: Vec<Pixel>) -> Self {
        Self {
            width,
            height,
            max_val,
            data,
        }
    }

    /// Number of values the header promises.
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }
}
