//! Bridge between [`Image`] and the PGM codec.
//!
//! The codec names its fields after the header order, so a file's width
//! becomes the image's column count and its height the row count. Files
//! are written the same way round, width first.
use std::path::Path;

use log::{debug, error, info};

use super::{Image, ImageError};
use crate::pgm::{read_pgm, write_pgm, PgmData, PgmError};

impl Image {
    /// Takes over a decoded gray map whose data length matches its header.
    fn from_pgm_unchecked(pgm: PgmData) -> Self {
        Self {
            rows: pgm.height,
            cols: pgm.width,
            max_val: pgm.max_val,
            pixels: pgm.data,
        }
    }

    /// Copies the image into codec form.
    pub fn to_pgm(&self) -> PgmData {
        PgmData::new(self.cols, self.rows, self.max_val, self.pixels.clone())
    }

    /// Loads a new image from the PGM file at `path`.
    pub fn load_pgm<P: AsRef<Path>>(path: P) -> Result<Self, PgmError> {
        Ok(Self::from_pgm_unchecked(read_pgm(path)?))
    }

    /// Writes the image to `path` as a plain-text PGM file.
    pub fn save_pgm<P: AsRef<Path>>(&self, path: P) -> Result<(), PgmError> {
        write_pgm(&self.to_pgm(), path)
    }

    /// Replaces the image with the contents of the PGM file at `path`.
    ///
    /// Returns `false` and leaves the image untouched when the file cannot
    /// be read or decoded.
    pub fn fill_from_pgm<P: AsRef<Path>>(&mut self, path: P) -> bool {
        let path = path.as_ref();
        match Self::load_pgm(path) {
            Ok(image) => {
                debug!(
                    "Replacing {}x{} image with {}x{} from {}",
                    self.rows,
                    self.cols,
                    image.rows,
                    image.cols,
                    path.display()
                );
                *self = image;
                true
            }
            Err(e) => {
                error!("Failed to fill image from {}: {}", path.display(), e);
                false
            }
        }
    }

    /// Writes the image to `path`. Failures are logged, not reported.
    pub fn write_to_pgm<P: AsRef<Path>>(&self, path: P) {
        let path = path.as_ref();
        match self.save_pgm(path) {
            Ok(()) => info!("Saved {}x{} image to {}", self.rows, self.cols, path.display()),
            Err(e) => error!("Failed to write image to {}: {}", path.display(), e),
        }
    }
}

impl From<Image> for PgmData {
    fn from(image: Image) -> Self {
        PgmData::new(image.cols, image.rows, image.max_val, image.pixels)
    }
}

impl TryFrom<PgmData> for Image {
    type Error = ImageError;

    fn try_from(pgm: PgmData) -> Result<Self, Self::Error> {
        if pgm.data.len() != pgm.pixel_count() {
            return Err(ImageError::InvalidArgument(format!(
                "{}x{} gray map carries {} values",
                pgm.width,
                pgm.height,
                pgm.data.len()
            )));
        }
        Ok(Self::from_pgm_unchecked(pgm))
    }
}
