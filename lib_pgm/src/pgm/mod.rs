pub mod decoder;
pub mod encoder;
pub mod format;

use std::fs;
use std::io;
use std::path::Path;

use log::{debug, info};
use thiserror::Error;

pub use decoder::{decode, DecodeError};
pub use encoder::{encode, EncodingError};
pub use format::PgmData;

#[derive(Error, Debug)]
pub enum PgmError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("PGM decode failed: {0}")]
    Decode(#[from] DecodeError),
    #[error("PGM encode failed: {0}")]
    Encode(#[from] EncodingError),
}

/// Reads and decodes the gray map stored at `path`.
pub fn read_pgm<P: AsRef<Path>>(path: P) -> Result<PgmData, PgmError> {
    let path = path.as_ref();
    debug!("Reading PGM file {}", path.display());
    let text = fs::read_to_string(path)?;
    let pgm = decode(&text)?;
    info!(
        "Read {}x{} PGM from {}",
        pgm.width,
        pgm.height,
        path.display()
    );
    Ok(pgm)
}

/// Encodes `pgm` and writes it to `path`, replacing any existing file.
pub fn write_pgm<P: AsRef<Path>>(pgm: &PgmData, path: P) -> Result<(), PgmError> {
    let path = path.as_ref();
    let text = encode(pgm)?;
    fs::write(path, text)?;
    info!(
        "Wrote {}x{} PGM to {}",
        pgm.width,
        pgm.height,
        path.display()
    );
    Ok(())
}
