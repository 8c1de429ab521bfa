use std::fmt::Write;

use log::{debug, error, info};
use thiserror::Error;

use super::format::PgmData;
use crate::constants::MAGIC_NUMBER;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum EncodingError {
    #[error("Pixel data holds {found} values, header needs {expected}")]
    DataLengthMismatch { expected: usize, found: usize },
}

/// Serializes `pgm` as plain-text gray map, one text line per image row.
pub fn encode(pgm: &PgmData) -> Result<String, EncodingError> {
    info!("Starting encoding");

    let expected = pgm.pixel_count();
    if pgm.data.len() != expected {
        error!(
            "Pixel data length {} does not match {}x{}",
            pgm.data.len(),
            pgm.width,
            pgm.height
        );
        return Err(EncodingError::DataLengthMismatch {
            expected,
            found: pgm.data.len(),
        });
    }

    // Header: magic, width height, max value
    let mut text = format!(
        "{}\n{} {}\n{}\n",
        MAGIC_NUMBER, pgm.width, pgm.height, pgm.max_val
    );
    debug!(
        "Header written: width={} height={} max_val={}",
        pgm.width, pgm.height, pgm.max_val
    );

    if pgm.width > 0 {
        for row in pgm.data.chunks(pgm.width) {
            let mut values = row.iter();
            if let Some(first) = values.next() {
                // Writing into a String cannot fail
                let _ = write!(text, "{}", first);
            }
            for value in values {
                let _ = write!(text, " {}", value);
            }
            text.push('\n');
        }
    }

    info!("Encoding completed: {} bytes", text.len());
    Ok(text)
}
