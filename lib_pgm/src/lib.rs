pub mod constants;
pub mod image;
pub mod pgm;

use log::*;
use std::io::Write;

pub use crate::image::{Image, ImageError, Pixel};
pub use crate::pgm::{decode, encode, read_pgm, write_pgm, PgmData, PgmError};

/// Installs the crate logger on stderr.
///
/// Library records are shown down to `Debug`; `RUST_LOG` overrides the
/// defaults. A second call returns an error and leaves the first logger in
/// place.
pub fn init_logging() -> Result<(), SetLoggerError> {
    env_logger::Builder::new()
        .filter(Some("lib_pgm"), LevelFilter::Debug)
        .filter(Some("pgm_tool"), LevelFilter::Info)
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{}] {}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .try_init()
}
