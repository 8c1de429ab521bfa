use std::path::PathBuf;

use clap::Parser;
use lib_pgm::constants::FILE_EXT;

fn default_output() -> PathBuf {
    PathBuf::from("out").with_extension(FILE_EXT)
}

/// Prints the size and histogram of a plain-text PGM image, and optionally
/// writes a rescaled copy.
#[derive(Parser, Debug)]
#[command(name = "pgm-tool")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Input image file (ASCII PGM)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Number of histogram bins
    #[arg(default_value_t = 3, value_parser = clap::value_parser!(u64).range(1..))]
    pub bins: u64,

    /// Keep every N-th pixel in both directions
    #[arg(long, value_name = "N")]
    pub down: Option<usize>,

    /// Replicate every pixel into an N x N block
    #[arg(long, value_name = "N")]
    pub up: Option<usize>,

    /// Where to write the rescaled image
    #[arg(short, long, value_name = "OUTPUT", default_value_os_t = default_output())]
    pub out: PathBuf,
}

impl Args {
    /// Whether a rescaled copy should be written.
    pub fn rescales(&self) -> bool {
        self.down.is_some() || self.up.is_some()
    }
}
