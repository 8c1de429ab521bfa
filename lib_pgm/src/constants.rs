/// Magic token of the plain-text gray map variant.
pub const MAGIC_NUMBER: &str = "P2";
pub const FILE_EXT: &str = "pgm";

/// Intensity ceiling given to images that were not loaded from a file.
pub const DEFAULT_MAX_VAL: i32 = 255;
/// Largest max value the PGM format allows.
pub const MAX_PGM_VALUE: i32 = 65535;
