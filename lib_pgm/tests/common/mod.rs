#![allow(dead_code)]

use lib_pgm::Image;

pub const ROWS: usize = 203;
pub const COLS: usize = 305;
pub const BINS: usize = 3;
pub const LINE_STEP: usize = 13;

pub const SMALL_PGM: &str = "P2
# 4 wide, 2 high
4 2
15
0 3 7 15
15 7 3 0
";

/// 512x512 diagonal ramp covering the full 0..=255 range.
pub fn gradient() -> Image {
    let mut image = Image::with_size(512, 512);
    for r in 0..512 {
        for c in 0..512 {
            *image.at_mut(r, c).unwrap() = ((r + c) / 4) as i32;
        }
    }
    image
}

/// Black image with a white line every `LINE_STEP` rows.
pub fn lines() -> Image {
    let mut image = Image::with_size(ROWS, COLS);
    for r in (0..ROWS).step_by(LINE_STEP) {
        for c in 0..COLS {
            *image.at_mut(r, c).unwrap() = 255;
        }
    }
    image
}
