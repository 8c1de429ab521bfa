mod common;

use common::{gradient, lines, BINS, COLS, ROWS, SMALL_PGM};
use lib_pgm::pgm::DecodeError;
use lib_pgm::{Image, PgmError};

#[test]
fn test_fill_empty_image() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gradient.ascii.pgm");
    gradient().write_to_pgm(&path);

    let mut image = Image::new();
    assert!(image.fill_from_pgm(&path));
    assert_eq!(image.rows(), 512);
    assert_eq!(image.cols(), 512);

    // A missing file leaves the loaded image alone
    let loaded = image.clone();
    assert!(!image.fill_from_pgm(dir.path().join("notFound")));
    assert_eq!(image, loaded);
}

#[test]
fn test_fill_specified_image() {
    let dir = tempfile::tempdir().unwrap();
    let empty_path = dir.path().join("empty.ascii.pgm");
    let gradient_path = dir.path().join("gradient.ascii.pgm");
    gradient().write_to_pgm(&gradient_path);

    let mut image = Image::with_size(ROWS, COLS);
    image.write_to_pgm(&empty_path);

    assert!(image.fill_from_pgm(&gradient_path));
    assert_eq!((image.rows(), image.cols()), (512, 512));

    assert!(!image.fill_from_pgm("notFound"));
    assert_eq!((image.rows(), image.cols()), (512, 512));

    // Reading the smaller image back
    assert!(image.fill_from_pgm(&empty_path));
    assert_eq!((image.rows(), image.cols()), (ROWS, COLS));
    assert!(image.pixels().iter().all(|&p| p == 0));
}

#[test]
fn test_round_trip_keeps_orientation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lines.ascii.pgm");
    let original = lines();
    original.save_pgm(&path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with(&format!("P2\n{} {}\n255\n", COLS, ROWS)));
    assert_eq!(text.lines().count(), 3 + ROWS);

    let read = Image::load_pgm(&path).unwrap();
    assert_eq!(read, original);
    assert_eq!(read.at(13, 0), Ok(255));
    assert_eq!(read.at(14, 0), Ok(0));
}

#[test]
fn test_lines_histogram_is_mixed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("line.ascii.pgm");

    let mut image = Image::with_size(ROWS, COLS);
    *image.at_mut(13, 0).unwrap() = 255;
    image.write_to_pgm(&path);

    let mut read = Image::new();
    assert!(read.fill_from_pgm(&path));
    let histogram = read.compute_histogram(BINS).unwrap();
    assert_eq!(histogram.len(), BINS);
    assert!(histogram[0] > 0.0 && histogram[0] < 1.0);
    assert!(histogram[BINS - 1] > 0.0 && histogram[BINS - 1] < 1.0);
}

#[test]
fn test_load_handwritten_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("small.pgm");
    std::fs::write(&path, SMALL_PGM).unwrap();

    let image = Image::load_pgm(&path).unwrap();
    assert_eq!((image.rows(), image.cols()), (2, 4));
    assert_eq!(image.max_val(), 15);
    assert_eq!(image.at(0, 3), Ok(15));
    assert_eq!(image.at(1, 1), Ok(7));
    assert_eq!(image.compute_histogram(3).unwrap(), vec![0.5, 0.25, 0.25]);
}

#[test]
fn test_load_reports_decode_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("binary.pgm");
    std::fs::write(&path, "P5\n1 1\n255\n0\n").unwrap();

    let result = Image::load_pgm(&path);
    assert!(matches!(
        result,
        Err(PgmError::Decode(DecodeError::InvalidMagic))
    ));
}

#[test]
fn test_fill_rejects_oversized_header() {
    let dir = tempfile::tempdir().unwrap();
    let overflow_path = dir.path().join("overflow.pgm");
    std::fs::write(&overflow_path, format!("P2\n{0} {0}\n255\n", usize::MAX)).unwrap();
    let huge_path = dir.path().join("huge.pgm");
    std::fs::write(&huge_path, "P2\n50000 50000\n255\n0 0 0\n").unwrap();

    let mut image = lines();
    let before = image.clone();
    assert!(!image.fill_from_pgm(&overflow_path));
    assert!(!image.fill_from_pgm(&huge_path));
    assert_eq!(image, before);
    assert_eq!(image.pixels().len(), image.rows() * image.cols());

    assert!(matches!(
        Image::load_pgm(&overflow_path),
        Err(PgmError::Decode(DecodeError::TooLarge { .. }))
    ));
}
