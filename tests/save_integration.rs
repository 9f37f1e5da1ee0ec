use std::fs;
use std::path::PathBuf;

use pnmkit::{EncoderConfig, Error, PixelColor, PnmEncoder, PnmFormat, RasterBuffer};

fn scratch_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("pnmkit-{}-{name}", std::process::id()));
    let _ = fs::remove_dir_all(&p);
    p
}

#[test]
fn grayscale_ascii_round_trip_through_file() {
    let dir = scratch_dir("roundtrip");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("gray.pgm");

    let mut img = RasterBuffer::<u8>::new(4, 2, PnmFormat::GrayscaleAscii);
    img.set_pixel(0, 0, &PixelColor::gray(10)).unwrap();
    img.set_pixel(3, 1, &PixelColor::gray(200)).unwrap();
    PnmEncoder::default().save(&img, &path).expect("save");

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("P2\n4 2\n255\n"));
    let rows: Vec<Vec<&str>> = text
        .lines()
        .skip(3)
        .map(|l| l.split_whitespace().collect())
        .collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0][0], "10");
    assert_eq!(rows[1][3], "200");
    assert!(text.ends_with("0 0 0 200 \n"));

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn saving_into_missing_directory_fails_without_writing() {
    let dir = scratch_dir("missing");
    let path = dir.join("nested").join("out.ppm");

    let img = RasterBuffer::<u8>::new(2, 2, PnmFormat::ColorBinary);
    let err = PnmEncoder::default().save(&img, &path).unwrap_err();
    assert!(matches!(err, Error::Io { .. }), "unexpected error: {err}");
    assert!(err.is_io());
    assert!(!path.exists());
    assert!(!dir.exists());
}

#[test]
fn create_parent_dirs_option_creates_missing_directories() {
    let dir = scratch_dir("create");
    let path = dir.join("a").join("b").join("out.pbm");

    let mut img = RasterBuffer::<u8>::new(10, 1, PnmFormat::BitmapBinary);
    for (x, v) in [1u8, 0, 1, 0, 1, 0, 1, 0, 1, 1].into_iter().enumerate() {
        img.set_pixel(x, 0, &PixelColor::gray(v)).unwrap();
    }
    let encoder = PnmEncoder::new(EncoderConfig {
        create_parent_dirs: true,
        ..Default::default()
    });
    encoder.save(&img, &path).expect("save");

    let bytes = fs::read(&path).unwrap();
    assert_eq!(bytes, b"P4\n10 1\n\xAA\xC0");

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn writer_errors_surface_as_write_errors() {
    struct Broken;
    impl std::io::Write for Broken {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let img = RasterBuffer::<u8>::new(1, 1, PnmFormat::GrayscaleBinary);
    let err = PnmEncoder::default().write_to(&img, Broken).unwrap_err();
    assert!(matches!(err, Error::Write(_)));
}
