//! pnmkit
//!
//! An in-memory raster image buffer with drawing primitives and an encoder for
//! the PNM family of formats: PBM (bitmap), PGM (grayscale) and PPM (color),
//! each in its ASCII (`P1`–`P3`) or binary (`P4`–`P6`) variant.
//!
//! # Features
//!
//! - **Generic samples**: buffers store `u8` or `u16` channels; the header
//!   maxval follows the channel type
//! - **Checked access**: every coordinate-based accessor validates bounds
//! - **Explicit resizing**: callers choose between resetting and remapping
//!   existing content
//!
//! # Example
//!
//! ```no_run
//! use pnmkit::{PixelColor, PnmEncoder, PnmFormat, RasterBuffer};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut img = RasterBuffer::<u8>::new(4, 2, PnmFormat::GrayscaleAscii);
//! img.set_pixel(0, 0, &PixelColor::gray(10))?;
//! img.set_pixel(3, 1, &PixelColor::gray(200))?;
//!
//! PnmEncoder::default().save(&img, "out.pgm")?;
//! # Ok(())
//! # }
//! ```

pub mod channel;
pub mod encoder;
pub mod error;
pub mod format;
pub mod raster;
pub mod scene;

pub use channel::Channel;
pub use encoder::{EncoderConfig, PnmEncoder};
pub use error::{Error, Result};
pub use format::{Encoding, ImageKind, PnmFormat};
pub use raster::{PaintCommand, PixelColor, RasterBuffer, ResizePolicy};
pub use scene::Scene;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EncoderConfig::default();
        assert!(!config.create_parent_dirs);
        assert_eq!(config.buffer_capacity, 8192);
    }

    #[test]
    fn test_default_buffer_is_u8() {
        let img: RasterBuffer = RasterBuffer::new(2, 2, PnmFormat::GrayscaleBinary);
        let out = PnmEncoder::default().encode(&img).unwrap();
        assert!(out.starts_with(b"P5\n2 2\n255\n"));
    }
}
