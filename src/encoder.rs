//! PNM serialization (P1 through P6).
//!
//! The header is `"<magic>\n<width> <height>\n"` followed, for grayscale and
//! color formats, by the channel type's maximum value on its own line. ASCII
//! bodies write every sample as a decimal followed by one space and end each
//! row with a newline. Binary bodies write samples in storage order, except
//! binary bitmaps which pack eight pixels per byte, most significant bit first.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::{debug, warn};

use crate::channel::Channel;
use crate::format::{Encoding, ImageKind};
use crate::raster::RasterBuffer;
use crate::{Error, Result};

/// Options for [`PnmEncoder`]
///
/// The defaults never touch the filesystem beyond the target file:
/// - `create_parent_dirs` is off, so saving into a missing directory fails
/// - output goes through an 8 KiB write buffer
#[derive(Debug, Clone)]
pub struct EncoderConfig {
    /// Create missing parent directories of the output path
    pub create_parent_dirs: bool,
    /// Capacity of the buffered writer used by `save`
    pub buffer_capacity: usize,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            create_parent_dirs: false,
            buffer_capacity: 8 * 1024,
        }
    }
}

/// Writes [`RasterBuffer`]s as PNM files.
///
/// ```no_run
/// use pnmkit::{PixelColor, PnmEncoder, PnmFormat, RasterBuffer};
///
/// # fn main() -> pnmkit::Result<()> {
/// let mut img = RasterBuffer::<u8>::new(64, 64, PnmFormat::ColorBinary);
/// img.add_circle(32, 32, 20, &PixelColor::rgb(255, 128, 0));
/// PnmEncoder::default().save(&img, "circle.ppm")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct PnmEncoder {
    config: EncoderConfig,
}

impl PnmEncoder {
    pub fn new(config: EncoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Write header and body of `image` into `w`.
    pub fn write_to<T: Channel, W: Write>(&self, image: &RasterBuffer<T>, w: W) -> Result<()> {
        write_image(image, w)?;
        Ok(())
    }

    /// Encode `image` into memory.
    pub fn encode<T: Channel>(&self, image: &RasterBuffer<T>) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(header(image).len() + body_len(image));
        self.write_to(image, &mut out)?;
        Ok(out)
    }

    /// Save `image` to `path`.
    ///
    /// Fails with [`Error::Io`] if the file cannot be created; nothing is
    /// written in that case.
    pub fn save<T: Channel, P: AsRef<Path>>(&self, image: &RasterBuffer<T>, path: P) -> Result<()> {
        let path = path.as_ref();
        match self.save_file(image, path) {
            Ok(()) => {
                debug!(
                    "saved {}x{} {} image to {}",
                    image.width(),
                    image.height(),
                    image.format(),
                    path.display()
                );
                Ok(())
            }
            Err(e) => {
                warn!("failed to save image: {e}");
                Err(e)
            }
        }
    }

    fn save_file<T: Channel>(&self, image: &RasterBuffer<T>, path: &Path) -> Result<()> {
        if self.config.create_parent_dirs {
            ensure_parent_dir(path)?;
        }
        let file = File::create(path).map_err(|e| Error::io(path, e))?;
        let mut out = BufWriter::with_capacity(self.config.buffer_capacity, file);
        write_image(image, &mut out).map_err(|e| Error::io(path, e))?;
        out.flush().map_err(|e| Error::io(path, e))
    }
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
    }
    Ok(())
}

/// The PNM header for `image`, including the trailing newline.
pub fn header<T: Channel>(image: &RasterBuffer<T>) -> String {
    let format = image.format();
    let mut h = format!(
        "{}\n{} {}\n",
        format.magic(),
        image.width(),
        image.height()
    );
    if format.has_maxval() {
        h.push_str(&format!("{}\n", T::MAX));
    }
    h
}

/// Pack one row of bitmap samples, eight pixels per byte.
///
/// The leftmost pixel of each group lands in the most significant bit; the
/// unused low bits of a short final group stay zero.
pub fn pack_bitmap_row<T: Channel>(row: &[T], out: &mut Vec<u8>) {
    for group in row.chunks(8) {
        let mut byte = 0u8;
        for (k, &v) in group.iter().enumerate() {
            if v != T::ZERO {
                byte |= 0x80 >> k;
            }
        }
        out.push(byte);
    }
}

fn body_len<T: Channel>(image: &RasterBuffer<T>) -> usize {
    let format = image.format();
    match (format.kind(), format.encoding()) {
        (ImageKind::Bitmap, Encoding::Binary) => image.width().div_ceil(8) * image.height(),
        (_, Encoding::Binary) => image.pixel_data().len() * T::BYTES,
        // rough guess: up to three digits plus a separator
        (_, Encoding::Ascii) => image.pixel_data().len() * 4 + image.height(),
    }
}

fn write_image<T: Channel, W: Write>(image: &RasterBuffer<T>, mut w: W) -> io::Result<()> {
    w.write_all(header(image).as_bytes())?;
    let format = image.format();
    match (format.kind(), format.encoding()) {
        (_, Encoding::Ascii) => write_ascii(image, &mut w),
        (ImageKind::Bitmap, Encoding::Binary) => {
            let mut packed = Vec::with_capacity(image.width().div_ceil(8));
            for row in image.rows() {
                packed.clear();
                pack_bitmap_row(row, &mut packed);
                w.write_all(&packed)?;
            }
            Ok(())
        }
        (_, Encoding::Binary) => {
            let mut bytes = Vec::with_capacity(image.row_len() * T::BYTES);
            for row in image.rows() {
                bytes.clear();
                for &v in row {
                    v.extend_be(&mut bytes);
                }
                w.write_all(&bytes)?;
            }
            Ok(())
        }
    }
}

fn write_ascii<T: Channel, W: Write>(image: &RasterBuffer<T>, w: &mut W) -> io::Result<()> {
    let mut line = String::new();
    for row in image.rows() {
        line.clear();
        for v in row {
            line.push_str(&v.to_string());
            line.push(' ');
        }
        line.push('\n');
        w.write_all(line.as_bytes())?;
    }
    Ok(())
}
