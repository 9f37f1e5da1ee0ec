use log::debug;

use crate::channel::Channel;
use crate::format::{Encoding, PnmFormat};
use crate::raster::PixelColor;
use crate::{Error, Result};

/// How [`RasterBuffer::resize`] treats pixels that were already drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizePolicy {
    /// Discard the content; the resized buffer is all zeros
    Reset,
    /// Keep the overlapping top-left region at the same coordinates and
    /// zero-fill whatever is new
    Remap,
}

/// An owned image: dimensions, PNM format tag and row-major samples.
///
/// Pixel `(x, y)` occupies `channel_count()` consecutive samples starting at
/// `channel_count() * (y * width + x)`. Color pixels are stored as `r, g, b`.
/// Bitmap samples are always 0 or 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterBuffer<T: Channel = u8> {
    width: usize,
    height: usize,
    format: PnmFormat,
    data: Vec<T>,
}

/// `width * height * channels`, or `TooLarge` if it overflows.
fn sample_len(width: usize, height: usize, channels: usize) -> Result<usize> {
    width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(channels))
        .ok_or(Error::TooLarge {
            width,
            height,
            channels,
        })
}

impl<T: Channel> RasterBuffer<T> {
    /// Construct a zero-filled buffer of size `width × height`.
    ///
    /// # Panics
    ///
    /// Panics if the sample count overflows `usize`; use [`Self::try_new`]
    /// for untrusted dimensions.
    pub fn new(width: usize, height: usize, format: PnmFormat) -> Self {
        match Self::try_new(width, height, format) {
            Ok(image) => image,
            Err(e) => panic!("{e}"),
        }
    }

    /// Construct a zero-filled buffer, failing with [`Error::TooLarge`] if the
    /// sample count overflows.
    pub fn try_new(width: usize, height: usize, format: PnmFormat) -> Result<Self> {
        let len = sample_len(width, height, format.channel_count())?;
        Ok(Self {
            width,
            height,
            format,
            data: vec![T::ZERO; len],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn format(&self) -> PnmFormat {
        self.format
    }

    pub fn channel_count(&self) -> usize {
        self.format.channel_count()
    }

    /// Raw samples in storage order
    pub fn pixel_data(&self) -> &[T] {
        &self.data
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of samples in one row.
    pub fn row_len(&self) -> usize {
        self.width * self.channel_count()
    }

    /// Iterate rows of samples, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks_exact(0) panics; a zero-width image has no samples anyway
        self.data.chunks_exact(self.row_len().max(1))
    }

    fn offset(&self, x: usize, y: usize) -> Result<usize> {
        let out_of_bounds = || Error::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        };
        if x >= self.width || y >= self.height {
            return Err(out_of_bounds());
        }
        let channels = self.channel_count();
        let base = channels * (y * self.width + x);
        if base + channels > self.data.len() {
            return Err(out_of_bounds());
        }
        Ok(base)
    }

    #[inline]
    fn clamp(&self, v: T) -> T {
        if self.format.is_bitmap() && v > T::ONE {
            T::ONE
        } else {
            v
        }
    }

    fn clamp_samples(&mut self) {
        if self.format.is_bitmap() {
            for v in self.data.iter_mut() {
                if *v > T::ONE {
                    *v = T::ONE;
                }
            }
        }
    }

    /// Samples `color` expands to in this buffer, already clamped.
    fn samples_of(&self, color: &PixelColor<T>) -> [T; 3] {
        if self.channel_count() == 3 {
            [color.r, color.g, color.b]
        } else {
            [self.clamp(color.y), T::ZERO, T::ZERO]
        }
    }

    /// Read the pixel at `(x, y)`.
    ///
    /// Single-channel formats return the value in `y` (mirrored into `r`).
    pub fn get_pixel(&self, x: usize, y: usize) -> Result<PixelColor<T>> {
        let base = self.offset(x, y)?;
        let px = &self.data[base..base + self.channel_count()];
        Ok(match px {
            &[r, g, b] => PixelColor::rgb(r, g, b),
            _ => PixelColor::gray(px[0]),
        })
    }

    /// Write `color` at `(x, y)`.
    ///
    /// Single-channel formats read only `color.y`; bitmap values above 1 are
    /// stored as 1.
    pub fn set_pixel(&mut self, x: usize, y: usize, color: &PixelColor<T>) -> Result<()> {
        let base = self.offset(x, y)?;
        self.write_at(base, color);
        Ok(())
    }

    fn write_at(&mut self, base: usize, color: &PixelColor<T>) {
        let channels = self.channel_count();
        let samples = self.samples_of(color);
        self.data[base..base + channels].copy_from_slice(&samples[..channels]);
    }

    /// Set every pixel to `color`.
    pub fn fill(&mut self, color: &PixelColor<T>) {
        let channels = self.channel_count();
        let samples = self.samples_of(color);
        for px in self.data.chunks_exact_mut(channels) {
            px.copy_from_slice(&samples[..channels]);
        }
    }

    /// Set every pixel `(x, y)` for which `pred(x, y)` holds to `color`.
    ///
    /// Pixels are visited in row-major order. Returns how many were written.
    pub fn set_pixels<F>(&mut self, mut pred: F, color: &PixelColor<T>) -> usize
    where
        F: FnMut(usize, usize) -> bool,
    {
        let channels = self.channel_count();
        let mut written = 0;
        for y in 0..self.height {
            for x in 0..self.width {
                if pred(x, y) {
                    self.write_at(channels * (y * self.width + x), color);
                    written += 1;
                }
            }
        }
        written
    }

    /// Toggle between the ASCII and binary variant of the same image kind.
    pub fn swap_encoding(&mut self) {
        self.format = self.format.counterpart();
    }

    pub fn set_encoding(&mut self, encoding: Encoding) {
        self.format = self.format.with_encoding(encoding);
    }

    /// Change the format tag.
    ///
    /// If the channel count stays the same the samples are kept (clamped to
    /// 0/1 when switching to a bitmap format); otherwise the buffer is
    /// reallocated and zero-filled.
    pub fn set_format(&mut self, format: PnmFormat) -> Result<()> {
        if format.channel_count() != self.channel_count() {
            let len = sample_len(self.width, self.height, format.channel_count())?;
            debug!(
                "format change {} -> {} reallocates {}x{} buffer",
                self.format, format, self.width, self.height
            );
            self.format = format;
            self.data = vec![T::ZERO; len];
            return Ok(());
        }
        self.format = format;
        self.clamp_samples();
        Ok(())
    }

    /// Change both dimensions, treating existing content per `policy`.
    ///
    /// On [`Error::TooLarge`] the buffer is left unchanged.
    pub fn resize(&mut self, width: usize, height: usize, policy: ResizePolicy) -> Result<()> {
        let channels = self.channel_count();
        let mut data = vec![T::ZERO; sample_len(width, height, channels)?];
        if policy == ResizePolicy::Remap {
            let copy_len = self.width.min(width) * channels;
            for y in 0..self.height.min(height) {
                let src = y * self.width * channels;
                let dst = y * width * channels;
                data[dst..dst + copy_len].copy_from_slice(&self.data[src..src + copy_len]);
            }
        }
        debug!(
            "resize {}x{} -> {}x{} ({:?})",
            self.width, self.height, width, height, policy
        );
        self.width = width;
        self.height = height;
        self.data = data;
        Ok(())
    }

    pub fn set_width(&mut self, width: usize, policy: ResizePolicy) -> Result<()> {
        self.resize(width, self.height, policy)
    }

    pub fn set_height(&mut self, height: usize, policy: ResizePolicy) -> Result<()> {
        self.resize(self.width, height, policy)
    }

    /// Replace all samples. The length must match the current shape.
    pub fn set_pixel_data(&mut self, data: Vec<T>) -> Result<()> {
        let expected = self.data.len();
        if data.len() != expected {
            return Err(Error::DataLength {
                expected,
                actual: data.len(),
            });
        }
        self.data = data;
        self.clamp_samples();
        Ok(())
    }

    /// Reset every sample to zero without changing the shape.
    pub fn clear(&mut self) {
        self.data.fill(T::ZERO);
    }
}
