//! Sample types a raster buffer can store.

use std::fmt::{Debug, Display};

/// An unsigned integer sample type.
///
/// `MAX` is what the encoder writes as the maxval of grayscale and color
/// headers. Binary bodies store each sample big-endian in `BYTES` bytes.
pub trait Channel: Copy + Default + Ord + Debug + Display + Send + Sync + 'static {
    const ZERO: Self;
    const ONE: Self;
    const MAX: Self;
    const BYTES: usize;

    /// Append the big-endian bytes of this sample.
    fn extend_be(self, out: &mut Vec<u8>);

    /// Widen to `u32`, used for maxval rendering and tests.
    fn to_u32(self) -> u32;
}

impl Channel for u8 {
    const ZERO: Self = 0;
    const ONE: Self = 1;
    const MAX: Self = u8::MAX;
    const BYTES: usize = 1;

    #[inline]
    fn extend_be(self, out: &mut Vec<u8>) {
        out.push(self);
    }

    #[inline]
    fn to_u32(self) -> u32 {
        self as u32
    }
}

impl Channel for u16 {
    const ZERO: Self = 0;
    const ONE: Self = 1;
    const MAX: Self = u16::MAX;
    const BYTES: usize = 2;

    #[inline]
    fn extend_be(self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_be_bytes());
    }

    #[inline]
    fn to_u32(self) -> u32 {
        self as u32
    }
}
