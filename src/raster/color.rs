use serde::{Deserialize, Deserializer, Serialize};

use crate::channel::Channel;

/// Color of a single pixel.
///
/// Color buffers read and write `r`, `g` and `b`. Grayscale and bitmap
/// buffers only look at `y`. Both constructors keep `r` and `y` equal so a
/// color built for one kind of buffer still means something in the other.
///
/// When deserialized, a missing `y` is taken from `r` and a missing `r` from
/// `y`, so `{"r": 255, "g": 255, "b": 255}` is white in every kind of buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PixelColor<T = u8> {
    pub r: T,
    pub g: T,
    pub b: T,
    pub y: T,
}

#[derive(Deserialize)]
struct RawPixelColor<T> {
    r: Option<T>,
    g: Option<T>,
    b: Option<T>,
    y: Option<T>,
}

impl<'de, T> Deserialize<'de> for PixelColor<T>
where
    T: Channel + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawPixelColor::<T>::deserialize(deserializer)?;
        Ok(Self {
            r: raw.r.or(raw.y).unwrap_or(T::ZERO),
            g: raw.g.unwrap_or(T::ZERO),
            b: raw.b.unwrap_or(T::ZERO),
            y: raw.y.or(raw.r).unwrap_or(T::ZERO),
        })
    }
}

impl<T: Channel> PixelColor<T> {
    pub fn rgb(r: T, g: T, b: T) -> Self {
        Self { r, g, b, y: r }
    }

    /// Single-channel value (gray level, or 0/1 for bitmaps).
    pub fn gray(y: T) -> Self {
        Self {
            r: y,
            g: T::ZERO,
            b: T::ZERO,
            y,
        }
    }

    pub fn black() -> Self {
        Self::rgb(T::ZERO, T::ZERO, T::ZERO)
    }

    pub fn white() -> Self {
        Self::rgb(T::MAX, T::MAX, T::MAX)
    }
}
