//! The six PNM format tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Logical image kind, independent of how the body is encoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImageKind {
    Bitmap,
    Grayscale,
    Color,
}

/// Body encoding of a PNM file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Encoding {
    Ascii,
    Binary,
}

/// A PNM format tag: image kind crossed with body encoding.
///
/// ```
/// use pnmkit::PnmFormat;
///
/// let fmt = PnmFormat::GrayscaleAscii;
/// assert_eq!(fmt.magic(), "P2");
/// assert_eq!(fmt.counterpart(), PnmFormat::GrayscaleBinary);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PnmFormat {
    BitmapAscii,
    GrayscaleAscii,
    ColorAscii,
    BitmapBinary,
    GrayscaleBinary,
    ColorBinary,
}

impl PnmFormat {
    pub const ALL: [PnmFormat; 6] = [
        PnmFormat::BitmapAscii,
        PnmFormat::GrayscaleAscii,
        PnmFormat::ColorAscii,
        PnmFormat::BitmapBinary,
        PnmFormat::GrayscaleBinary,
        PnmFormat::ColorBinary,
    ];

    pub fn new(kind: ImageKind, encoding: Encoding) -> Self {
        match (kind, encoding) {
            (ImageKind::Bitmap, Encoding::Ascii) => PnmFormat::BitmapAscii,
            (ImageKind::Grayscale, Encoding::Ascii) => PnmFormat::GrayscaleAscii,
            (ImageKind::Color, Encoding::Ascii) => PnmFormat::ColorAscii,
            (ImageKind::Bitmap, Encoding::Binary) => PnmFormat::BitmapBinary,
            (ImageKind::Grayscale, Encoding::Binary) => PnmFormat::GrayscaleBinary,
            (ImageKind::Color, Encoding::Binary) => PnmFormat::ColorBinary,
        }
    }

    pub fn kind(self) -> ImageKind {
        match self {
            PnmFormat::BitmapAscii | PnmFormat::BitmapBinary => ImageKind::Bitmap,
            PnmFormat::GrayscaleAscii | PnmFormat::GrayscaleBinary => ImageKind::Grayscale,
            PnmFormat::ColorAscii | PnmFormat::ColorBinary => ImageKind::Color,
        }
    }

    pub fn encoding(self) -> Encoding {
        match self {
            PnmFormat::BitmapAscii | PnmFormat::GrayscaleAscii | PnmFormat::ColorAscii => {
                Encoding::Ascii
            }
            PnmFormat::BitmapBinary | PnmFormat::GrayscaleBinary | PnmFormat::ColorBinary => {
                Encoding::Binary
            }
        }
    }

    /// Header magic number, `P1` through `P6`.
    pub fn magic(self) -> &'static str {
        match self {
            PnmFormat::BitmapAscii => "P1",
            PnmFormat::GrayscaleAscii => "P2",
            PnmFormat::ColorAscii => "P3",
            PnmFormat::BitmapBinary => "P4",
            PnmFormat::GrayscaleBinary => "P5",
            PnmFormat::ColorBinary => "P6",
        }
    }

    /// Conventional file extension (`pbm`, `pgm` or `ppm`).
    pub fn extension(self) -> &'static str {
        match self.kind() {
            ImageKind::Bitmap => "pbm",
            ImageKind::Grayscale => "pgm",
            ImageKind::Color => "ppm",
        }
    }

    pub fn channel_count(self) -> usize {
        match self.kind() {
            ImageKind::Color => 3,
            ImageKind::Bitmap | ImageKind::Grayscale => 1,
        }
    }

    pub fn is_bitmap(self) -> bool {
        self.kind() == ImageKind::Bitmap
    }

    pub fn is_binary(self) -> bool {
        self.encoding() == Encoding::Binary
    }

    /// Whether the header carries a maxval line.
    pub fn has_maxval(self) -> bool {
        !self.is_bitmap()
    }

    /// The same image kind with the other body encoding.
    pub fn counterpart(self) -> PnmFormat {
        match self {
            PnmFormat::BitmapAscii => PnmFormat::BitmapBinary,
            PnmFormat::BitmapBinary => PnmFormat::BitmapAscii,
            PnmFormat::GrayscaleAscii => PnmFormat::GrayscaleBinary,
            PnmFormat::GrayscaleBinary => PnmFormat::GrayscaleAscii,
            PnmFormat::ColorAscii => PnmFormat::ColorBinary,
            PnmFormat::ColorBinary => PnmFormat::ColorAscii,
        }
    }

    pub fn with_encoding(self, encoding: Encoding) -> PnmFormat {
        PnmFormat::new(self.kind(), encoding)
    }

    fn name(self) -> &'static str {
        match self {
            PnmFormat::BitmapAscii => "bitmap-ascii",
            PnmFormat::GrayscaleAscii => "grayscale-ascii",
            PnmFormat::ColorAscii => "color-ascii",
            PnmFormat::BitmapBinary => "bitmap-binary",
            PnmFormat::GrayscaleBinary => "grayscale-binary",
            PnmFormat::ColorBinary => "color-binary",
        }
    }
}

impl fmt::Display for PnmFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PnmFormat {
    type Err = Error;

    /// Accepts magic numbers (`p4`, `P6`) and names (`color-binary`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        PnmFormat::ALL
            .into_iter()
            .find(|f| f.magic().eq_ignore_ascii_case(&needle) || f.name() == needle)
            .ok_or_else(|| Error::Format(s.to_string()))
    }
}
