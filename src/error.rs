//! Error types for raster buffers and the PNM encoder

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for buffer and encoder operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while editing or saving an image
#[derive(Error, Debug)]
pub enum Error {
    /// Pixel coordinates fall outside the image
    #[error("Pixel ({x}, {y}) is out of bounds for a {width}x{height} image")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// Replacement pixel data does not match the buffer shape
    #[error("Pixel data has {actual} samples, expected {expected}")]
    DataLength { expected: usize, actual: usize },

    /// Failed to open, read or write a file
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write to an output stream
    #[error("Write failed: {0}")]
    Write(#[from] std::io::Error),

    /// Dimensions whose sample count does not fit in memory addressing
    #[error("Image of {width}x{height} with {channels} channel(s) is too large")]
    TooLarge {
        width: usize,
        height: usize,
        channels: usize,
    },

    /// Unknown or unsupported format name
    #[error("Invalid format: {0}")]
    Format(String),

    /// Invalid scene description
    #[error("Invalid scene: {0}")]
    Scene(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` for file and stream write failures.
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Io { .. } | Error::Write(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_message_names_coordinates() {
        let err = Error::OutOfBounds {
            x: 4,
            y: 1,
            width: 4,
            height: 2,
        };
        assert_eq!(
            err.to_string(),
            "Pixel (4, 1) is out of bounds for a 4x2 image"
        );
        assert!(!err.is_io());
    }

    #[test]
    fn io_error_keeps_path_and_source() {
        let err = Error::io(
            "missing/out.pgm",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory"),
        );
        assert!(err.is_io());
        assert!(err.to_string().contains("missing/out.pgm"));
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("I/O error on "));
        assert!(!err.to_string().contains("write"));
    }
}
