//! Raster buffer, pixel colors and drawing primitives

mod buffer;
mod color;
pub mod paint;

pub use buffer::{RasterBuffer, ResizePolicy};
pub use color::PixelColor;
pub use paint::PaintCommand;
