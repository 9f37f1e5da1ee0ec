//! Shape fills and the paint command set used by scene files

use serde::{Deserialize, Serialize};

use crate::channel::Channel;
use crate::raster::{PixelColor, RasterBuffer};
use crate::Result;

impl<T: Channel> RasterBuffer<T> {
    /// Fill the rectangle spanning `x_left..=x_left + width` and
    /// `y_top..=y_top + height`.
    ///
    /// Both bounds are inclusive, so `add_rectangle(0, 0, 2, 2, ..)` paints a
    /// 3×3 block. Parts outside the image are ignored.
    pub fn add_rectangle(
        &mut self,
        x_left: i64,
        y_top: i64,
        width: i64,
        height: i64,
        color: &PixelColor<T>,
    ) -> usize {
        let x_right = x_left.saturating_add(width);
        let y_bottom = y_top.saturating_add(height);
        self.set_pixels(
            |x, y| {
                let (x, y) = (x as i64, y as i64);
                x >= x_left && x <= x_right && y >= y_top && y <= y_bottom
            },
            color,
        )
    }

    /// Fill every pixel strictly inside the circle around `(cx, cy)`.
    ///
    /// Pixels at exactly `radius` from the center are left untouched.
    pub fn add_circle(&mut self, cx: i64, cy: i64, radius: i64, color: &PixelColor<T>) -> usize {
        let (cx, cy, r) = (cx as i128, cy as i128, radius as i128);
        self.set_pixels(
            |x, y| {
                let dx = x as i128 - cx;
                let dy = y as i128 - cy;
                dx * dx + dy * dy < r * r
            },
            color,
        )
    }
}

/// One drawing step of a scene, applied to an 8-bit buffer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum PaintCommand {
    Fill {
        color: PixelColor,
    },
    Pixel {
        x: usize,
        y: usize,
        color: PixelColor,
    },
    Rectangle {
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        color: PixelColor,
    },
    Circle {
        cx: i64,
        cy: i64,
        radius: i64,
        color: PixelColor,
    },
}

impl PaintCommand {
    /// Draw onto `image`, returning the number of pixels written.
    pub fn apply(&self, image: &mut RasterBuffer) -> Result<usize> {
        Ok(match self {
            PaintCommand::Fill { color } => {
                image.fill(color);
                image.width() * image.height()
            }
            PaintCommand::Pixel { x, y, color } => {
                image.set_pixel(*x, *y, color)?;
                1
            }
            PaintCommand::Rectangle {
                x,
                y,
                width,
                height,
                color,
            } => image.add_rectangle(*x, *y, *width, *height, color),
            PaintCommand::Circle {
                cx,
                cy,
                radius,
                color,
            } => image.add_circle(*cx, *cy, *radius, color),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PnmFormat;

    fn on(img: &RasterBuffer, x: usize, y: usize) -> bool {
        img.get_pixel(x, y).unwrap().y != 0
    }

    #[test]
    fn rectangle_bounds_are_inclusive() {
        let mut img = RasterBuffer::<u8>::new(6, 6, PnmFormat::BitmapAscii);
        let painted = img.add_rectangle(0, 0, 2, 2, &PixelColor::gray(1));
        assert_eq!(painted, 9);
        for y in 0..6 {
            for x in 0..6 {
                assert_eq!(on(&img, x, y), x <= 2 && y <= 2, "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn rectangle_partially_off_canvas_is_clipped() {
        let mut img = RasterBuffer::<u8>::new(4, 4, PnmFormat::GrayscaleBinary);
        let painted = img.add_rectangle(-2, 3, 3, 10, &PixelColor::gray(50));
        assert_eq!(painted, 2);
        assert!(on(&img, 0, 3));
        assert!(on(&img, 1, 3));
        assert!(!on(&img, 2, 3));
    }

    #[test]
    fn circle_boundary_is_exclusive() {
        let mut img = RasterBuffer::<u8>::new(11, 11, PnmFormat::ColorBinary);
        let red = PixelColor::rgb(255, 0, 0);
        img.add_circle(5, 5, 3, &red);
        assert_eq!(img.get_pixel(5, 7).unwrap(), red);
        assert_eq!(img.get_pixel(5, 8).unwrap(), PixelColor::black());
        assert_eq!(img.get_pixel(8, 5).unwrap(), PixelColor::black());
        assert_eq!(img.get_pixel(5, 5).unwrap(), red);
    }

    #[test]
    fn zero_radius_circle_paints_nothing() {
        let mut img = RasterBuffer::<u8>::new(3, 3, PnmFormat::BitmapBinary);
        assert_eq!(img.add_circle(1, 1, 0, &PixelColor::gray(1)), 0);
    }

    #[test]
    fn paint_commands_deserialize_and_apply() {
        let json = r#"[
            {"type": "fill", "color": {"y": 10}},
            {"type": "rectangle", "x": 1, "y": 1, "width": 1, "height": 0, "color": {"y": 200}},
            {"type": "pixel", "x": 0, "y": 1, "color": {"y": 99}}
        ]"#;
        let cmds: Vec<PaintCommand> = serde_json::from_str(json).unwrap();
        let mut img = RasterBuffer::<u8>::new(3, 2, PnmFormat::GrayscaleAscii);
        for cmd in &cmds {
            cmd.apply(&mut img).unwrap();
        }
        assert_eq!(img.pixel_data(), &[10, 10, 10, 99, 200, 200]);
    }

    #[test]
    fn pixel_command_out_of_bounds_fails() {
        let mut img = RasterBuffer::<u8>::new(2, 2, PnmFormat::GrayscaleAscii);
        let cmd = PaintCommand::Pixel {
            x: 2,
            y: 0,
            color: PixelColor::gray(1),
        };
        assert!(cmd.apply(&mut img).is_err());
    }
}
