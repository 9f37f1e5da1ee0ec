//! JSON scene descriptions: canvas size, format and a list of paint commands.
//!
//! ```
//! let scene = pnmkit::Scene::from_json(r#"{
//!     "width": 4,
//!     "height": 4,
//!     "format": "grayscale-ascii",
//!     "commands": [{"type": "rectangle", "x": 0, "y": 0, "width": 1, "height": 1, "color": {"y": 9}}]
//! }"#).unwrap();
//! let img = scene.render().unwrap();
//! assert_eq!(img.get_pixel(1, 1).unwrap().y, 9);
//! ```

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::raster::{PaintCommand, PixelColor, RasterBuffer};
use crate::{Error, PnmFormat, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub width: usize,
    pub height: usize,
    pub format: PnmFormat,
    /// Fill applied before any command
    #[serde(default)]
    pub background: Option<PixelColor>,
    #[serde(default)]
    pub commands: Vec<PaintCommand>,
}

impl Scene {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Scene(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        serde_json::from_str(&json).map_err(|e| Error::Scene(format!("{}: {e}", path.display())))
    }

    /// Build the image the scene describes.
    pub fn render(&self) -> Result<RasterBuffer> {
        let mut image = RasterBuffer::try_new(self.width, self.height, self.format)?;
        if let Some(bg) = &self.background {
            image.fill(bg);
        }
        for (i, cmd) in self.commands.iter().enumerate() {
            let written = cmd
                .apply(&mut image)
                .map_err(|e| Error::Scene(format!("command {i}: {e}")))?;
            debug!("command {i} wrote {written} pixels");
        }
        Ok(image)
    }
}
