//! Rendering layer: canvas, geometry, colors, shapes and text

pub mod canvas;
pub mod layout;
pub mod paint;
pub mod raster;
pub mod text;

pub use canvas::Canvas;
pub use layout::Bounds;
pub use paint::Color;
pub use raster::{fill_rect, hline, rounded_rect};
pub use text::{text_center, text_center_in, Face, Font, FontBook, FontPaths, FontRole, TextExtent};

/// A finished, PNG-encoded image and the file name it is written under.
#[derive(Debug, Clone)]
pub struct Screenshot {
    pub file_name: String,
    pub width: u32,
    pub height: u32,
    pub png_data: Vec<u8>,
}

impl Screenshot {
    /// Decode the PNG back into pixels.
    pub fn decode(&self) -> crate::Result<image::RgbImage> {
        Ok(image::load_from_memory(&self.png_data)?.to_rgb8())
    }
}
