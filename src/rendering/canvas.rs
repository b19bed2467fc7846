//! The raster surface every builder draws on

use std::io::Cursor;

use image::{ImageFormat, RgbImage};
use swash::scale::ScaleContext;
use swash::shape::ShapeContext;

use crate::rendering::layout::Bounds;
use crate::rendering::paint::Color;
use crate::rendering::Screenshot;
use crate::Result;

/// An RGB8 raster plus the shaping and glyph scaling state used to draw
/// text on it.
///
/// All writes are clipped to the raster. Shape fills overwrite pixels with
/// the color's RGB and ignore its alpha; only glyph coverage blends.
pub struct Canvas {
    pub(crate) image: RgbImage,
    pub(crate) scale: ScaleContext,
    pub(crate) shaper: ShapeContext,
}

impl Canvas {
    /// Allocate a canvas filled with `background`.
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, background.to_rgb()),
            scale: ScaleContext::new(),
            shaper: ShapeContext::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        if x < 0 || y < 0 || x as u32 >= self.width() || y as u32 >= self.height() {
            return None;
        }
        Some(Color::from(*self.image.get_pixel(x as u32, y as u32)))
    }

    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x as u32 >= self.width() || y as u32 >= self.height() {
            return;
        }
        let px = self.image.get_pixel_mut(x as u32, y as u32);
        px.0 = color.over(px.0);
    }

    /// Paint the inclusive run `x0..=x1` on row `y`. The RGB canvas keeps
    /// no alpha, so the color's alpha is dropped.
    pub fn fill_span(&mut self, y: i32, x0: i32, x1: i32, color: Color) {
        let Some(run) = Bounds::new(x0, y, x1, y).clip(self.width(), self.height()) else {
            return;
        };
        let rgb = color.to_rgb();
        for x in run.x0..=run.x1 {
            self.image.put_pixel(x as u32, y as u32, rgb);
        }
    }

    /// Encode the raster as PNG and wrap it as a named screenshot.
    pub fn finish(self, file_name: &str) -> Result<Screenshot> {
        let (width, height) = self.image.dimensions();
        let mut png_data = Vec::new();
        self.image
            .write_to(&mut Cursor::new(&mut png_data), ImageFormat::Png)?;
        Ok(Screenshot {
            file_name: file_name.to_string(),
            width,
            height,
            png_data,
        })
    }
}
