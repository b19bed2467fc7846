//! Pixel geometry shared by the primitives and builders

/// An inclusive pixel rectangle: both `x0..=x1` and `y0..=y1` are painted.
///
/// Coordinates are signed so shapes may hang off the canvas; drawing clips
/// them to the raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Bounds {
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Bounds from an origin and a span, matching the `(x, y, x + w, y + h)`
    /// convention used throughout the layouts.
    pub const fn from_origin(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self::new(x, y, x + w, y + h)
    }

    pub fn width(&self) -> i32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> i32 {
        self.y1 - self.y0
    }

    pub fn center(&self) -> (i32, i32) {
        ((self.x0 + self.x1) / 2, (self.y0 + self.y1) / 2)
    }

    /// Shrink every edge by `d` pixels.
    pub fn inset(&self, d: i32) -> Self {
        Self::new(self.x0 + d, self.y0 + d, self.x1 - d, self.y1 - d)
    }

    pub fn is_empty(&self) -> bool {
        self.x1 < self.x0 || self.y1 < self.y0
    }

    /// Intersect with a `width` x `height` raster, returning `None` when
    /// nothing is left to paint.
    pub fn clip(&self, width: u32, height: u32) -> Option<Self> {
        let clipped = Self::new(
            self.x0.max(0),
            self.y0.max(0),
            self.x1.min(width as i32 - 1),
            self.y1.min(height as i32 - 1),
        );
        (!clipped.is_empty()).then_some(clipped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_origin_is_inclusive() {
        let b = Bounds::from_origin(10, 20, 100, 50);
        assert_eq!(b, Bounds::new(10, 20, 110, 70));
        assert_eq!(b.width(), 100);
        assert_eq!(b.clip(111, 71), Some(b));
        assert_eq!(b.clip(110, 71), Some(Bounds::new(10, 20, 109, 70)));
    }

    #[test]
    fn clip_to_raster() {
        let b = Bounds::new(-5, -5, 20, 20);
        assert_eq!(b.clip(10, 10), Some(Bounds::new(0, 0, 9, 9)));
        assert_eq!(Bounds::new(12, 0, 15, 3).clip(10, 10), None);
    }

    #[test]
    fn inset_can_empty_a_box() {
        let b = Bounds::new(0, 0, 4, 4).inset(3);
        assert!(b.is_empty());
    }
}
