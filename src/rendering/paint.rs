//! Colors and the app palette

/// An sRGB color with straight alpha. Shape fills use only the RGB part;
/// alpha matters when glyph coverage is blended source-over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Scale alpha by an 8-bit coverage value (glyph masks).
    pub fn with_coverage(self, coverage: u8) -> Self {
        let a = (self.a as u16 * coverage as u16 + 127) / 255;
        Self { a: a as u8, ..self }
    }

    /// Composite this color over an opaque destination pixel.
    pub fn over(&self, dst: [u8; 3]) -> [u8; 3] {
        match self.a {
            255 => [self.r, self.g, self.b],
            0 => dst,
            a => {
                let a = a as u16;
                let mix = |s: u8, d: u8| ((s as u16 * a + d as u16 * (255 - a) + 127) / 255) as u8;
                [mix(self.r, dst[0]), mix(self.g, dst[1]), mix(self.b, dst[2])]
            }
        }
    }

    pub fn to_rgb(&self) -> image::Rgb<u8> {
        image::Rgb([self.r, self.g, self.b])
    }
}

impl From<image::Rgb<u8>> for Color {
    fn from(px: image::Rgb<u8>) -> Self {
        Color::rgb(px[0], px[1], px[2])
    }
}

// App theme
pub const BG: Color = Color::rgb(10, 10, 10);
pub const SURFACE: Color = Color::rgb(29, 29, 31);
pub const TEXT_PRIMARY: Color = Color::rgb(245, 245, 247);
pub const TEXT_SECONDARY: Color = Color::rgb(161, 161, 166);
pub const TEXT_MUTED: Color = Color::rgb(134, 134, 139);
pub const TEXT_DIM: Color = Color::rgb(72, 72, 74);
pub const GREEN: Color = Color::rgb(48, 209, 88);
pub const RED: Color = Color::rgb(255, 69, 58);
pub const BLUE: Color = Color::rgb(0, 113, 227);
pub const WHITE: Color = Color::rgb(255, 255, 255);
pub const BLACK: Color = Color::rgb(0, 0, 0);

// Widget chrome
pub const BEZEL: Color = Color::rgb(58, 58, 60);
pub const SEPARATOR: Color = Color::rgb(38, 38, 40);
pub const PASS_BG: Color = Color::rgb(22, 80, 38);
pub const FAIL_BG: Color = Color::rgb(80, 22, 22);
pub const DISPLAY_BLUE: Color = Color::rgb(0, 122, 255);
