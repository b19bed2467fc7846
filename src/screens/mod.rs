//! The five App Store screenshots.
//!
//! Each builder owns a fresh full-size canvas, draws the marketing header,
//! the phone and its screen content, and returns the encoded image.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::rendering::paint::BG;
use crate::rendering::{Canvas, FontBook, Screenshot};
use crate::{Result, HEIGHT, WIDTH};

pub mod camera;
pub mod display;
pub mod landing;
pub mod results;
pub mod touch;

// Phone placement shared by every screenshot
pub(crate) const PHONE_X: i32 = 95;
pub(crate) const PHONE_Y: i32 = 440;
pub(crate) const PHONE_W: i32 = 1100;
pub(crate) const PHONE_H: i32 = 2280;

pub(crate) fn new_canvas() -> Canvas {
    Canvas::new(WIDTH, HEIGHT, BG)
}

/// Which screenshot to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShotKind {
    Results,
    Camera,
    Touch,
    Landing,
    Display,
}

impl ShotKind {
    /// Every screenshot in output order.
    pub const ALL: [ShotKind; 5] = [
        ShotKind::Results,
        ShotKind::Camera,
        ShotKind::Touch,
        ShotKind::Landing,
        ShotKind::Display,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            ShotKind::Results => "01_results.png",
            ShotKind::Camera => "02_camera_ai.png",
            ShotKind::Touch => "03_touch_test.png",
            ShotKind::Landing => "04_landing.png",
            ShotKind::Display => "05_display_test.png",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            ShotKind::Results => "results",
            ShotKind::Camera => "camera",
            ShotKind::Touch => "touch",
            ShotKind::Landing => "landing",
            ShotKind::Display => "display",
        }
    }

    pub fn build(&self, fonts: &FontBook) -> Result<Screenshot> {
        match self {
            ShotKind::Results => results::build(fonts),
            ShotKind::Camera => camera::build(fonts),
            ShotKind::Touch => touch::build(fonts),
            ShotKind::Landing => landing::build(fonts),
            ShotKind::Display => display::build(fonts),
        }
    }
}

impl fmt::Display for ShotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for ShotKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        ShotKind::ALL
            .into_iter()
            .find(|k| k.slug().eq_ignore_ascii_case(s) || k.file_name() == s)
            .ok_or_else(|| {
                let names: Vec<_> = ShotKind::ALL.iter().map(|k| k.slug()).collect();
                format!("unknown screenshot '{}' (expected one of: {})", s, names.join(", "))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_are_ordered() {
        let names: Vec<_> = ShotKind::ALL.iter().map(|k| k.file_name()).collect();
        assert_eq!(
            names,
            [
                "01_results.png",
                "02_camera_ai.png",
                "03_touch_test.png",
                "04_landing.png",
                "05_display_test.png"
            ]
        );
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn parse_slugs_and_file_names() {
        assert_eq!("touch".parse::<ShotKind>(), Ok(ShotKind::Touch));
        assert_eq!("Camera".parse::<ShotKind>(), Ok(ShotKind::Camera));
        assert_eq!("05_display_test.png".parse::<ShotKind>(), Ok(ShotKind::Display));
        assert!("hero".parse::<ShotKind>().unwrap_err().contains("results"));
    }

    #[test]
    fn phone_fits_on_canvas() {
        assert!(PHONE_X + PHONE_W + 4 < WIDTH as i32);
        assert!(PHONE_Y + PHONE_H + 4 < HEIGHT as i32);
    }
}
