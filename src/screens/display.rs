//! Screenshot 5: the full-screen color panel of the display test

use super::{new_canvas, ShotKind, PHONE_H, PHONE_W, PHONE_X, PHONE_Y};
use crate::rendering::paint::{DISPLAY_BLUE, WHITE};
use crate::rendering::{rounded_rect, text_center, Bounds, Canvas, Color, FontBook, Screenshot};
use crate::widgets::{draw_dynamic_island, draw_marketing_header, draw_phone_frame};
use crate::Result;

/// Shade laid down first under the caption. Fills ignore alpha, so this
/// paints black.
pub const BADGE_SHADE: Color = Color::rgba(0, 0, 0, 128);
/// Opaque darker blue standing in for the half-transparent shade.
pub const BADGE_FILL: Color = Color::rgb(0, 60, 130);

pub fn caption_badge(px: i32, py: i32, pw: i32, ph: i32) -> Bounds {
    let (badge_w, badge_h) = (500, 72);
    Bounds::from_origin(px + (pw - badge_w) / 2, py + ph - 120, badge_w, badge_h)
}

/// Blue panel edge to edge, island on top, shaded caption badge near the
/// bottom. Text is drawn by the caller.
pub fn draw_panel(canvas: &mut Canvas, px: i32, py: i32, pw: i32, ph: i32) -> Result<()> {
    rounded_rect(
        canvas,
        Bounds::new(px + 4, py + 4, px + pw - 4, py + ph - 4),
        56,
        Some(DISPLAY_BLUE),
        None,
        1,
    )?;
    draw_dynamic_island(canvas, px, py, pw)?;
    let badge = caption_badge(px, py, pw, ph);
    rounded_rect(canvas, badge, 20, Some(BADGE_SHADE), None, 1)?;
    rounded_rect(canvas, badge, 20, Some(BADGE_FILL), None, 1)
}

pub fn build(fonts: &FontBook) -> Result<Screenshot> {
    let mut canvas = new_canvas();
    draw_marketing_header(
        &mut canvas,
        fonts,
        "Dead Pixel &",
        "Display Check",
        "Full-screen color panels reveal display defects",
    );

    let (px, py, pw, ph) = (PHONE_X, PHONE_Y, PHONE_W, PHONE_H);
    draw_phone_frame(&mut canvas, px, py, pw, ph)?;
    draw_panel(&mut canvas, px, py, pw, ph)?;

    let badge = caption_badge(px, py, pw, ph);
    text_center(
        &mut canvas,
        "Blue  \u{2022}  3 of 5 \u{2014} Tap to continue",
        badge.y0 + 20,
        fonts.sans(26.0),
        WHITE,
    );

    canvas.finish(ShotKind::Display.file_name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::paint::{BG, BLACK};

    #[test]
    fn panel_layers() {
        let mut c = Canvas::new(1284, 2778, BG);
        draw_phone_frame(&mut c, PHONE_X, PHONE_Y, PHONE_W, PHONE_H).unwrap();
        draw_panel(&mut c, PHONE_X, PHONE_Y, PHONE_W, PHONE_H).unwrap();

        assert_eq!(c.pixel(PHONE_X + PHONE_W / 2, PHONE_Y + PHONE_H / 2), Some(DISPLAY_BLUE));
        assert_eq!(c.pixel(PHONE_X + PHONE_W / 2, PHONE_Y + 48), Some(BLACK));

        let badge = caption_badge(PHONE_X, PHONE_Y, PHONE_W, PHONE_H);
        assert_eq!(c.pixel(badge.x0 + 4, badge.y0 + 36), Some(BADGE_FILL));
        assert_eq!(c.pixel(badge.x0 + 250, badge.y0), Some(BADGE_FILL));
        // rounded corner leaves the panel showing
        assert_eq!(c.pixel(badge.x0, badge.y0), Some(DISPLAY_BLUE));
    }
}
