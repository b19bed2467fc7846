//! Screenshot 2: rear camera lens analysis

use super::{new_canvas, ShotKind, PHONE_H, PHONE_W, PHONE_X, PHONE_Y};
use crate::rendering::paint::{
    FAIL_BG, GREEN, PASS_BG, RED, SURFACE, TEXT_DIM, TEXT_MUTED, TEXT_SECONDARY, WHITE,
};
use crate::rendering::{fill_rect, rounded_rect, text_center, Bounds, Canvas, Color, FontBook, Screenshot};
use crate::widgets::{
    draw_marketing_header, draw_phone_frame, draw_pill_button, draw_progress_bar,
    draw_status_bar, Label, Progress,
};
use crate::Result;

pub const PREVIEW_W: i32 = 700;
pub const PREVIEW_H: i32 = 940;
const BAND_STEP: usize = 8;

/// Color of the simulated out-of-focus photo `y_offset` pixels into the
/// preview. Three sine waves of different frequency give soft green bands.
pub fn noise_band(y_offset: i32) -> Color {
    let y = y_offset as f64;
    let r = 15 + (10.0 * (y * 0.015 + 1.0).sin()) as i32;
    let g = 30 + (20.0 * (y * 0.02).sin()) as i32;
    let b = 12 + (8.0 * (y * 0.025 + 2.0).sin()) as i32;
    Color::rgb(r as u8, g as u8, b as u8)
}

/// Lens badge fill. Fills ignore alpha, so it lands as opaque (40, 40, 40).
pub const LENS_BADGE: Color = Color::rgba(40, 40, 40, 180);

/// Fill the preview with bands every 8 px (8 rows each, inclusive), inset 4 px from the
/// sides.
pub fn draw_noise(canvas: &mut Canvas, cam_x: i32, cam_y: i32) {
    for y_offset in (0..PREVIEW_H).step_by(BAND_STEP) {
        fill_rect(
            canvas,
            Bounds::new(cam_x + 4, cam_y + y_offset, cam_x + PREVIEW_W - 4, cam_y + y_offset + 7),
            noise_band(y_offset),
        );
    }
}

pub fn build(fonts: &FontBook) -> Result<Screenshot> {
    let mut canvas = new_canvas();
    draw_marketing_header(
        &mut canvas,
        fonts,
        "AI-Powered",
        "Lens Analysis",
        "Detect scratches and defects on both cameras",
    );

    let (px, py, pw, ph) = (PHONE_X, PHONE_Y, PHONE_W, PHONE_H);
    draw_phone_frame(&mut canvas, px, py, pw, ph)?;
    draw_status_bar(&mut canvas, fonts, px, py, pw)?;

    let sx = px + 40;
    let sy = py + 100;
    let sw = pw - 80;

    canvas.draw_text("CLEARVUE", (px + pw / 2 - 60, sy - 10), fonts.sans(20.0), TEXT_DIM);

    let progress = Progress::new(4, 17);
    draw_progress_bar(&mut canvas, sx, sy + 30, sw, progress, 6)?;
    let step = format!("Test {} of {}", progress.done(), progress.total());
    canvas.draw_text(&step, (sx, sy + 48), fonts.sans(22.0), TEXT_MUTED);
    canvas.draw_text("Rear Camera", (sx, sy + 100), fonts.sans(44.0), WHITE);

    // Camera preview
    let cam_x = sx + (sw - PREVIEW_W) / 2;
    let cam_y = sy + 180;
    rounded_rect(
        &mut canvas,
        Bounds::from_origin(cam_x, cam_y, PREVIEW_W, PREVIEW_H),
        20,
        Some(Color::rgb(20, 25, 20)),
        None,
        1,
    )?;
    draw_noise(&mut canvas, cam_x, cam_y);

    // Lens badge, top left
    let (badge_x, badge_y) = (cam_x + 16, cam_y + 16);
    rounded_rect(
        &mut canvas,
        Bounds::from_origin(badge_x, badge_y, 100, 36),
        18,
        Some(LENS_BADGE),
        None,
        1,
    )?;
    canvas.draw_text("REAR", (badge_x + 16, badge_y + 6), fonts.sans(22.0), WHITE);

    // Hardware check, top right
    let (check_x, check_y) = (cam_x + PREVIEW_W - 52, cam_y + 16);
    rounded_rect(&mut canvas, Bounds::from_origin(check_x, check_y, 36, 36), 18, Some(PASS_BG), None, 1)?;
    canvas.draw_text("\u{2713}", (check_x + 8, check_y + 4), fonts.sans(24.0), GREEN);

    // Verdict pill, bottom centre
    let (ai_w, ai_h) = (200, 48);
    let ai_x = cam_x + (PREVIEW_W - ai_w) / 2;
    let ai_y = cam_y + PREVIEW_H - 64;
    rounded_rect(&mut canvas, Bounds::from_origin(ai_x, ai_y, ai_w, ai_h), ai_h / 2, Some(PASS_BG), None, 1)?;
    text_center(&mut canvas, "Lens OK", ai_y + 10, fonts.sans(28.0), GREEN);

    let detail_y = cam_y + PREVIEW_H + 30;
    text_center(&mut canvas, "No scratches or defects detected", detail_y, fonts.sans(28.0), TEXT_SECONDARY);
    text_center(&mut canvas, "Analyzed by Claude AI vision model", detail_y + 42, fonts.sans(22.0), TEXT_DIM);

    // Pass / Fail / Skip
    let btn_y = detail_y + 110;
    let btn_w = sw / 3 - 12;
    let btn_font = fonts.sans(28.0);
    let buttons = [
        ("Pass", PASS_BG, GREEN),
        ("Fail", FAIL_BG, RED),
        ("Skip", SURFACE, TEXT_MUTED),
    ];
    let mut bx = sx;
    for (text, fill, color) in buttons {
        draw_pill_button(
            &mut canvas,
            Bounds::from_origin(bx, btn_y, btn_w, 64),
            32,
            fill,
            Label::new(text, btn_font, color),
            16,
        )?;
        bx += btn_w + 12;
    }

    canvas.finish(ShotKind::Camera.file_name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::paint::BG;

    #[test]
    fn first_band_values() {
        // sin(1) = 0.84, sin(0) = 0, sin(2) = 0.91
        assert_eq!(noise_band(0), Color::rgb(23, 30, 19));
    }

    #[test]
    fn bands_truncate_toward_zero() {
        // y = 200: sin(4) = -0.757, sin(4) = -0.757, sin(7) = 0.657
        assert_eq!(noise_band(200), Color::rgb(8, 15, 17));
    }

    #[test]
    fn bands_stay_dark_and_green() {
        for y in (0..PREVIEW_H).step_by(BAND_STEP) {
            let c = noise_band(y);
            assert!(c.g >= 11 && c.g <= 49, "g={} at {}", c.g, y);
            assert!(c.r >= 6 && c.r <= 24);
            assert!(c.b >= 5 && c.b <= 19);
        }
    }

    #[test]
    fn lens_badge_covers_noise_opaquely() {
        let mut c = Canvas::new(800, 1000, BG);
        draw_noise(&mut c, 10, 10);
        rounded_rect(&mut c, Bounds::from_origin(26, 26, 100, 36), 18, Some(LENS_BADGE), None, 1).unwrap();
        assert_eq!(c.pixel(76, 44), Some(Color::rgb(40, 40, 40)));
    }

    #[test]
    fn noise_bands_tile_inside_preview_inset() {
        let mut c = Canvas::new(800, 1000, BG);
        draw_noise(&mut c, 10, 10);
        assert_eq!(c.pixel(200, 10), Some(noise_band(0)));
        assert_eq!(c.pixel(200, 17), Some(noise_band(0)));
        assert_eq!(c.pixel(200, 18), Some(noise_band(8)));
        assert_eq!(c.pixel(13, 10), Some(BG));
        assert_eq!(c.pixel(10 + PREVIEW_W - 4, 10), Some(noise_band(0)));
    }
}
