//! Screenshot 4: the landing page with feature cards

use super::{new_canvas, ShotKind, PHONE_H, PHONE_W, PHONE_X, PHONE_Y};
use crate::rendering::paint::{BLACK, TEXT_DIM, TEXT_SECONDARY, WHITE};
use crate::rendering::{text_center, Bounds, FontBook, Screenshot};
use crate::widgets::{
    draw_info_card, draw_marketing_header, draw_phone_frame, draw_pill_button, draw_status_bar,
    Label,
};
use crate::Result;

pub const FEATURES: [(&str, &str); 3] = [
    ("17 Functional Tests", "Camera, touch, audio, sensors, connectivity"),
    ("PDF Downloadable Report", "Timestamped results you can share"),
    ("0 Data Sent Nowhere", "All tests run locally on your device"),
];

const SUBTITLE: [&str; 3] = [
    "Run a comprehensive diagnostic",
    "on your iPhone. Get a shareable",
    "report with verified test results.",
];

pub fn build(fonts: &FontBook) -> Result<Screenshot> {
    let mut canvas = new_canvas();
    draw_marketing_header(
        &mut canvas,
        fonts,
        "Free. Private.",
        "On-Device.",
        "17 hardware tests, zero data leaves your phone",
    );

    let (px, py, pw, ph) = (PHONE_X, PHONE_Y, PHONE_W, PHONE_H);
    draw_phone_frame(&mut canvas, px, py, pw, ph)?;
    draw_status_bar(&mut canvas, fonts, px, py, pw)?;

    let sx = px + 60;
    let sy = py + 100;
    let sw = pw - 120;

    text_center(&mut canvas, "CLEARVUE", sy + 200, fonts.sans(24.0), TEXT_DIM);

    // Two-tone hero title
    let title_y = sy + 280;
    text_center(&mut canvas, "iPhone", title_y, fonts.sans(80.0), WHITE);
    text_center(&mut canvas, "Diagnostic", title_y + 95, fonts.sans(80.0), TEXT_SECONDARY);

    let sub_y = title_y + 230;
    for (i, line) in SUBTITLE.iter().enumerate() {
        text_center(&mut canvas, line, sub_y + i as i32 * 44, fonts.sans(30.0), TEXT_SECONDARY);
    }

    let (btn_w, btn_h) = (400, 72);
    let btn_x = px + (pw - btn_w) / 2;
    let btn_y = sub_y + 160;
    draw_pill_button(
        &mut canvas,
        Bounds::from_origin(btn_x, btn_y, btn_w, btn_h),
        btn_h / 2,
        WHITE,
        Label::new("Start Diagnostic", fonts.sans(30.0), BLACK),
        18,
    )?;

    let card_y = btn_y + 130;
    let (card_h, card_gap) = (100, 16);
    for (i, (title, desc)) in FEATURES.iter().enumerate() {
        let cy = card_y + i as i32 * (card_h + card_gap);
        draw_info_card(&mut canvas, fonts, Bounds::from_origin(sx, cy, sw, card_h), title, desc)?;
    }

    canvas.finish(ShotKind::Landing.file_name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cards_end_inside_phone() {
        let btn_y = PHONE_Y + 100 + 280 + 230 + 160;
        let last_card_bottom = btn_y + 130 + 2 * (100 + 16) + 100;
        assert!(last_card_bottom < PHONE_Y + PHONE_H);
    }
}
