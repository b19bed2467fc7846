//! Screenshot 1: the finished diagnostic report (hero image)

use log::debug;

use super::{new_canvas, ShotKind, PHONE_H, PHONE_W, PHONE_X, PHONE_Y};
use crate::rendering::paint::{
    BLACK, GREEN, SURFACE, TEXT_DIM, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY, WHITE,
};
use crate::rendering::{rounded_rect, text_center, Bounds, FontBook, Screenshot};
use crate::widgets::{
    draw_marketing_header, draw_phone_frame, draw_pill_button, draw_status_bar, draw_test_row,
    Label, TestStatus,
};
use crate::Result;

const ROW_HEIGHT: i32 = 80;

/// Name, verification method and outcome for each of the 17 tests.
pub const TESTS: [(&str, &str, TestStatus); 17] = [
    ("Face ID", "Biometric API", TestStatus::Pass),
    ("Display", "Color panel inspection", TestStatus::Pass),
    ("Front Camera", "AI lens analysis", TestStatus::Pass),
    ("Rear Camera", "AI lens analysis", TestStatus::Pass),
    ("Touch Screen", "60-zone grid", TestStatus::Pass),
    ("Microphone", "Record & playback", TestStatus::Pass),
    ("Speaker", "Audio output", TestStatus::Pass),
    ("Wi-Fi", "Connectivity check", TestStatus::Pass),
    ("Cellular", "Carrier signal", TestStatus::Pass),
    ("Bluetooth", "Radio scan", TestStatus::Pass),
    ("NFC", "Tag reader session", TestStatus::NotAvailable),
    ("GPS", "Location fix", TestStatus::Pass),
    ("Proximity", "Sensor event", TestStatus::Pass),
    ("Motion Sensors", "Accel + gyro", TestStatus::Pass),
    ("Vibration", "Haptic feedback", TestStatus::Pass),
    ("Hardware Buttons", "Vol + side button", TestStatus::Pass),
    ("Silent Switch", "Ringer detection", TestStatus::NotAvailable),
];

fn count(status: TestStatus) -> usize {
    TESTS.iter().filter(|(_, _, s)| *s == status).count()
}

/// "15 / 17 tests passed"
pub fn score_line() -> String {
    format!("{} / {} tests passed", count(TestStatus::Pass), TESTS.len())
}

pub fn build(fonts: &FontBook) -> Result<Screenshot> {
    let mut canvas = new_canvas();
    draw_marketing_header(
        &mut canvas,
        fonts,
        "Know Your Phone's",
        "True Condition",
        "Get a verified diagnostic report in 2 minutes",
    );

    let (px, py, pw, ph) = (PHONE_X, PHONE_Y, PHONE_W, PHONE_H);
    draw_phone_frame(&mut canvas, px, py, pw, ph)?;
    draw_status_bar(&mut canvas, fonts, px, py, pw)?;

    let sx = px + 40;
    let sy = py + 100;
    let sw = pw - 80;

    text_center(&mut canvas, "CLEARVUE", sy, fonts.sans(20.0), TEXT_DIM);
    text_center(&mut canvas, "Diagnostic Complete", sy + 50, fonts.sans(52.0), WHITE);
    text_center(&mut canvas, &score_line(), sy + 130, fonts.sans(40.0), GREEN);
    let untestable = format!("({} not testable on this device)", count(TestStatus::NotAvailable));
    text_center(&mut canvas, &untestable, sy + 185, fonts.sans(24.0), TEXT_MUTED);
    text_center(&mut canvas, "23 Feb 2026 at 2:41 pm", sy + 230, fonts.mono(22.0), TEXT_DIM);

    // Device card
    let cy = sy + 290;
    rounded_rect(&mut canvas, Bounds::from_origin(sx, cy, sw, 130), 16, Some(SURFACE), None, 1)?;
    let info = fonts.sans(24.0);
    canvas.draw_text("iPhone 15 Pro", (sx + 24, cy + 16), info, TEXT_PRIMARY);
    canvas.draw_text("iOS 18.3.1", (sx + 24, cy + 50), info, TEXT_SECONDARY);
    canvas.draw_text("256 GB", (sx + sw / 2, cy + 16), info, TEXT_PRIMARY);
    canvas.draw_text("Battery: 96%", (sx + sw / 2, cy + 50), info, TEXT_SECONDARY);
    canvas.draw_text("IMEI: 35 291064 123456 7", (sx + 24, cy + 88), fonts.mono(22.0), TEXT_DIM);

    // Rows stop short of the button strip
    let list_bottom = py + ph - 120;
    let mut ty = cy + 160;
    for (name, method, status) in TESTS {
        if ty + ROW_HEIGHT > list_bottom {
            debug!("results list truncated before '{}'", name);
            break;
        }
        draw_test_row(&mut canvas, fonts, sx, ty, sw, name, method, status)?;
        ty += ROW_HEIGHT;
    }

    let btn_y = py + ph - 110;
    let btn_w = sw / 2 - 10;
    let btn_font = fonts.sans(26.0);
    draw_pill_button(
        &mut canvas,
        Bounds::from_origin(sx, btn_y, btn_w, 64),
        32,
        WHITE,
        Label::new("Share Report PDF", btn_font, BLACK),
        18,
    )?;
    draw_pill_button(
        &mut canvas,
        Bounds::new(sx + btn_w + 20, btn_y, sx + sw, btn_y + 64),
        32,
        SURFACE,
        Label::new("Run Again", btn_font, TEXT_SECONDARY),
        18,
    )?;

    canvas.finish(ShotKind::Results.file_name())
}
