//! Composite widgets: recognizable pieces of iOS chrome built from the
//! rendering primitives.

use crate::rendering::paint::{
    BEZEL, BG, BLACK, FAIL_BG, GREEN, PASS_BG, RED, SEPARATOR, SURFACE, TEXT_MUTED,
    TEXT_PRIMARY, TEXT_SECONDARY, WHITE,
};
use crate::rendering::{fill_rect, hline, rounded_rect, text_center, text_center_in};
use crate::rendering::{Bounds, Canvas, Color, Font, FontBook};
use crate::Result;

/// Corner radius of the phone screen; the bezel sits 4 px outside it.
pub const SCREEN_RADIUS: i32 = 60;
const ISLAND_W: i32 = 200;
const ISLAND_H: i32 = 56;

/// Outcome badge shown on a test row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestStatus {
    Pass,
    Fail,
    NotAvailable,
}

impl TestStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TestStatus::Pass => "Pass",
            TestStatus::Fail => "Fail",
            TestStatus::NotAvailable => "N/A",
        }
    }

    /// Badge background and foreground.
    pub fn colors(&self) -> (Color, Color) {
        match self {
            TestStatus::Pass => (PASS_BG, GREEN),
            TestStatus::Fail => (FAIL_BG, RED),
            TestStatus::NotAvailable => (SURFACE, TEXT_MUTED),
        }
    }
}

/// Exact completion ratio for progress bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    done: u32,
    total: u32,
}

impl Progress {
    pub fn new(done: u32, total: u32) -> Self {
        let total = total.max(1);
        Self {
            done: done.min(total),
            total,
        }
    }

    pub fn done(&self) -> u32 {
        self.done
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.done == 0
    }

    /// `floor(w * done / total)`
    pub fn fill_width(&self, w: i32) -> i32 {
        (w.max(0) as i64 * self.done as i64 / self.total as i64) as i32
    }
}

/// A piece of text with its font and color.
#[derive(Debug, Clone, Copy)]
pub struct Label<'a> {
    pub text: &'a str,
    pub font: Font<'a>,
    pub color: Color,
}

impl<'a> Label<'a> {
    pub fn new(text: &'a str, font: Font<'a>, color: Color) -> Self {
        Self { text, font, color }
    }
}

/// The shared two-line headline plus subtitle above the phone.
pub fn draw_marketing_header(
    canvas: &mut Canvas,
    fonts: &FontBook,
    line1: &str,
    line2: &str,
    subtitle: &str,
) {
    text_center(canvas, line1, 120, fonts.sans(72.0), WHITE);
    text_center(canvas, line2, 210, fonts.sans(72.0), WHITE);
    text_center(canvas, subtitle, 320, fonts.sans(34.0), TEXT_SECONDARY);
}

/// Device outline: bezel ring, dark screen and dynamic island.
pub fn draw_phone_frame(canvas: &mut Canvas, x: i32, y: i32, w: i32, h: i32) -> Result<()> {
    rounded_rect(
        canvas,
        Bounds::new(x - 4, y - 4, x + w + 4, y + h + 4),
        SCREEN_RADIUS + 4,
        None,
        Some(BEZEL),
        3,
    )?;
    rounded_rect(canvas, Bounds::from_origin(x, y, w, h), SCREEN_RADIUS, Some(BG), None, 1)?;
    draw_dynamic_island(canvas, x, y, w)
}

/// The pill-shaped camera cutout centred 20 px below the screen top.
pub fn draw_dynamic_island(canvas: &mut Canvas, x: i32, y: i32, w: i32) -> Result<()> {
    let ix = x + (w - ISLAND_W) / 2;
    let iy = y + 20;
    rounded_rect(
        canvas,
        Bounds::from_origin(ix, iy, ISLAND_W, ISLAND_H),
        ISLAND_H / 2,
        Some(BLACK),
        None,
        1,
    )
}

/// Clock on the left; signal bars and battery on the right.
pub fn draw_status_bar(canvas: &mut Canvas, fonts: &FontBook, x: i32, y: i32, w: i32) -> Result<()> {
    canvas.draw_text("9:41", (x + 46, y + 24), fonts.sans(28.0), WHITE);

    let bx = x + w - 120;
    let by = y + 30;
    rounded_rect(canvas, Bounds::from_origin(bx, by, 44, 20), 4, None, Some(WHITE), 2)?;
    fill_rect(canvas, Bounds::new(bx + 44, by + 5, bx + 48, by + 15), WHITE);
    fill_rect(canvas, Bounds::new(bx + 3, by + 3, bx + 38, by + 17), GREEN);

    for i in 0..4 {
        let bar_h = 6 + i * 4;
        fill_rect(
            canvas,
            Bounds::new(bx - 70 + i * 10, by + 20 - bar_h, bx - 63 + i * 10, by + 20),
            WHITE,
        );
    }
    Ok(())
}

/// Thin rounded track with a white fill proportional to `progress`.
pub fn draw_progress_bar(
    canvas: &mut Canvas,
    x: i32,
    y: i32,
    w: i32,
    progress: Progress,
    h: i32,
) -> Result<()> {
    rounded_rect(canvas, Bounds::from_origin(x, y, w, h), h / 2, Some(SURFACE), None, 1)?;
    if !progress.is_empty() {
        let fill_w = progress.fill_width(w);
        rounded_rect(canvas, Bounds::from_origin(x, y, fill_w, h), h / 2, Some(WHITE), None, 1)?;
    }
    Ok(())
}

/// Draw `label` with its ink centred in `bounds` both ways, nudged by `dy`.
pub fn draw_label_in_box(canvas: &mut Canvas, bounds: Bounds, label: Label<'_>, dy: i32) {
    let extent = canvas.measure_text(label.text, label.font);
    let Some(ink) = extent.ink else {
        return;
    };
    let x = bounds.x0 + (bounds.width() - ink.width()) / 2 - ink.left;
    let y = bounds.y0 + (bounds.height() - ink.height()) / 2 - ink.top + dy;
    canvas.draw_text(label.text, (x, y), label.font, label.color);
}

/// Filled pill with its label centred horizontally, `text_dy` below the top.
pub fn draw_pill_button(
    canvas: &mut Canvas,
    bounds: Bounds,
    radius: i32,
    fill: Color,
    label: Label<'_>,
    text_dy: i32,
) -> Result<()> {
    rounded_rect(canvas, bounds, radius, Some(fill), None, 1)?;
    text_center_in(
        canvas,
        label.text,
        bounds.x0,
        bounds.width(),
        bounds.y0 + text_dy,
        label.font,
        label.color,
    );
    Ok(())
}

/// One line of the results list: name, verification method, status badge
/// and a separator underneath.
#[allow(clippy::too_many_arguments)]
pub fn draw_test_row(
    canvas: &mut Canvas,
    fonts: &FontBook,
    x: i32,
    y: i32,
    w: i32,
    name: &str,
    method: &str,
    status: TestStatus,
) -> Result<()> {
    canvas.draw_text(name, (x, y), fonts.sans(28.0), TEXT_PRIMARY);
    canvas.draw_text(method, (x, y + 36), fonts.sans(22.0), TEXT_MUTED);

    let (badge_bg, badge_fg) = status.colors();
    let (badge_w, badge_h) = (80, 34);
    let badge = Bounds::from_origin(x + w - badge_w, y + 8, badge_w, badge_h);
    rounded_rect(canvas, badge, badge_h / 2, Some(badge_bg), None, 1)?;
    draw_label_in_box(
        canvas,
        badge,
        Label::new(status.label(), fonts.sans(22.0), badge_fg),
        -2,
    );

    hline(canvas, x, x + w, y + 74, SEPARATOR);
    Ok(())
}

/// Rounded surface card with a title and a one-line description.
pub fn draw_info_card(
    canvas: &mut Canvas,
    fonts: &FontBook,
    bounds: Bounds,
    title: &str,
    description: &str,
) -> Result<()> {
    rounded_rect(canvas, bounds, 16, Some(SURFACE), None, 1)?;
    canvas.draw_text(title, (bounds.x0 + 24, bounds.y0 + 16), fonts.sans(26.0), TEXT_PRIMARY);
    canvas.draw_text(description, (bounds.x0 + 24, bounds.y0 + 52), fonts.sans(22.0), TEXT_MUTED);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_fill_is_floored() {
        let p = Progress::new(4, 17);
        assert_eq!(p.fill_width(1020), 240);
        assert_eq!(p.fill_width(1000), 1000 * 4 / 17);
        assert_eq!(Progress::new(0, 17).fill_width(1020), 0);
        assert_eq!(Progress::new(30, 17).fill_width(100), 100);
    }

    #[test]
    fn progress_bar_fill_ends_at_floor() {
        let mut c = Canvas::new(1200, 40, BG);
        let (x, y, w, h) = (50, 10, 1000, 6);
        let p = Progress::new(4, 17);
        draw_progress_bar(&mut c, x, y, w, p, h).unwrap();
        let mid = y + h / 2;
        let fill_w = p.fill_width(w);
        assert_eq!(fill_w, 235);
        assert_eq!(c.pixel(x, mid), Some(WHITE));
        assert_eq!(c.pixel(x + fill_w, mid), Some(WHITE));
        assert_eq!(c.pixel(x + fill_w + 1, mid), Some(SURFACE));
        assert_eq!(c.pixel(x + w, mid), Some(SURFACE));
    }

    #[test]
    fn empty_progress_draws_no_fill() {
        let mut c = Canvas::new(200, 20, BG);
        draw_progress_bar(&mut c, 10, 5, 150, Progress::new(0, 17), 6).unwrap();
        for y in 0..20 {
            for x in 0..200 {
                assert_ne!(c.pixel(x, y), Some(WHITE));
            }
        }
        assert_eq!(c.pixel(80, 8), Some(SURFACE));
    }

    #[test]
    fn phone_frame_layers() {
        let mut c = Canvas::new(400, 600, WHITE);
        let (x, y, w, h) = (50, 50, 300, 500);
        draw_phone_frame(&mut c, x, y, w, h).unwrap();
        // bezel ring on the left edge, screen inside, island at the top
        assert_eq!(c.pixel(x - 4, y + h / 2), Some(BEZEL));
        assert_eq!(c.pixel(x - 5, y + h / 2), Some(WHITE));
        assert_eq!(c.pixel(x + w / 2, y + h / 2), Some(BG));
        assert_eq!(c.pixel(x + w / 2, y + 20 + 28), Some(BLACK));
        assert_eq!(c.pixel(x + w / 2, y + 90), Some(BG));
    }

    #[cfg(feature = "system-fonts")]
    #[test]
    fn status_badge_ignores_rounded_face() {
        use crate::rendering::FontRole;

        let Ok(book) = FontBook::from_system() else {
            println!("No system fonts available; skipping.");
            return;
        };
        let sans = book.face(FontRole::Sans).clone();
        let mono = book.face(FontRole::Mono).clone();
        let swapped = FontBook::new(sans, mono.clone(), mono);

        let draw = |fonts: &FontBook| {
            let mut c = Canvas::new(700, 100, BG);
            draw_test_row(&mut c, fonts, 10, 10, 600, "Touch", "Grid tap test", TestStatus::NotAvailable)
                .unwrap();
            c
        };
        let (a, b) = (draw(&book), draw(&swapped));
        for y in 0..100 {
            for x in 0..700 {
                assert_eq!(a.pixel(x, y), b.pixel(x, y), "({x}, {y})");
            }
        }
    }

    #[test]
    fn status_colors() {
        assert_eq!(TestStatus::Pass.colors(), (PASS_BG, GREEN));
        assert_eq!(TestStatus::Fail.colors().1, RED);
        assert_eq!(TestStatus::NotAvailable.label(), "N/A");
    }
}
