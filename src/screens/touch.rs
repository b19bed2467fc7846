//! Screenshot 3: the 60-zone touch grid mid-sweep

use super::{new_canvas, ShotKind, PHONE_H, PHONE_W, PHONE_X, PHONE_Y};
use crate::rendering::paint::{GREEN, SURFACE, TEXT_MUTED};
use crate::rendering::{rounded_rect, text_center, Bounds, Canvas, FontBook, Screenshot};
use crate::widgets::{draw_marketing_header, draw_phone_frame};
use crate::Result;

pub const COLS: i32 = 6;
pub const ROWS: i32 = 10;
const GAP: i32 = 3;
const MARGIN: i32 = 8;
// Space under the grid for the counter
const COUNTER_ROOM: i32 = 80;

/// Whether a cell has been swiped: the first seven rows and the first
/// four cells of the eighth.
pub fn is_touched(row: i32, col: i32) -> bool {
    row < 7 || (row == 7 && col < 4)
}

/// Every touched `(row, col)` in row-major order.
pub fn touched_cells() -> Vec<(i32, i32)> {
    (0..ROWS)
        .flat_map(|r| (0..COLS).map(move |c| (r, c)))
        .filter(|&(r, c)| is_touched(r, c))
        .collect()
}

/// "46 / 60"
pub fn counter_text() -> String {
    format!("{} / {}", touched_cells().len(), ROWS * COLS)
}

/// Cell geometry for a grid filling the phone screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub x: i32,
    pub y: i32,
    pub cell_w: i32,
    pub cell_h: i32,
}

impl GridLayout {
    pub fn for_screen(x: i32, y: i32, w: i32, h: i32) -> Self {
        let grid_w = w - MARGIN * 2;
        let grid_h = h - MARGIN * 2 - COUNTER_ROOM;
        Self {
            x: x + MARGIN,
            y: y + MARGIN,
            cell_w: (grid_w - GAP * (COLS - 1)) / COLS,
            cell_h: (grid_h - GAP * (ROWS - 1)) / ROWS,
        }
    }

    pub fn cell(&self, row: i32, col: i32) -> Bounds {
        Bounds::from_origin(
            self.x + col * (self.cell_w + GAP),
            self.y + row * (self.cell_h + GAP),
            self.cell_w,
            self.cell_h,
        )
    }
}

pub fn draw_grid(canvas: &mut Canvas, layout: &GridLayout) -> Result<()> {
    for r in 0..ROWS {
        for c in 0..COLS {
            let color = if is_touched(r, c) { GREEN } else { SURFACE };
            rounded_rect(canvas, layout.cell(r, c), 6, Some(color), None, 1)?;
        }
    }
    Ok(())
}

pub fn build(fonts: &FontBook) -> Result<Screenshot> {
    let mut canvas = new_canvas();
    draw_marketing_header(
        &mut canvas,
        fonts,
        "Test Every Pixel",
        "On Your Screen",
        "60-zone touch grid verifies full screen responsiveness",
    );

    let (px, py, pw, ph) = (PHONE_X, PHONE_Y, PHONE_W, PHONE_H);
    draw_phone_frame(&mut canvas, px, py, pw, ph)?;
    draw_grid(&mut canvas, &GridLayout::for_screen(px, py, pw, ph))?;

    text_center(&mut canvas, &counter_text(), py + ph - 70, fonts.mono(32.0), TEXT_MUTED);

    canvas.finish(ShotKind::Touch.file_name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::paint::BG;

    #[test]
    fn forty_six_of_sixty_touched() {
        assert_eq!(touched_cells().len(), 46);
        assert_eq!(counter_text(), "46 / 60");
    }

    #[test]
    fn sweep_boundary() {
        assert!(is_touched(6, 5));
        assert!(is_touched(7, 3));
        assert!(!is_touched(7, 4));
        assert!(!is_touched(8, 0));
        assert_eq!(touched_cells().last(), Some(&(7, 3)));
    }

    #[test]
    fn grid_layout_on_phone() {
        let g = GridLayout::for_screen(PHONE_X, PHONE_Y, PHONE_W, PHONE_H);
        assert_eq!(g.cell_w, (1084 - 15) / 6);
        assert_eq!(g.cell_h, (2184 - 27) / 10);
        let last = g.cell(ROWS - 1, COLS - 1);
        assert!(last.x1 <= PHONE_X + PHONE_W - MARGIN);
        assert!(last.y1 <= PHONE_Y + PHONE_H - MARGIN - COUNTER_ROOM);
    }

    #[test]
    fn grid_colors_match_touch_set() {
        let mut c = Canvas::new(600, 1200, BG);
        let layout = GridLayout::for_screen(0, 0, 600, 1200);
        draw_grid(&mut c, &layout).unwrap();
        let mut green = 0;
        for r in 0..ROWS {
            for col in 0..COLS {
                let (x, y) = layout.cell(r, col).center();
                let px = c.pixel(x, y).unwrap();
                if px == GREEN {
                    green += 1;
                } else {
                    assert_eq!(px, SURFACE);
                }
            }
        }
        assert_eq!(green, 46);
    }
}
