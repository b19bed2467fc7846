#![cfg(feature = "system-fonts")]

use storeshots::rendering::paint::{BLACK, GREEN, WHITE};
use storeshots::rendering::{rounded_rect, text_center, Bounds, Canvas};
use storeshots::{FontBook, ShotKind, HEIGHT, WIDTH};

fn fonts() -> Option<FontBook> {
    match FontBook::from_system() {
        Ok(book) => Some(book),
        Err(e) => {
            println!("No system fonts available ({}); skipping.", e);
            None
        }
    }
}

#[test]
fn every_builder_produces_full_size_rgb() {
    let Some(fonts) = fonts() else { return };
    for kind in ShotKind::ALL {
        let shot = storeshots::render(kind, &fonts).expect("render");
        assert_eq!(shot.file_name, kind.file_name());
        assert_eq!((shot.width, shot.height), (WIDTH, HEIGHT));
        assert_eq!(&shot.png_data[0..8], b"\x89PNG\r\n\x1a\n");

        let decoded = image::load_from_memory(&shot.png_data).expect("decode");
        assert_eq!(decoded.color(), image::ColorType::Rgb8, "{}", kind);
        assert_eq!((decoded.width(), decoded.height()), (1284, 2778));
    }
}

#[test]
fn rounded_rect_fills_center() {
    let mut canvas = Canvas::new(WIDTH, HEIGHT, BLACK);
    let b = Bounds::from_origin(135, 830, 1020, 130);
    rounded_rect(&mut canvas, b, 16, Some(GREEN), None, 1).unwrap();
    let (cx, cy) = b.center();
    assert_eq!(canvas.pixel(cx, cy), Some(GREEN));
}

#[test]
fn headline_is_centered() {
    let Some(fonts) = fonts() else { return };
    let mut canvas = Canvas::new(WIDTH, 300, BLACK);
    let extent = text_center(&mut canvas, "True Condition", 40, fonts.sans(72.0), WHITE);

    let left = (0..WIDTH as i32)
        .find(|&x| (0..300).any(|y| canvas.pixel(x, y) != Some(BLACK)))
        .expect("text drawn");
    let expected = (WIDTH as i32 - extent.width()) / 2;
    assert!((left - expected).abs() <= 1, "left {} expected {}", left, expected);
}

#[test]
fn touch_screenshot_shows_sweep() {
    let Some(fonts) = fonts() else { return };
    let shot = storeshots::render(ShotKind::Touch, &fonts).unwrap();
    let img = shot.decode().unwrap();

    let layout = storeshots::screens::touch::GridLayout::for_screen(95, 440, 1100, 2280);
    let (x, y) = layout.cell(0, 0).center();
    assert_eq!(img.get_pixel(x as u32, y as u32).0, [48, 209, 88]);
    let (x, y) = layout.cell(9, 5).center();
    assert_eq!(img.get_pixel(x as u32, y as u32).0, [29, 29, 31]);
}
