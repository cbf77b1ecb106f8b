#![allow(dead_code)]

use manga_panels::image::BinaryMask;

/// Panel rectangle `(x, y, width, height)` in page pixels.
pub type Panel = (usize, usize, usize, usize);

/// Four panels in two rows on a 400x600 page.
pub const GRID_2X2: [Panel; 4] = [
    (20, 20, 170, 270),
    (210, 20, 170, 270),
    (20, 310, 170, 270),
    (210, 310, 170, 270),
];

pub const PAGE_W: usize = 400;
pub const PAGE_H: usize = 600;

/// White page with black panel frames of `border` pixels around light gray
/// interiors.
pub fn framed_page(width: usize, height: usize, panels: &[Panel], border: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "page dimensions must be positive");
    let mut img = vec![255u8; width * height];
    for &(px, py, pw, ph) in panels {
        assert!(px + pw <= width && py + ph <= height, "panel outside page");
        for y in py..py + ph {
            for x in px..px + pw {
                let edge = x < px + border
                    || x >= px + pw - border
                    || y < py + border
                    || y >= py + ph - border;
                img[y * width + x] = if edge { 0 } else { 200 };
            }
        }
    }
    img
}

/// Black page with solid white panels.
pub fn inverted_page(width: usize, height: usize, panels: &[Panel]) -> Vec<u8> {
    let mut img = vec![0u8; width * height];
    for &(px, py, pw, ph) in panels {
        for y in py..py + ph {
            img[y * width + px..y * width + px + pw].fill(255);
        }
    }
    img
}

/// Mask from ASCII art: `#` is foreground, anything else background.
pub fn mask_from_ascii(rows: &[&str]) -> BinaryMask {
    let h = rows.len();
    let w = rows.first().map_or(0, |r| r.len());
    assert!(rows.iter().all(|r| r.len() == w), "ragged ASCII mask");
    BinaryMask::from_fn(w, h, |x, y| rows[y].as_bytes()[x] == b'#')
}
