//! Runtime-generated monogram window icon.
//!
//! The window icon is not shipped as an asset; it is rasterized at startup
//! from the profile's initials: an indigo rounded square with up to two white
//! letters, mirroring the page brand. Letters come from a compact built-in
//! 5x7 glyph table scaled with nearest-neighbor (the stack carries no
//! standalone font rasterizer).

use egui::viewport::IconData;
use image::{Rgba, RgbaImage};

/// Edge length of the generated icon in pixels.
pub const ICON_SIZE: u32 = 64;

/// Corner radius of the branded square, relative to [`ICON_SIZE`] = 64.
const CORNER_RADIUS: f32 = 16.0;

const BRAND_FILL: Rgba<u8> = Rgba([79, 70, 229, 255]);
const GLYPH_FILL: Rgba<u8> = Rgba([255, 255, 255, 255]);

const GLYPH_COLS: u32 = 5;
const GLYPH_ROWS: u32 = 7;
const GLYPH_GAP: u32 = 1;

/// Build the window icon for the given monogram initials.
///
/// Characters outside `A-Z` are skipped; an empty monogram yields the plain
/// branded square.
pub fn window_icon(initials: &str) -> IconData {
    let image = render_monogram(initials, ICON_SIZE);
    let (width, height) = image.dimensions();
    IconData {
        rgba: image.into_raw(),
        width,
        height,
    }
}

fn render_monogram(initials: &str, size: u32) -> RgbaImage {
    let mut image = RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0]));
    let radius = CORNER_RADIUS * size as f32 / 64.0;
    for y in 0..size {
        for x in 0..size {
            if inside_rounded_square(x, y, size, radius) {
                image.put_pixel(x, y, BRAND_FILL);
            }
        }
    }

    let glyphs: Vec<&'static [u8; 7]> = initials.chars().filter_map(glyph).collect();
    if glyphs.is_empty() {
        return image;
    }

    let cells_wide = glyphs.len() as u32 * GLYPH_COLS + (glyphs.len() as u32 - 1) * GLYPH_GAP;
    let scale = glyph_scale(size, cells_wide);
    let total_w = cells_wide * scale;
    let total_h = GLYPH_ROWS * scale;
    let origin_x = (size - total_w) / 2;
    let origin_y = (size - total_h) / 2;

    for (index, rows) in glyphs.iter().enumerate() {
        let glyph_x = origin_x + index as u32 * (GLYPH_COLS + GLYPH_GAP) * scale;
        for (row, bits) in rows.iter().enumerate() {
            for col in 0..GLYPH_COLS {
                if bits & (1 << (GLYPH_COLS - 1 - col)) == 0 {
                    continue;
                }
                fill_cell(
                    &mut image,
                    glyph_x + col * scale,
                    origin_y + row as u32 * scale,
                    scale,
                );
            }
        }
    }
    image
}

/// Integer scale that keeps the monogram within roughly 70% of the width and
/// 60% of the height, so it clears the rounded corners.
fn glyph_scale(size: u32, cells_wide: u32) -> u32 {
    let by_width = size * 7 / 10 / cells_wide;
    let by_height = size * 6 / 10 / GLYPH_ROWS;
    by_width.min(by_height).max(1)
}

fn fill_cell(image: &mut RgbaImage, x: u32, y: u32, scale: u32) {
    for dy in 0..scale {
        for dx in 0..scale {
            let px = x + dx;
            let py = y + dy;
            if px < image.width() && py < image.height() {
                image.put_pixel(px, py, GLYPH_FILL);
            }
        }
    }
}

fn inside_rounded_square(x: u32, y: u32, size: u32, radius: f32) -> bool {
    let fx = x as f32 + 0.5;
    let fy = y as f32 + 0.5;
    let max = size as f32;
    let cx = fx.clamp(radius, max - radius);
    let cy = fy.clamp(radius, max - radius);
    let dx = fx - cx;
    let dy = fy - cy;
    dx * dx + dy * dy <= radius * radius
}

/// 5x7 uppercase glyphs, one byte per row, bit 4 = leftmost column.
fn glyph(c: char) -> Option<&'static [u8; 7]> {
    const A: [u8; 7] = [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11];
    const B: [u8; 7] = [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E];
    const C: [u8; 7] = [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E];
    const D: [u8; 7] = [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E];
    const E: [u8; 7] = [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F];
    const F: [u8; 7] = [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10];
    const G: [u8; 7] = [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F];
    const H: [u8; 7] = [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11];
    const I: [u8; 7] = [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E];
    const J: [u8; 7] = [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C];
    const K: [u8; 7] = [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11];
    const L: [u8; 7] = [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F];
    const M: [u8; 7] = [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11];
    const N: [u8; 7] = [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11];
    const O: [u8; 7] = [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E];
    const P: [u8; 7] = [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10];
    const Q: [u8; 7] = [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D];
    const R: [u8; 7] = [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11];
    const S: [u8; 7] = [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E];
    const T: [u8; 7] = [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04];
    const U: [u8; 7] = [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E];
    const V: [u8; 7] = [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04];
    const W: [u8; 7] = [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A];
    const X: [u8; 7] = [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11];
    const Y: [u8; 7] = [0x11, 0x11, 0x0A, 0x04, 0x04, 0x04, 0x04];
    const Z: [u8; 7] = [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F];

    match c {
        'A' => Some(&A),
        'B' => Some(&B),
        'C' => Some(&C),
        'D' => Some(&D),
        'E' => Some(&E),
        'F' => Some(&F),
        'G' => Some(&G),
        'H' => Some(&H),
        'I' => Some(&I),
        'J' => Some(&J),
        'K' => Some(&K),
        'L' => Some(&L),
        'M' => Some(&M),
        'N' => Some(&N),
        'O' => Some(&O),
        'P' => Some(&P),
        'Q' => Some(&Q),
        'R' => Some(&R),
        'S' => Some(&S),
        'T' => Some(&T),
        'U' => Some(&U),
        'V' => Some(&V),
        'W' => Some(&W),
        'X' => Some(&X),
        'Y' => Some(&Y),
        'Z' => Some(&Z),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_has_requested_dimensions() {
        let icon = window_icon("JN");
        assert_eq!(icon.width, ICON_SIZE);
        assert_eq!(icon.height, ICON_SIZE);
        assert_eq!(icon.rgba.len(), (ICON_SIZE * ICON_SIZE * 4) as usize);
    }

    #[test]
    fn corners_are_rounded_off() {
        let image = render_monogram("JN", ICON_SIZE);
        assert_eq!(image.get_pixel(0, 0)[3], 0);
        assert_eq!(image.get_pixel(ICON_SIZE - 1, 0)[3], 0);
        assert_eq!(image.get_pixel(0, ICON_SIZE - 1)[3], 0);
        assert_eq!(image.get_pixel(ICON_SIZE - 1, ICON_SIZE - 1)[3], 0);
        assert_eq!(
            *image.get_pixel(ICON_SIZE / 2, ICON_SIZE / 8),
            BRAND_FILL
        );
    }

    #[test]
    fn monogram_paints_glyph_pixels() {
        let with_monogram = render_monogram("JN", ICON_SIZE);
        let painted = with_monogram
            .pixels()
            .filter(|pixel| **pixel == GLYPH_FILL)
            .count();
        assert!(painted > 0);

        let blank = render_monogram("", ICON_SIZE);
        assert!(blank.pixels().all(|pixel| *pixel != GLYPH_FILL));
    }

    #[test]
    fn unsupported_characters_are_skipped() {
        let digits = render_monogram("42", ICON_SIZE);
        assert!(digits.pixels().all(|pixel| *pixel != GLYPH_FILL));
    }

    #[test]
    fn generation_is_deterministic() {
        assert_eq!(
            render_monogram("JN", ICON_SIZE).into_raw(),
            render_monogram("JN", ICON_SIZE).into_raw()
        );
    }
}
