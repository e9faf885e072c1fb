// Overlay drawn on the presented frame only (never on the canvas itself).
// Visual: a brush-size ring follows the mouse and a status line sits top-left.

use paint_pad::{Affordances, Bitmap, Point};

/// Draw a circle outline of diameter `size` centred on `at` (midpoint algorithm).
/// Visual: the brush preview, twice the brush width across.
pub fn draw_brush_ring(fb: &mut Bitmap, at: Point, size: u32, color: u32) {
    let r = (size / 2).max(1) as i32;
    let (mut x, mut y) = (r, 0);
    let mut err = 1 - r;
    while x >= y {
        for (dx, dy) in [(x, y), (y, x), (-y, x), (-x, y), (-x, -y), (-y, -x), (y, -x), (x, -y)] {
            fb.put(at.x + dx, at.y + dy, color);
        }
        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
    }
}

/// "PENCIL | SIZE 5 | UNDO Z REDO Y"; the undo/redo hints only appear while enabled.
pub fn status_line(a: &Affordances) -> String {
    let undo = if a.undo_enabled { "UNDO Z" } else { "" };
    let redo = if a.redo_enabled { "REDO Y" } else { "" };
    format!("{} | SIZE {} | {} {}", a.active_tool.label(), a.brush_preview / 2, undo, redo)
}

/* ---------- 5x7 bitmap font (just the glyphs the status line uses) ---------- */

/// Each u8 is a row; the low 5 bits are the pixels (bit 4 = leftmost).
fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch {
        '0' => g!(0b01110,0b10001,0b10011,0b10101,0b11001,0b10001,0b01110),
        '1' => g!(0b00100,0b01100,0b00100,0b00100,0b00100,0b00100,0b01110),
        '2' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b01000,0b11111),
        '3' => g!(0b11110,0b00001,0b00001,0b01110,0b00001,0b00001,0b11110),
        '4' => g!(0b00010,0b00110,0b01010,0b10010,0b11111,0b00010,0b00010),
        '5' => g!(0b11111,0b10000,0b11110,0b00001,0b00001,0b10001,0b01110),
        '6' => g!(0b00110,0b01000,0b10000,0b11110,0b10001,0b10001,0b01110),
        '7' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b01000,0b01000),
        '8' => g!(0b01110,0b10001,0b10001,0b01110,0b10001,0b10001,0b01110),
        '9' => g!(0b01110,0b10001,0b10001,0b01111,0b00001,0b00010,0b01100),

        'A' => g!(0b01110,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'C' => g!(0b01110,0b10001,0b10000,0b10000,0b10000,0b10001,0b01110),
        'D' => g!(0b11100,0b10010,0b10001,0b10001,0b10001,0b10010,0b11100),
        'E' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b11111),
        'I' => g!(0b01110,0b00100,0b00100,0b00100,0b00100,0b00100,0b01110),
        'L' => g!(0b10000,0b10000,0b10000,0b10000,0b10000,0b10000,0b11111),
        'N' => g!(0b10001,0b11001,0b10101,0b10011,0b10001,0b10001,0b10001),
        'O' => g!(0b01110,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'P' => g!(0b11110,0b10001,0b10001,0b11110,0b10000,0b10000,0b10000),
        'R' => g!(0b11110,0b10001,0b10001,0b11110,0b10100,0b10010,0b10001),
        'S' => g!(0b01111,0b10000,0b10000,0b01110,0b00001,0b00001,0b11110),
        'U' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'Y' => g!(0b10001,0b10001,0b01010,0b00100,0b00100,0b00100,0b00100),
        'Z' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b10000,0b11111),

        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),
        '|' => g!(0b00100,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),

        _ => None,
    }
}

/// Draw one glyph with a 1-pixel shadow so it reads on both dark and light paint.
fn draw_char_5x7(fb: &mut Bitmap, x: i32, y: i32, ch: char, color: u32, shadow: u32) {
    let Some(rows) = glyph5x7(ch) else { return };
    for (offset, c) in [(1, shadow), (0, color)] {
        for (ry, rowbits) in rows.iter().enumerate() {
            for rx in 0..5 {
                if rowbits & (1u8 << (4 - rx)) != 0 {
                    fb.put(x + rx + offset, y + ry as i32 + offset, c);
                }
            }
        }
    }
}

/// Draw a text string; each glyph is 5x7 with 1-pixel spacing. Unknown characters leave a gap.
pub fn draw_text_5x7(fb: &mut Bitmap, mut x: i32, y: i32, text: &str, color: u32, shadow: u32) {
    for ch in text.chars() {
        draw_char_5x7(fb, x, y, ch, color, shadow);
        x += 6;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paint_pad::{Rgba, Tool};

    #[test]
    fn status_line_only_uses_known_glyphs() {
        let a = Affordances { undo_enabled: true, redo_enabled: true, active_tool: Tool::Eraser, brush_preview: 40 };
        let line = status_line(&a);
        assert_eq!(line, "ERASER | SIZE 20 | UNDO Z REDO Y");
        assert!(line.chars().all(|c| glyph5x7(c).is_some()));
    }

    #[test]
    fn ring_is_centred_on_pointer() {
        let mut fb = Bitmap::new(40, 40, Rgba::WHITE);
        draw_brush_ring(&mut fb, Point::new(20, 20), 10, Rgba::BLACK.to_argb());
        assert_eq!(fb.get(25, 20), Some(Rgba::BLACK));
        assert_eq!(fb.get(15, 20), Some(Rgba::BLACK));
        assert_eq!(fb.get(20, 20), Some(Rgba::WHITE));
    }
}
