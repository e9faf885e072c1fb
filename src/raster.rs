// Software brush: a round stamp dabbed at every Bresenham step of a segment.
// Visual: a solid line `width` pixels thick with round ends; consecutive
// segments of one stroke join seamlessly because each end is a full disc.

use crate::surface::Bitmap;
use crate::tool::MAX_BRUSH_WIDTH;
use crate::types::{Point, Rgba};

/// Pixel offsets covered by a round brush of a given width, centred on the pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrushStamp {
    width: u32,
    offsets: Vec<(i32, i32)>,
}

impl BrushStamp {
    /// Build the disc for `width`, clamped to `1..=MAX_BRUSH_WIDTH`. Even widths
    /// sit half a pixel up-left of the pointer so that every row and column
    /// through the centre spans exactly `width` pixels.
    pub fn new(width: u32) -> Self {
        // <= MAX_BRUSH_WIDTH, so the i32 math below cannot overflow
        let w = width.clamp(1, MAX_BRUSH_WIDTH) as i32;
        let lo = -(w / 2);
        let hi = lo + w - 1;
        let c = (lo + hi) as f32 * 0.5;
        let r = w as f32 * 0.5;
        let r2 = r * r;

        let mut offsets = Vec::with_capacity((w * w) as usize);
        for dy in lo..=hi {
            for dx in lo..=hi {
                let fx = dx as f32 - c;
                let fy = dy as f32 - c;
                if fx * fx + fy * fy <= r2 {
                    offsets.push((dx, dy));
                }
            }
        }
        Self { width: w as u32, offsets }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    /// How far from the centre the stamp can reach, in pixels.
    fn reach(&self) -> i64 {
        i64::from(self.width) / 2 + 1
    }

    /// Dab the stamp at (cx,cy). Out-of-canvas pixels are skipped.
    pub fn dab(&self, bmp: &mut Bitmap, cx: i64, cy: i64, color: u32) {
        for &(dx, dy) in &self.offsets {
            let (Ok(x), Ok(y)) = (i32::try_from(cx + i64::from(dx)), i32::try_from(cy + i64::from(dy))) else {
                continue;
            };
            bmp.put(x, y, color);
        }
    }
}

/// Inclusive rectangle in i64 pixel space.
#[derive(Debug, Clone, Copy)]
struct ClipRect {
    min_x: i64,
    min_y: i64,
    max_x: i64,
    max_y: i64,
}

impl ClipRect {
    /// The canvas grown by `margin` on every side.
    fn around(bmp: &Bitmap, margin: i64) -> Self {
        let w = i64::try_from(bmp.width()).unwrap_or(i64::from(i32::MAX));
        let h = i64::try_from(bmp.height()).unwrap_or(i64::from(i32::MAX));
        Self { min_x: -margin, min_y: -margin, max_x: w - 1 + margin, max_y: h - 1 + margin }
    }

    fn contains(&self, x: i64, y: i64) -> bool {
        (self.min_x..=self.max_x).contains(&x) && (self.min_y..=self.max_y).contains(&y)
    }
}

/// Render one stroke segment from `from` to `to` with a round brush.
/// The segment is first clipped to the canvas widened by the brush reach, so
/// far off-canvas endpoints cost nothing.
pub fn draw_segment(bmp: &mut Bitmap, from: Point, to: Point, width: u32, color: Rgba) {
    let stamp = BrushStamp::new(width);
    let argb = color.to_argb();
    let bounds = ClipRect::around(bmp, stamp.reach());
    let Some((a, b)) = clip_segment(from, to, &bounds) else {
        return;
    };
    for_each_line_point(a, b, |x, y| stamp.dab(bmp, x, y, argb));
}

/// Liang-Barsky clip of `from`-`to` against `r`. Endpoints already inside are
/// kept exactly; clipped ones are rounded to the nearest pixel.
fn clip_segment(from: Point, to: Point, r: &ClipRect) -> Option<((i64, i64), (i64, i64))> {
    let (x0, y0) = (i64::from(from.x), i64::from(from.y));
    let (x1, y1) = (i64::from(to.x), i64::from(to.y));
    if r.contains(x0, y0) && r.contains(x1, y1) {
        return Some(((x0, y0), (x1, y1)));
    }

    let (dx, dy) = ((x1 - x0) as f64, (y1 - y0) as f64);
    let (mut t0, mut t1) = (0.0_f64, 1.0_f64);
    let edges = [
        (-dx, (x0 - r.min_x) as f64),
        (dx, (r.max_x - x0) as f64),
        (-dy, (y0 - r.min_y) as f64),
        (dy, (r.max_y - y0) as f64),
    ];
    for (p, q) in edges {
        if p == 0.0 {
            // parallel to this edge: either fully outside or unconstrained
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let t = q / p;
        if p < 0.0 {
            if t > t1 {
                return None;
            }
            t0 = t0.max(t);
        } else {
            if t < t0 {
                return None;
            }
            t1 = t1.min(t);
        }
    }

    let at = |t: f64| ((x0 as f64 + t * dx).round() as i64, (y0 as f64 + t * dy).round() as i64);
    Some((at(t0), at(t1)))
}

/// Visit every integer point of the line (x0,y0)–(x1,y1) using Bresenham.
fn for_each_line_point(from: (i64, i64), to: (i64, i64), mut visit: impl FnMut(i64, i64)) {
    let ((mut x0, mut y0), (x1, y1)) = (from, to);
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        visit(x0, y0);
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column_count(bmp: &Bitmap, x: i32, color: Rgba) -> usize {
        (0..bmp.height() as i32).filter(|&y| bmp.get(x, y) == Some(color)).count()
    }

    #[test]
    fn width_one_is_a_single_pixel() {
        assert_eq!(BrushStamp::new(1).offsets, vec![(0, 0)]);
        assert_eq!(BrushStamp::new(0).width(), 1);
    }

    #[test]
    fn horizontal_segment_has_brush_thickness() {
        for width in [1, 2, 5, 8, 20] {
            let mut bmp = Bitmap::new(100, 100, Rgba::WHITE);
            draw_segment(&mut bmp, Point::new(10, 50), Point::new(90, 50), width, Rgba::BLACK);
            assert_eq!(column_count(&bmp, 50, Rgba::BLACK), width as usize, "width {width}");
        }
    }

    #[test]
    fn diagonal_segment_is_continuous() {
        let mut bmp = Bitmap::new(30, 30, Rgba::WHITE);
        draw_segment(&mut bmp, Point::new(2, 3), Point::new(25, 17), 1, Rgba::BLACK);
        for x in 2..=25 {
            assert!(column_count(&bmp, x, Rgba::BLACK) >= 1, "gap at x={x}");
        }
        assert_eq!(bmp.get(2, 3), Some(Rgba::BLACK));
        assert_eq!(bmp.get(25, 17), Some(Rgba::BLACK));
    }

    #[test]
    fn stamp_width_is_capped() {
        assert_eq!(BrushStamp::new(u32::MAX).width(), MAX_BRUSH_WIDTH);
        assert_eq!(BrushStamp::new(100_000).width(), MAX_BRUSH_WIDTH);
        assert!(!BrushStamp::new(u32::MAX).offsets.is_empty());
    }

    #[test]
    fn extreme_endpoints_are_clipped_not_walked() {
        let mut bmp = Bitmap::new(10, 10, Rgba::WHITE);
        draw_segment(&mut bmp, Point::new(i32::MIN, 5), Point::new(i32::MAX, 5), 3, Rgba::BLACK);
        assert_eq!(bmp.count(Rgba::BLACK), 30);

        let mut bmp = Bitmap::new(10, 10, Rgba::WHITE);
        draw_segment(&mut bmp, Point::new(i32::MIN, i32::MIN), Point::new(i32::MAX, i32::MAX), 1, Rgba::BLACK);
        for i in 0..10 {
            assert_eq!(bmp.get(i, i), Some(Rgba::BLACK), "diagonal at {i}");
        }
    }

    #[test]
    fn segment_entirely_off_canvas_draws_nothing() {
        let mut bmp = Bitmap::new(10, 10, Rgba::WHITE);
        draw_segment(&mut bmp, Point::new(-1000, -50), Point::new(1000, -50), 5, Rgba::BLACK);
        draw_segment(&mut bmp, Point::new(i32::MAX, 0), Point::new(i32::MAX, 9), 5, Rgba::BLACK);
        assert_eq!(bmp.count(Rgba::BLACK), 0);
    }

    #[test]
    fn segment_partly_off_canvas_clips() {
        let mut bmp = Bitmap::new(10, 10, Rgba::WHITE);
        draw_segment(&mut bmp, Point::new(-20, 5), Point::new(30, 5), 3, Rgba::BLACK);
        assert_eq!(bmp.count(Rgba::BLACK), 30);
    }
}
