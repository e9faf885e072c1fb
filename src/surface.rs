// The canvas pixel buffer.
// A Bitmap has a fixed size chosen at creation; everything else (strokes,
// undo/redo, load) only rewrites its pixels or swaps it for a same-sized copy.

use crate::types::Rgba;

/// Fixed-size grid of 0xAARRGGBB pixels, row-major.
#[derive(Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: usize,
    height: usize,
    pixels: Vec<u32>, // length = width * height
}

impl Bitmap {
    /// A canvas of `width × height` filled with `fill`.
    pub fn new(width: usize, height: usize, fill: Rgba) -> Self {
        Self { width, height, pixels: vec![fill.to_argb(); width * height] }
    }

    /// Wrap an existing pixel vector. Returns `None` when the length does not match.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<u32>) -> Option<Self> {
        (pixels.len() == width * height).then_some(Self { width, height, pixels })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    /// Pixel at (x,y), or `None` outside the canvas.
    pub fn get(&self, x: i32, y: i32) -> Option<Rgba> {
        self.index(x, y).map(|i| Rgba::from_argb(self.pixels[i]))
    }

    /// Put a pixel if (x,y) is inside bounds; out-of-bounds writes are dropped.
    #[inline]
    pub fn put(&mut self, x: i32, y: i32, color: u32) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    /// Overwrite every pixel with `color`.
    pub fn fill(&mut self, color: Rgba) {
        self.pixels.fill(color.to_argb());
    }

    /// Copy out the rectangle at (x,y) of size w×h, clipped to the canvas.
    pub fn read_region(&self, x: usize, y: usize, w: usize, h: usize) -> Bitmap {
        let x0 = x.min(self.width);
        let y0 = y.min(self.height);
        let x1 = x.saturating_add(w).min(self.width);
        let y1 = y.saturating_add(h).min(self.height);
        let (rw, rh) = (x1 - x0, y1 - y0);

        let mut pixels = Vec::with_capacity(rw * rh);
        for row in y0..y1 {
            let start = row * self.width;
            pixels.extend_from_slice(&self.pixels[start + x0..start + x1]);
        }
        Bitmap { width: rw, height: rh, pixels }
    }

    /// Paste `src` with its top-left at (x,y). Parts falling outside are clipped;
    /// the rest of the canvas keeps its pixels.
    pub fn write_region(&mut self, x: usize, y: usize, src: &Bitmap) {
        if x >= self.width || y >= self.height {
            return;
        }
        let cols = src.width.min(self.width - x);
        let rows = src.height.min(self.height - y);
        for row in 0..rows {
            let dst = (y + row) * self.width + x;
            let from = row * src.width;
            self.pixels[dst..dst + cols].copy_from_slice(&src.pixels[from..from + cols]);
        }
    }

    /// Number of pixels equal to `color` (handy for inspecting strokes).
    pub fn count(&self, color: Rgba) -> usize {
        let c = color.to_argb();
        self.pixels.iter().filter(|&&p| p == c).count()
    }
}

// Pixel dumps are useless in assertion failures; print the shape instead.
impl std::fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bitmap")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}
