// Host window for the paint pad.
// Visual: a window the size of the canvas; the mouse draws, keys switch tools.

use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

use paint_pad::{Bitmap, Error, Point};

pub struct Drawer {
    window: Window, // the on-screen window you see
}

impl Drawer {
    /// Create a window sized to the canvas.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(60);
        Ok(Self { window })
    }

    /// Push the frame to the screen. minifb ignores the alpha byte of each pixel.
    pub fn present(&mut self, frame: &Bitmap) -> Result<(), Error> {
        self.window
            .update_with_buffer(frame.pixels(), frame.width(), frame.height())
            .map_err(|e| Error::WindowUpdate(e.to_string()))
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Mouse position in canvas pixels, or `None` while the pointer is outside the window.
    pub fn mouse_pos(&self) -> Option<Point> {
        self.window
            .get_mouse_pos(MouseMode::Discard)
            .map(|(x, y)| Point::new(x.floor() as i32, y.floor() as i32))
    }

    pub fn left_mouse_down(&self) -> bool {
        self.window.get_mouse_down(MouseButton::Left)
    }

    /// Keys that went down since the last frame (no auto-repeat).
    pub fn keys_pressed(&self) -> Vec<Key> {
        self.window.get_keys_pressed(KeyRepeat::No)
    }
}

/// Tracks the left button across frames and turns raw mouse state into
/// pointer-down / move / up / leave transitions.
#[derive(Debug, Default)]
pub struct PointerTracker {
    was_down: bool,
    last_pos: Option<Point>,
}

/// One frame's pointer transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEdge {
    Down(Point),
    Move(Point),
    Up,
    Leave,
}

impl PointerTracker {
    pub fn update(&mut self, pos: Option<Point>, down: bool) -> Vec<PointerEdge> {
        let mut edges = Vec::new();
        match pos {
            None => {
                if self.last_pos.is_some() {
                    edges.push(PointerEdge::Leave);
                }
            }
            Some(p) => {
                if down && !self.was_down {
                    edges.push(PointerEdge::Down(p));
                } else if down && self.last_pos != Some(p) {
                    edges.push(PointerEdge::Move(p));
                } else if !down && self.was_down {
                    edges.push(PointerEdge::Up);
                }
            }
        }
        self.was_down = down;
        self.last_pos = pos;
        edges
    }
}
