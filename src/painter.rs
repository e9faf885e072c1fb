//! The paint pad controller.
//!
//! [`Painter`] owns the canvas, the undo/redo history, the tool settings and
//! the stroke state machine. Hosts feed it [`InputEvent`]s and read back
//! [`Affordances`] to enable buttons and highlight the active tool.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::error::Result;
use crate::history::History;
use crate::image_io;
use crate::stroke::{StrokeController, StrokeState};
use crate::surface::Bitmap;
use crate::tool::{Tool, ToolState};
use crate::types::{Point, Rgba};

/// Canvas size and background, fixed for the lifetime of a [`Painter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasConfig {
    pub width: usize,
    pub height: usize,
    /// Initial fill, eraser colour and clear colour.
    pub background: Rgba,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self { width: 800, height: 600, background: Rgba::WHITE }
    }
}

/// Button-style actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Clear,
    Undo,
    Redo,
    Save,
}

/// Everything a host can tell the painter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    PointerDown(Point),
    PointerMove(Point),
    PointerUp,
    /// The pointer left the canvas; ends any stroke in progress.
    PointerLeave,
    SelectTool(Tool),
    SetColor(Rgba),
    SetBrushWidth(u32),
    Action(Action),
    /// Raw bytes of a file the user picked.
    FileSelected(Vec<u8>),
}

/// What handling an event produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    None,
    /// PNG bytes of the canvas, from [`Action::Save`].
    Saved(Vec<u8>),
}

/// State-driven UI hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Affordances {
    pub undo_enabled: bool,
    pub redo_enabled: bool,
    pub active_tool: Tool,
    /// Side of the brush preview square, in pixels (twice the brush width).
    pub brush_preview: u32,
}

#[derive(Debug)]
pub struct Painter {
    config: CanvasConfig,
    canvas: Bitmap,
    history: History,
    tools: ToolState,
    stroke: StrokeController,
}

impl Painter {
    /// A blank canvas filled with the configured background.
    pub fn new(config: CanvasConfig) -> Self {
        info!(width = config.width, height = config.height, "painter: new canvas");
        Self {
            canvas: Bitmap::new(config.width, config.height, config.background),
            config,
            history: History::new(),
            tools: ToolState::default(),
            stroke: StrokeController::new(),
        }
    }

    pub fn canvas(&self) -> &Bitmap {
        &self.canvas
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn stroke_state(&self) -> StrokeState {
        self.stroke.state()
    }

    /// Dispatch one input event.
    ///
    /// Only [`InputEvent::FileSelected`] and [`Action::Save`] can fail; a failed
    /// load leaves the canvas and history exactly as they were.
    pub fn handle(&mut self, event: InputEvent) -> Result<Response> {
        match event {
            InputEvent::PointerDown(p) => self.pointer_down(p),
            InputEvent::PointerMove(p) => self.pointer_move(p),
            InputEvent::PointerUp => self.pointer_up(),
            InputEvent::PointerLeave => self.pointer_leave(),
            InputEvent::SelectTool(t) => self.set_tool(t),
            InputEvent::SetColor(c) => self.set_color(c),
            InputEvent::SetBrushWidth(w) => self.set_brush_width(w),
            InputEvent::Action(Action::Clear) => self.clear(),
            InputEvent::Action(Action::Undo) => {
                self.undo();
            }
            InputEvent::Action(Action::Redo) => {
                self.redo();
            }
            InputEvent::Action(Action::Save) => return self.save_png().map(Response::Saved),
            InputEvent::FileSelected(bytes) => self.load(&bytes)?,
        }
        Ok(Response::None)
    }

    /* ---------- stroke lifecycle ---------- */

    pub fn pointer_down(&mut self, at: Point) {
        self.stroke.pointer_down(at, &self.canvas, &mut self.history);
    }

    pub fn pointer_move(&mut self, at: Point) {
        self.stroke.pointer_move(at, &mut self.canvas, &self.tools, self.config.background);
    }

    pub fn pointer_up(&mut self) {
        self.stroke.pointer_up();
    }

    pub fn pointer_leave(&mut self) {
        self.stroke.pointer_leave();
    }

    /* ---------- tool settings (never touch history) ---------- */

    pub fn set_tool(&mut self, tool: Tool) {
        self.tools.set_tool(tool);
    }

    pub fn set_color(&mut self, color: Rgba) {
        self.tools.set_color(color);
    }

    pub fn set_brush_width(&mut self, width: u32) {
        self.tools.set_brush_width(width);
    }

    /* ---------- history ---------- */

    /// Returns false if there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        self.stroke.pointer_up();
        self.history.undo(&mut self.canvas)
    }

    /// Returns false if there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        self.stroke.pointer_up();
        self.history.redo(&mut self.canvas)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /* ---------- whole-canvas edits and image I/O ---------- */

    /// Fill the canvas with the background colour (undoable).
    pub fn clear(&mut self) {
        self.stroke.pointer_up();
        self.history.begin_mutation(&self.canvas);
        self.canvas.fill(self.config.background);
        info!("painter: cleared");
    }

    /// PNG bytes of the current canvas. Canvas and history are untouched.
    pub fn save_png(&self) -> Result<Vec<u8>> {
        let png = image_io::encode_png(&self.canvas)?;
        info!(bytes = png.len(), "painter: saved PNG");
        Ok(png)
    }

    /// Decode `bytes` and paste the image at the origin (undoable).
    /// Pixels past the decoded image keep their current values. On decode
    /// failure nothing changes and `Error::Decode` is returned.
    pub fn load(&mut self, bytes: &[u8]) -> Result<()> {
        let decoded = match image_io::decode(bytes).and_then(|img| image_io::to_bitmap(&img)) {
            Ok(bmp) => bmp,
            Err(e) => {
                warn!(error = %e, "painter: load rejected");
                return Err(e);
            }
        };
        self.stroke.pointer_up();
        self.history.begin_mutation(&self.canvas);
        self.canvas.write_region(0, 0, &decoded);
        info!(width = decoded.width(), height = decoded.height(), "painter: loaded image");
        Ok(())
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let png = self.save_png()?;
        fs::write(path.as_ref(), png)?;
        info!(path = %path.as_ref().display(), "painter: wrote file");
        Ok(())
    }

    pub fn load_from(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let bytes = fs::read(path.as_ref())?;
        self.load(&bytes)
    }

    pub fn affordances(&self) -> Affordances {
        Affordances {
            undo_enabled: self.history.can_undo(),
            redo_enabled: self.history.can_redo(),
            active_tool: self.tools.tool(),
            brush_preview: self.tools.brush_preview_size(),
        }
    }
}

impl Default for Painter {
    fn default() -> Self {
        Self::new(CanvasConfig::default())
    }
}
