// Pencil/eraser selection, colour and brush width.
// Pure configuration: nothing here touches the canvas or the history.

use tracing::{debug, warn};

use crate::types::Rgba;

pub const DEFAULT_BRUSH_WIDTH: u32 = 5;
/// Widest brush a stroke will use; wider requests are clamped to this.
pub const MAX_BRUSH_WIDTH: u32 = 512;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    #[default]
    Pencil,
    Eraser,
}

impl Tool {
    pub fn label(self) -> &'static str {
        match self {
            Tool::Pencil => "PENCIL",
            Tool::Eraser => "ERASER",
        }
    }
}

/// Current tool, colour and brush width; read by every new stroke segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolState {
    tool: Tool,
    color: Rgba,
    brush_width: u32, // always in 1..=MAX_BRUSH_WIDTH
}

impl Default for ToolState {
    fn default() -> Self {
        Self { tool: Tool::Pencil, color: Rgba::BLACK, brush_width: DEFAULT_BRUSH_WIDTH }
    }
}

impl ToolState {
    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    pub fn brush_width(&self) -> u32 {
        self.brush_width
    }

    /// Exactly one tool is active at a time.
    pub fn set_tool(&mut self, tool: Tool) {
        debug!(from = self.tool.label(), to = tool.label(), "tool: select");
        self.tool = tool;
    }

    /// Drives the active-tool indicator.
    pub fn is_active(&self, tool: Tool) -> bool {
        self.tool == tool
    }

    pub fn set_color(&mut self, color: Rgba) {
        debug!(%color, "tool: colour");
        self.color = color;
    }

    /// Store a new width for future strokes, clamped to `1..=MAX_BRUSH_WIDTH`.
    pub fn set_brush_width(&mut self, width: u32) {
        if width == 0 {
            warn!("tool: brush width 0 requested, clamping to 1");
        } else if width > MAX_BRUSH_WIDTH {
            warn!(requested = width, max = MAX_BRUSH_WIDTH, "tool: brush width too large, clamping");
        }
        self.brush_width = width.clamp(1, MAX_BRUSH_WIDTH);
        debug!(width = self.brush_width, "tool: brush width");
    }

    /// Side length of the on-screen brush preview: twice the width.
    pub fn brush_preview_size(&self) -> u32 {
        self.brush_width.saturating_mul(2)
    }

    /// Colour a segment is rendered in: the pencil colour, or `background` for the eraser.
    pub fn paint_color(&self, background: Rgba) -> Rgba {
        match self.tool {
            Tool::Pencil => self.color,
            Tool::Eraser => background,
        }
    }
}
