// Pointer samples -> stroke segments.
// Explicit two-state machine; pointer-move only renders while Drawing.

use tracing::debug;

use crate::history::History;
use crate::raster::draw_segment;
use crate::surface::Bitmap;
use crate::tool::ToolState;
use crate::types::{Point, Rgba};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrokeState {
    #[default]
    Idle,
    /// A pointer is down; `last` is where the previous segment ended.
    Drawing { last: Point },
}

#[derive(Debug, Default)]
pub struct StrokeController {
    state: StrokeState,
}

impl StrokeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> StrokeState {
        self.state
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, StrokeState::Drawing { .. })
    }

    /// Start a stroke: snapshot the canvas once and remember the origin.
    /// Nothing is rendered until the pointer moves.
    pub fn pointer_down(&mut self, at: Point, canvas: &Bitmap, history: &mut History) {
        if let StrokeState::Drawing { last } = self.state {
            debug!(x = last.x, y = last.y, "stroke: stale session closed by new pointer-down");
        }
        history.begin_mutation(canvas);
        self.state = StrokeState::Drawing { last: at };
        debug!(x = at.x, y = at.y, "stroke: begin");
    }

    /// Render a segment from the last point to `at`. Ignored while Idle.
    /// Returns true if anything was drawn.
    pub fn pointer_move(&mut self, at: Point, canvas: &mut Bitmap, tools: &ToolState, background: Rgba) -> bool {
        let StrokeState::Drawing { last } = self.state else {
            return false;
        };
        draw_segment(canvas, last, at, tools.brush_width(), tools.paint_color(background));
        self.state = StrokeState::Drawing { last: at };
        true
    }

    /// End the stroke. No further rendering.
    pub fn pointer_up(&mut self) {
        if self.is_drawing() {
            debug!("stroke: end");
        }
        self.state = StrokeState::Idle;
    }

    /// Losing the pointer ends the stroke the same way a pointer-up does.
    pub fn pointer_leave(&mut self) {
        if self.is_drawing() {
            debug!("stroke: pointer left canvas, ending stroke");
        }
        self.state = StrokeState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Rig {
        canvas: Bitmap,
        history: History,
        tools: ToolState,
        stroke: StrokeController,
    }

    fn rig() -> Rig {
        Rig {
            canvas: Bitmap::new(40, 40, Rgba::WHITE),
            history: History::new(),
            tools: ToolState::default(),
            stroke: StrokeController::new(),
        }
    }

    impl Rig {
        fn mv(&mut self, x: i32, y: i32) -> bool {
            self.stroke.pointer_move(Point::new(x, y), &mut self.canvas, &self.tools, Rgba::WHITE)
        }
    }

    #[test]
    fn move_while_idle_is_ignored() {
        let mut r = rig();
        assert!(!r.mv(5, 5));
        assert_eq!(r.canvas.count(Rgba::BLACK), 0);
        assert_eq!(r.history.undo_len(), 0);
    }

    #[test]
    fn one_snapshot_per_stroke() {
        let mut r = rig();
        r.stroke.pointer_down(Point::new(5, 5), &r.canvas, &mut r.history);
        assert_eq!(r.canvas.count(Rgba::BLACK), 0);
        for i in 6..20 {
            assert!(r.mv(i, i));
        }
        r.stroke.pointer_up();
        assert_eq!(r.history.undo_len(), 1);
        assert!(r.canvas.count(Rgba::BLACK) > 0);
        assert!(!r.mv(30, 30));
    }

    #[test]
    fn pointer_leave_ends_stroke() {
        let mut r = rig();
        r.stroke.pointer_down(Point::new(5, 5), &r.canvas, &mut r.history);
        r.stroke.pointer_leave();
        assert_eq!(r.stroke.state(), StrokeState::Idle);
        let before = r.canvas.clone();
        assert!(!r.mv(20, 20));
        assert_eq!(r.canvas, before);
    }

    #[test]
    fn second_pointer_down_restarts_with_one_snapshot() {
        let mut r = rig();
        r.stroke.pointer_down(Point::new(5, 5), &r.canvas, &mut r.history);
        r.stroke.pointer_down(Point::new(20, 20), &r.canvas, &mut r.history);
        assert_eq!(r.history.undo_len(), 2);
        assert_eq!(r.stroke.state(), StrokeState::Drawing { last: Point::new(20, 20) });

        assert!(r.mv(30, 20));
        assert_eq!(r.history.undo_len(), 2);
        assert_eq!(r.canvas.get(25, 20), Some(Rgba::BLACK));
        // nothing joins the stale origin to the new one
        assert_eq!(r.canvas.get(12, 12), Some(Rgba::WHITE));
    }

    #[test]
    fn segments_chain_from_last_point() {
        let mut r = rig();
        r.tools.set_brush_width(1);
        r.stroke.pointer_down(Point::new(0, 10), &r.canvas, &mut r.history);
        r.mv(10, 10);
        r.mv(10, 20);
        assert_eq!(r.stroke.state(), StrokeState::Drawing { last: Point::new(10, 20) });
        assert_eq!(r.canvas.get(10, 15), Some(Rgba::BLACK));
        assert_eq!(r.canvas.get(5, 10), Some(Rgba::BLACK));
        assert_eq!(r.canvas.get(5, 15), Some(Rgba::WHITE));
    }
}
