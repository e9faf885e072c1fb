// What you SEE:
// • A white canvas. Hold Left Mouse to draw with the current tool.
// • P / E pick pencil / eraser; [ and ] shrink / grow the brush; 1-6 pick a colour.
// • Z undo, Y redo, C clear, S save PNG, O reload the --open image. ESC quits.
// • A ring at the cursor shows the brush preview; the top line shows tool + history.

mod hud;
mod window;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use minifb::Key;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use paint_pad::{Action, CanvasConfig, InputEvent, Painter, Rgba, Tool};
use window::{Drawer, PointerEdge, PointerTracker};

const PALETTE: [Rgba; 6] = [
    Rgba::BLACK,
    Rgba::opaque(0xe5, 0x39, 0x35), // red
    Rgba::opaque(0x43, 0xa0, 0x47), // green
    Rgba::opaque(0x1e, 0x88, 0xe5), // blue
    Rgba::opaque(0xfb, 0x8c, 0x00), // orange
    Rgba::opaque(0x8e, 0x24, 0xaa), // purple
];

#[derive(Parser, Debug)]
#[command(name = "paint-pad", about = "A tiny raster paint pad")]
struct Args {
    /// Canvas width in pixels
    #[arg(long, default_value_t = 800)]
    width: usize,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 600)]
    height: usize,

    /// Background colour (#RGB, #RRGGBB or #RRGGBBAA)
    #[arg(long, default_value = "#ffffff")]
    background: Rgba,

    /// Image to paste onto the canvas at startup (also reloaded with O)
    #[arg(long)]
    open: Option<PathBuf>,

    /// Where S writes the PNG
    #[arg(long, default_value = "drawing.png")]
    save_to: PathBuf,
}

/// Translate one key press into a painter event.
fn key_event(key: Key, painter: &Painter) -> Option<InputEvent> {
    let width = painter.tools().brush_width();
    let ev = match key {
        Key::P => InputEvent::SelectTool(Tool::Pencil),
        Key::E => InputEvent::SelectTool(Tool::Eraser),
        Key::C => InputEvent::Action(Action::Clear),
        Key::Z => InputEvent::Action(Action::Undo),
        Key::Y => InputEvent::Action(Action::Redo),
        Key::LeftBracket => InputEvent::SetBrushWidth(width.saturating_sub(1).max(1)),
        Key::RightBracket => InputEvent::SetBrushWidth(width.saturating_add(1)),
        Key::Key1 => InputEvent::SetColor(PALETTE[0]),
        Key::Key2 => InputEvent::SetColor(PALETTE[1]),
        Key::Key3 => InputEvent::SetColor(PALETTE[2]),
        Key::Key4 => InputEvent::SetColor(PALETTE[3]),
        Key::Key5 => InputEvent::SetColor(PALETTE[4]),
        Key::Key6 => InputEvent::SetColor(PALETTE[5]),
        _ => return None,
    };
    Some(ev)
}

/// Paste an image file onto the canvas. A missing file or a bad image is
/// logged and the session carries on with the canvas untouched.
fn load_file(painter: &mut Painter, path: &Path) -> bool {
    match painter.load_from(path) {
        Ok(()) => {
            info!(path = %path.display(), "loaded");
            true
        }
        Err(e) => {
            warn!(path = %path.display(), "load failed: {e}");
            false
        }
    }
}

/// Write the canvas as PNG. Failures are logged; the drawing stays on screen.
fn save_file(painter: &Painter, path: &Path) -> bool {
    match painter.save_to(path) {
        Ok(()) => true,
        Err(e) => {
            warn!(path = %path.display(), "save failed: {e}");
            false
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = CanvasConfig { width: args.width, height: args.height, background: args.background };
    let mut painter = Painter::new(config);
    if let Some(path) = &args.open {
        load_file(&mut painter, path);
    }

    let mut drawer = Drawer::new("Paint Pad", config.width, config.height).context("opening window")?;
    let mut pointer = PointerTracker::default();

    // Reusable screen buffer: the canvas plus overlays, rebuilt every frame.
    let mut screen = painter.canvas().clone();

    while drawer.is_open() && !drawer.esc_pressed() {
        /* 1) Keys: tool/colour/size changes and actions */
        for key in drawer.keys_pressed() {
            match key {
                Key::O => {
                    if let Some(path) = &args.open {
                        load_file(&mut painter, path);
                    }
                }
                Key::S => {
                    save_file(&painter, &args.save_to);
                }
                _ => {
                    let Some(ev) = key_event(key, &painter) else { continue };
                    painter.handle(ev)?;
                }
            }
        }

        /* 2) Mouse: pointer transitions drive the stroke */
        let pos = drawer.mouse_pos();
        for edge in pointer.update(pos, drawer.left_mouse_down()) {
            let ev = match edge {
                PointerEdge::Down(p) => InputEvent::PointerDown(p),
                PointerEdge::Move(p) => InputEvent::PointerMove(p),
                PointerEdge::Up => InputEvent::PointerUp,
                PointerEdge::Leave => InputEvent::PointerLeave,
            };
            painter.handle(ev)?;
        }

        /* 3) Compose: canvas, brush ring, status line */
        screen.clone_from(painter.canvas());
        let aff = painter.affordances();
        if let Some(p) = pos {
            hud::draw_brush_ring(&mut screen, p, aff.brush_preview, 0xFF_80_80_80);
        }
        hud::draw_text_5x7(&mut screen, 8, 8, &hud::status_line(&aff), 0xFF_20_20_20, 0xFF_E0_E0_E0);

        /* 4) Present */
        drawer.present(&screen)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use paint_pad::Point;

    fn drawn() -> Painter {
        let mut p = Painter::new(CanvasConfig { width: 20, height: 20, background: Rgba::WHITE });
        p.pointer_down(Point::new(2, 2));
        p.pointer_move(Point::new(15, 15));
        p.pointer_up();
        p
    }

    #[test]
    fn save_into_missing_directory_keeps_running() {
        let dir = tempfile::tempdir().unwrap();
        let p = drawn();
        let before = p.canvas().clone();
        assert!(!save_file(&p, &dir.path().join("no-such-dir").join("x.png")));
        assert_eq!(p.canvas(), &before);
    }

    #[test]
    fn reload_of_moved_file_keeps_canvas() {
        let dir = tempfile::tempdir().unwrap();
        let mut p = drawn();
        let before = p.canvas().clone();
        assert!(!load_file(&mut p, &dir.path().join("gone.png")));
        assert_eq!(p.canvas(), &before);
        assert_eq!(p.history().undo_len(), 1);
    }

    #[test]
    fn save_then_reload_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pad.png");
        let p = drawn();
        assert!(save_file(&p, &path));

        let mut fresh = Painter::new(CanvasConfig { width: 20, height: 20, background: Rgba::WHITE });
        assert!(load_file(&mut fresh, &path));
        assert_eq!(fresh.canvas(), p.canvas());
    }

    #[test]
    fn save_key_is_not_a_painter_event() {
        let p = drawn();
        assert_eq!(key_event(Key::S, &p), None);
        assert_eq!(key_event(Key::Z, &p), Some(InputEvent::Action(Action::Undo)));
    }
}
