//! Paint pad: a fixed-size raster canvas with pencil/eraser strokes,
//! whole-canvas undo/redo, and PNG save / any-image load.
//!
//! ```
//! use paint_pad::{CanvasConfig, Painter, Point, Rgba};
//!
//! let mut p = Painter::new(CanvasConfig { width: 100, height: 100, background: Rgba::WHITE });
//! p.pointer_down(Point::new(10, 10));
//! p.pointer_move(Point::new(20, 20));
//! p.pointer_up();
//! assert!(p.can_undo());
//! p.undo();
//! assert_eq!(p.canvas().count(Rgba::BLACK), 0);
//! ```

pub mod error;
pub mod history;
pub mod image_io;
pub mod painter;
pub mod raster;
pub mod stroke;
pub mod surface;
pub mod tool;
pub mod types;

pub use error::{Error, Result};
pub use painter::{Action, Affordances, CanvasConfig, InputEvent, Painter, Response};
pub use surface::Bitmap;
pub use tool::Tool;
pub use types::{Point, Rgba};
