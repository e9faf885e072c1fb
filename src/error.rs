// Error type for the paint pad.
// Every variant states *where* things went wrong.

use thiserror::Error;

/// Result alias used across the library.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The loaded bytes are not an image we can decode. Canvas and history are untouched.
    #[error("Image decode error: {0}")]
    Decode(String),

    /// Encoding the canvas as PNG failed.
    #[error("Image encode error: {0}")]
    Encode(String),

    /// A colour string was not `#RGB`, `#RRGGBB` or `#RRGGBBAA`.
    #[error("Invalid colour: {0:?}")]
    InvalidColor(String),

    /// Reading or writing an image file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Creating the window failed
    #[error("Window init error: {0}")]
    WindowInit(String),

    /// Updating the window buffer failed
    #[error("Window update error: {0}")]
    WindowUpdate(String),
}
