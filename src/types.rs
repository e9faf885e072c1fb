// Core value types shared by the canvas, the brush and the host window.
// Pixels are packed as 0xAARRGGBB; minifb ignores the top byte, so the same
// buffer can be presented directly.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A pointer position in canvas pixel coordinates.
/// Coordinates may fall outside the canvas; rendering clips per pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Straight (non-premultiplied) 8-bit RGBA colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::opaque(0, 0, 0);
    pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Pack as 0xAARRGGBB (the Bitmap's storage format).
    #[inline]
    pub const fn to_argb(self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    #[inline]
    pub const fn from_argb(px: u32) -> Self {
        Self {
            a: (px >> 24) as u8,
            r: (px >> 16) as u8,
            g: (px >> 8) as u8,
            b: px as u8,
        }
    }

    /// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA` (leading `#` optional).
    pub fn from_hex(s: &str) -> Result<Self, Error> {
        let hex = s.trim().trim_start_matches('#');
        let bad = || Error::InvalidColor(s.to_string());
        // from_str_radix alone would also accept a leading '+'
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(bad());
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| bad());
        match hex.len() {
            3 => {
                // #abc is shorthand for #aabbcc
                let nib = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).map(|v| v * 17).map_err(|_| bad());
                Ok(Rgba::opaque(nib(0)?, nib(1)?, nib(2)?))
            }
            6 => Ok(Rgba::opaque(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Rgba::new(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => Err(bad()),
        }
    }
}

impl FromStr for Rgba {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rgba::from_hex(s)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argb_packing_keeps_channels() {
        let c = Rgba::new(0x12, 0x34, 0x56, 0x78);
        assert_eq!(c.to_argb(), 0x7812_3456);
        assert_eq!(Rgba::from_argb(0x7812_3456), c);
    }

    #[test]
    fn hex_forms() {
        assert_eq!("#000000".parse::<Rgba>().unwrap(), Rgba::BLACK);
        assert_eq!("#fff".parse::<Rgba>().unwrap(), Rgba::WHITE);
        assert_eq!("#ff000080".parse::<Rgba>().unwrap(), Rgba::new(255, 0, 0, 128));
        assert_eq!("00ff00".parse::<Rgba>().unwrap(), Rgba::opaque(0, 255, 0));
    }

    #[test]
    fn bad_hex_is_rejected() {
        assert!(matches!("#12345".parse::<Rgba>(), Err(Error::InvalidColor(_))));
        assert!(matches!("#gggggg".parse::<Rgba>(), Err(Error::InvalidColor(_))));
        assert!(matches!("#ééé".parse::<Rgba>(), Err(Error::InvalidColor(_))));
        assert!(matches!("#+f+f+f".parse::<Rgba>(), Err(Error::InvalidColor(_))));
        assert!(matches!("#+ff".parse::<Rgba>(), Err(Error::InvalidColor(_))));
    }

    #[test]
    fn display_is_hexa() {
        assert_eq!(Rgba::new(1, 2, 3, 255).to_string(), "#010203ff");
    }
}
