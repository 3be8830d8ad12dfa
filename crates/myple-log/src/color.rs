//! ANSI Select Graphic Rendition codes.
//!
//! Codes are fixed by the ANSI standard; the enums only name them.

use std::fmt;

/// Foreground colors, `30`..=`37`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Color {
    Black = 30,
    Red = 31,
    Green = 32,
    Yellow = 33,
    Blue = 34,
    Magenta = 35,
    Cyan = 36,
    White = 37,
}

/// Text attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Attr {
    Bold = 1,
    Italic = 3,
}

/// Resets all attributes.
pub const RESET: &str = "\x1b[0m";

impl Color {
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl Attr {
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl fmt::Display for Attr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
