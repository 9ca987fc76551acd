#![forbid(unsafe_code)]

//! Canonical input event types.
//!
//! The engine consumes discrete events only: a key press is a single byte,
//! a mouse event is a position plus a button transition. Decoding raw
//! terminal byte sequences into these values is the driver's job.

/// Well-known key byte values.
///
/// Printable ASCII bytes (`0x20..=0x7e`) are passed through as-is.
pub mod key {
    /// Ctrl-C.
    pub const CTRL_C: u8 = 0x03;
    /// Horizontal tab.
    pub const TAB: u8 = 0x09;
    /// Line feed.
    pub const NEWLINE: u8 = 0x0a;
    /// Carriage return (Enter in raw mode).
    pub const RETURN: u8 = 0x0d;
    /// Escape.
    pub const ESCAPE: u8 = 0x1b;
    /// Space bar.
    pub const SPACE: u8 = 0x20;
    /// Backspace as sent by most terminals.
    pub const DELETE: u8 = 0x7f;
    /// Backspace (Ctrl-H).
    pub const BACKSPACE: u8 = 0x08;
}

/// Mouse button transition carried by a [`MouseEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonState {
    /// The primary button went down.
    Pressed,
    /// The primary button came back up.
    Released,
}

/// A mouse event in 0-indexed cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MouseEvent {
    /// Column of the event.
    pub x: i32,
    /// Row of the event.
    pub y: i32,
    /// Button transition.
    pub state: ButtonState,
}

impl MouseEvent {
    /// Create a new mouse event.
    #[must_use]
    pub const fn new(x: i32, y: i32, state: ButtonState) -> Self {
        Self { x, y, state }
    }
}
