#![forbid(unsafe_code)]

//! ANSI escape sequence generation helpers.
//!
//! Pure byte-generation functions for SGR (Select Graphic Rendition)
//! control sequences. No state tracking lives here; the buffer serializer
//! decides *when* to emit, this module decides *what bytes*.
//!
//! # Sequence Reference
//!
//! | Category | Sequence | Description |
//! |----------|----------|-------------|
//! | CSI | `ESC [ 0 m` | SGR reset |
//! | CSI | `ESC [ 30-37 m` / `ESC [ 90-97 m` | 16-color foreground |
//! | CSI | `ESC [ 40-47 m` / `ESC [ 100-107 m` | 16-color background |
//! | CSI | `ESC [ 38 ; 5 ; n m` | 256-palette foreground |
//! | CSI | `ESC [ 38 ; 2 ; r ; g ; b m` | RGB foreground |
//! | CSI | `ESC [ n ; n ; ... m` | attribute flags |

use std::io::{self, Write};

use weft_style::{Color, Style, StyleFlags};

/// SGR reset: `CSI 0 m`.
pub const SGR_RESET: &[u8] = b"\x1b[0m";

/// Write the SGR reset sequence.
#[inline]
pub fn sgr_reset<W: Write>(w: &mut W) -> io::Result<()> {
    w.write_all(SGR_RESET)
}

/// Ordered table of (flag, SGR on-code) pairs.
///
/// The serializer only ever re-applies whole styles after a reset, so the
/// corresponding off-codes are never needed.
pub const FLAG_TABLE: [(StyleFlags, u8); 8] = [
    (StyleFlags::BOLD, 1),
    (StyleFlags::DIM, 2),
    (StyleFlags::ITALIC, 3),
    (StyleFlags::UNDERLINE, 4),
    (StyleFlags::BLINK, 5),
    (StyleFlags::REVERSE, 7),
    (StyleFlags::STRIKETHROUGH, 9),
    (StyleFlags::HIDDEN, 8),
];

/// Write the SGR sequence for a foreground or background color.
pub fn sgr_color<W: Write>(w: &mut W, color: Color, background: bool) -> io::Result<()> {
    match (color.ansi_index(), color) {
        (Some(idx), _) => {
            // 30-37 / 90-97, shifted by 10 for backgrounds.
            let base: u16 = if idx < 8 { 30 } else { 90 - 8 };
            let code = base + u16::from(idx) + if background { 10 } else { 0 };
            write!(w, "\x1b[{code}m")
        }
        (None, Color::Ansi256(n)) => {
            let selector = if background { 48 } else { 38 };
            write!(w, "\x1b[{selector};5;{n}m")
        }
        (None, Color::Rgb(r, g, b)) => {
            let selector = if background { 48 } else { 38 };
            write!(w, "\x1b[{selector};2;{r};{g};{b}m")
        }
        (None, _) => unreachable!("named colors always have a palette index"),
    }
}

/// Write the SGR sequence enabling every set flag, as one `CSI n;...;n m`.
pub fn sgr_flags<W: Write>(w: &mut W, flags: StyleFlags) -> io::Result<()> {
    if flags.is_empty() {
        return Ok(());
    }
    w.write_all(b"\x1b[")?;
    let mut first = true;
    for (flag, code) in FLAG_TABLE {
        if flags.contains(flag) {
            if !first {
                w.write_all(b";")?;
            }
            write!(w, "{code}")?;
            first = false;
        }
    }
    w.write_all(b"m")
}

/// Write the full token sequence for a style: foreground, background, flags.
///
/// Does not emit a reset first; the caller owns attribute-state bookkeeping.
pub fn sgr_style<W: Write>(w: &mut W, style: &Style) -> io::Result<()> {
    if let Some(fg) = style.fg {
        sgr_color(w, fg, false)?;
    }
    if let Some(bg) = style.bg {
        sgr_color(w, bg, true)?;
    }
    sgr_flags(w, style.attrs)
}
