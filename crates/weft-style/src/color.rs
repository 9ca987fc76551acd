#![forbid(unsafe_code)]

//! Terminal colors.

/// A terminal color.
///
/// The 16 named variants map to the standard ANSI palette; `Ansi256` selects
/// from the extended 256-color palette and `Rgb` is 24-bit true color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Black (index 0).
    Black,
    /// Red (index 1).
    Red,
    /// Green (index 2).
    Green,
    /// Yellow (index 3).
    Yellow,
    /// Blue (index 4).
    Blue,
    /// Magenta (index 5).
    Magenta,
    /// Cyan (index 6).
    Cyan,
    /// White (index 7).
    White,
    /// Bright black (index 8).
    BrightBlack,
    /// Bright red (index 9).
    BrightRed,
    /// Bright green (index 10).
    BrightGreen,
    /// Bright yellow (index 11).
    BrightYellow,
    /// Bright blue (index 12).
    BrightBlue,
    /// Bright magenta (index 13).
    BrightMagenta,
    /// Bright cyan (index 14).
    BrightCyan,
    /// Bright white (index 15).
    BrightWhite,
    /// Extended 256-color palette entry.
    Ansi256(u8),
    /// 24-bit RGB color.
    Rgb(u8, u8, u8),
}

impl Color {
    /// Palette index for the 16 named ANSI colors, `None` otherwise.
    #[must_use]
    pub const fn ansi_index(self) -> Option<u8> {
        match self {
            Self::Black => Some(0),
            Self::Red => Some(1),
            Self::Green => Some(2),
            Self::Yellow => Some(3),
            Self::Blue => Some(4),
            Self::Magenta => Some(5),
            Self::Cyan => Some(6),
            Self::White => Some(7),
            Self::BrightBlack => Some(8),
            Self::BrightRed => Some(9),
            Self::BrightGreen => Some(10),
            Self::BrightYellow => Some(11),
            Self::BrightBlue => Some(12),
            Self::BrightMagenta => Some(13),
            Self::BrightCyan => Some(14),
            Self::BrightWhite => Some(15),
            Self::Ansi256(_) | Self::Rgb(..) => None,
        }
    }

    /// Whether this is one of the eight bright palette colors.
    #[must_use]
    pub const fn is_bright(self) -> bool {
        matches!(self.ansi_index(), Some(idx) if idx >= 8)
    }
}
