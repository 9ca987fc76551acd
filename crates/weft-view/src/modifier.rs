#![forbid(unsafe_code)]

//! Style and geometry modifiers, plus the fluent combinator surface.

use weft_core::geometry::{EdgeInsets, Point, Size};
use weft_style::{Color, StyleFlags};

use crate::border::{Border, BorderGlyphs};
use crate::padding::Padding;
use crate::view::{Interpolation, View};

/// A single style or geometry modification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    /// Set the foreground color.
    Foreground(Color),
    /// Set the background color.
    Background(Color),
    /// Add attribute flags.
    Attributes(StyleFlags),
    /// Translate the content by a delta; offsets compose additively.
    Offset(Point),
    /// Override the content's size.
    Frame(Size),
}

/// A view wrapped with one modifier.
///
/// Purely structural: its interpolation is the child's interpolation with
/// the modifier already applied.
#[derive(Debug, Clone)]
pub struct Modified<V: View> {
    content: V,
    modifier: Modifier,
}

impl<V: View> Modified<V> {
    /// Wrap `content` with `modifier`.
    pub const fn new(content: V, modifier: Modifier) -> Self {
        Self { content, modifier }
    }
}

impl<V: View> View for Modified<V> {
    fn interpolation(&self) -> Box<dyn Interpolation> {
        let mut interpolation = self.content.interpolation();
        interpolation.modify(&self.modifier);
        interpolation
    }
}

/// Fluent combinators available on every view.
pub trait ViewExt: View + Sized {
    /// Set the foreground color.
    fn foreground(self, color: Color) -> Modified<Self> {
        Modified::new(self, Modifier::Foreground(color))
    }

    /// Set the background color.
    fn background(self, color: Color) -> Modified<Self> {
        Modified::new(self, Modifier::Background(color))
    }

    /// Add attribute flags.
    fn attributes(self, flags: StyleFlags) -> Modified<Self> {
        Modified::new(self, Modifier::Attributes(flags))
    }

    /// Render bold.
    fn bold(self) -> Modified<Self> {
        self.attributes(StyleFlags::BOLD)
    }

    /// Translate by `(x, y)` relative to the parent-supplied origin.
    fn offset(self, x: i32, y: i32) -> Modified<Self> {
        Modified::new(self, Modifier::Offset(Point::new(x, y)))
    }

    /// Override the content size.
    fn frame(self, width: i32, height: i32) -> Modified<Self> {
        Modified::new(self, Modifier::Frame(Size::new(width, height)))
    }

    /// Surround with padding.
    fn padding(self, insets: impl Into<EdgeInsets>) -> Padding<Self> {
        Padding::new(self, insets.into())
    }

    /// Surround with a drawn border.
    fn bordered(self, glyphs: BorderGlyphs) -> Border<Self> {
        Border::new(self, glyphs)
    }
}

impl<V: View> ViewExt for V {}
