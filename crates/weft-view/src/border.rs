#![forbid(unsafe_code)]

//! Border combinator.

use weft_core::geometry::{EdgeInsets, Rect};
use weft_render::AttributedBuffer;

use crate::view::{BuildInputs, Built, Interpolation, View};

/// The glyph set used to draw a border box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderGlyphs {
    /// Top-left corner.
    pub top_left: char,
    /// Top-right corner.
    pub top_right: char,
    /// Bottom-left corner.
    pub bottom_left: char,
    /// Bottom-right corner.
    pub bottom_right: char,
    /// Horizontal edge.
    pub horizontal: char,
    /// Vertical edge.
    pub vertical: char,
}

impl BorderGlyphs {
    /// Plain ASCII box: `+`, `-`, `|`.
    pub const ASCII: Self = Self {
        top_left: '+',
        top_right: '+',
        bottom_left: '+',
        bottom_right: '+',
        horizontal: '-',
        vertical: '|',
    };

    /// Unicode box drawing characters.
    pub const LINE: Self = Self {
        top_left: '┌',
        top_right: '┐',
        bottom_left: '└',
        bottom_right: '┘',
        horizontal: '─',
        vertical: '│',
    };
}

/// Builds its child inset by one cell on every side, then draws the border
/// box tightly around the child's actual returned rectangle.
#[derive(Debug, Clone)]
pub struct Border<C: View> {
    content: C,
    glyphs: BorderGlyphs,
}

impl<C: View> Border<C> {
    /// Create a border wrapper.
    pub const fn new(content: C, glyphs: BorderGlyphs) -> Self {
        Self { content, glyphs }
    }
}

impl<C: View> View for Border<C> {
    fn interpolation(&self) -> Box<dyn Interpolation> {
        Box::new(BorderInterpolation {
            content: self.content.interpolation(),
            glyphs: self.glyphs,
        })
    }
}

struct BorderInterpolation {
    content: Box<dyn Interpolation>,
    glyphs: BorderGlyphs,
}

impl Interpolation for BorderInterpolation {
    fn modify(&mut self, modifier: &crate::modifier::Modifier) {
        self.content.modify(modifier);
    }

    fn build(&mut self, inputs: &BuildInputs, buffer: &mut AttributedBuffer) -> Built {
        let inner = inputs.available.inset_by(EdgeInsets::all(1));
        let built = self.content.build(&inputs.with_available(inner), buffer);
        if built.rect.is_null() {
            return built;
        }

        let child = built.rect;
        let glyphs = self.glyphs;
        let vertical = glyphs.vertical.to_string();
        for y in child.min_y()..child.max_y() {
            buffer.set_chars(&vertical, None, Rect::new(child.min_x() - 1, y, 1, 1));
            buffer.set_chars(&vertical, None, Rect::new(child.max_x(), y, 1, 1));
        }

        let line: String = std::iter::repeat(glyphs.horizontal)
            .take(child.size.width.max(0) as usize)
            .collect();
        let top = format!("{}{line}{}", glyphs.top_left, glyphs.top_right);
        buffer.set_chars(
            &top,
            None,
            Rect::new(child.min_x() - 1, child.min_y() - 1, child.size.width + 2, 1),
        );
        // The bottom line closes with the bottom-left glyph on both ends.
        let bottom = format!("{}{line}{}", glyphs.bottom_left, glyphs.bottom_left);
        buffer.set_chars(
            &bottom,
            None,
            Rect::new(child.min_x() - 1, child.max_y(), child.size.width + 2, 1),
        );

        Built {
            rect: child.outset_by(EdgeInsets::all(1)),
            nodes: built.nodes,
        }
    }

    fn build_at(
        &mut self,
        inputs: &BuildInputs,
        buffer: &mut AttributedBuffer,
        position: usize,
    ) -> Built {
        assert!(position == 0, "child index {position} out of range for 1 subview");
        self.build(inputs, buffer)
    }
}
