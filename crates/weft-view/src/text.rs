#![forbid(unsafe_code)]

//! Text leaf.

use weft_core::geometry::{Rect, Size};
use weft_render::AttributedBuffer;

use crate::node::{self, NodeState};
use crate::view::{BuildInputs, Built, Interpolation, Modifications, View};

/// A run of characters, wrapped at a fixed width with no word breaking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    content: String,
}

impl Text {
    /// Create a text view.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

impl View for Text {
    fn interpolation(&self) -> Box<dyn Interpolation> {
        Box::new(TextInterpolation {
            content: self.content.clone(),
            modifications: Modifications::default(),
        })
    }
}

/// Intrinsic size of `length` characters in `available`: the width clamps
/// to the available width and the height is the number of wrapped rows
/// that fit.
pub(crate) fn text_size(length: i32, available: Size) -> Size {
    let width = length.min(available.width).max(0);
    if width == 0 || available.width <= 0 {
        return Size::ZERO;
    }
    let rows = (length + available.width - 1) / available.width;
    Size::new(width, rows.min(available.height).max(0))
}

struct TextInterpolation {
    content: String,
    modifications: Modifications,
}

impl Interpolation for TextInterpolation {
    fn modify(&mut self, modifier: &crate::modifier::Modifier) {
        self.modifications.apply(modifier);
    }

    fn build(&mut self, inputs: &BuildInputs, buffer: &mut AttributedBuffer) -> Built {
        let resolved = self.modifications.resolve(inputs.available);
        let size = if self.modifications.has_explicit_size() {
            resolved.size
        } else {
            let length = self.content.chars().count() as i32;
            text_size(length, resolved.size)
        };
        let rect = Rect {
            origin: resolved.origin,
            size,
        };
        buffer.set_chars(&self.content, self.modifications.style(), rect);

        let node = node::resolve_child(&inputs.parent, &inputs.identifier, || NodeState::Passive);
        {
            let mut n = node.borrow_mut();
            if !matches!(n.state(), NodeState::Passive) {
                *n.state_mut() = NodeState::Passive;
            }
            n.set_rect(rect);
        }
        Built {
            rect,
            nodes: vec![node],
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
