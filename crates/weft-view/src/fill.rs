#![forbid(unsafe_code)]

//! Color fill leaf.

use weft_render::AttributedBuffer;
use weft_style::{Color, Style};

use crate::node::{self, NodeState};
use crate::view::{BuildInputs, Built, Interpolation, Modifications, View};

/// Fills its available rectangle with a background color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fill {
    color: Color,
}

impl Fill {
    /// Create a fill view.
    #[must_use]
    pub const fn new(color: Color) -> Self {
        Self { color }
    }
}

impl View for Fill {
    fn interpolation(&self) -> Box<dyn Interpolation> {
        Box::new(FillInterpolation {
            color: self.color,
            modifications: Modifications::default(),
        })
    }
}

struct FillInterpolation {
    color: Color,
    modifications: Modifications,
}

impl Interpolation for FillInterpolation {
    fn modify(&mut self, modifier: &crate::modifier::Modifier) {
        self.modifications.apply(modifier);
    }

    fn build(&mut self, inputs: &BuildInputs, buffer: &mut AttributedBuffer) -> Built {
        let rect = self.modifications.resolve(inputs.available);
        if !rect.size.is_empty() {
            let style = Style::new()
                .bg(self.color)
                .merge(self.modifications.attributes);
            let area = (rect.size.width * rect.size.height) as usize;
            buffer.set_chars(&" ".repeat(area), Some(style), rect);
        }

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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Node;
    use weft_core::geometry::Rect;

    #[test]
    fn fill_claims_available_rect_and_records_run() {
        let mut buffer = AttributedBuffer::new(8, 4);
        let inputs = BuildInputs {
            identifier: String::from("root"),
            parent: Node::new("root", NodeState::Passive),
            available: Rect::new(1, 1, 3, 2),
        };
        let built = Fill::new(Color::Blue).interpolation().build(&inputs, &mut buffer);
        assert_eq!(built.rect, Rect::new(1, 1, 3, 2));
        assert_eq!(buffer.runs().len(), 1);
        assert_eq!(buffer.runs()[0].style.bg, Some(Color::Blue));
    }
}
