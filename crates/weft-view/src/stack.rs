#![forbid(unsafe_code)]

//! Vertical stack combinator.

use weft_core::geometry::Rect;
use weft_render::AttributedBuffer;

use crate::view::{BuildInputs, Built, Interpolation, View};

/// Stacks its content's subviews into equal-height horizontal bands.
///
/// The available height is split by integer division; remainder rows are
/// not distributed, so the bands may sum to less than the available
/// height.
#[derive(Debug, Clone)]
pub struct VStack<C: View> {
    content: C,
}

impl<C: View> VStack<C> {
    /// Create a vertical stack over `content`.
    pub const fn new(content: C) -> Self {
        Self { content }
    }
}

impl<C: View> View for VStack<C> {
    fn interpolation(&self) -> Box<dyn Interpolation> {
        Box::new(StackInterpolation {
            content: self.content.interpolation(),
        })
    }
}

struct StackInterpolation {
    content: Box<dyn Interpolation>,
}

impl Interpolation for StackInterpolation {
    fn modify(&mut self, modifier: &crate::modifier::Modifier) {
        self.content.modify(modifier);
    }

    fn subviews(&self) -> usize {
        self.content.subviews()
    }

    fn build(&mut self, inputs: &BuildInputs, buffer: &mut AttributedBuffer) -> Built {
        let count = self.content.subviews();
        if count == 0 {
            return Built::empty();
        }
        let available = inputs.available;
        let band_height = available.size.height / count as i32;

        let mut rect = Rect::NULL;
        let mut nodes = Vec::new();
        for position in 0..count {
            let band = Rect::new(
                available.min_x(),
                available.min_y() + band_height * position as i32,
                available.size.width,
                band_height,
            );
            let built = self
                .content
                .build_at(&inputs.with_available(band), buffer, position);
            rect = rect.union(&built.rect);
            nodes.extend(built.nodes);
        }
        Built { rect, nodes }
    }

    fn build_at(
        &mut self,
        inputs: &BuildInputs,
        buffer: &mut AttributedBuffer,
        position: usize,
    ) -> Built {
        self.content.build_at(inputs, buffer, position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Node, NodeState};
    use crate::text::Text;

    fn build(view: &dyn View, available: Rect) -> (AttributedBuffer, Built) {
        let mut buffer = AttributedBuffer::new(12, 9);
        let inputs = BuildInputs {
            identifier: String::from("root"),
            parent: Node::new("root", NodeState::Passive),
            available,
        };
        let built = view.interpolation().build(&inputs, &mut buffer);
        (buffer, built)
    }

    #[test]
    fn subviews_reports_content_count() {
        let stack = VStack::new((Text::new("a"), Text::new("b"), Text::new("c")));
        assert_eq!(stack.interpolation().subviews(), 3);
        assert_eq!(VStack::new(Text::new("a")).interpolation().subviews(), 1);
    }

    #[test]
    fn splits_into_equal_bands() {
        let stack = VStack::new((Text::new("a"), Text::new("b"), Text::new("c")));
        let (buffer, built) = build(&stack, Rect::new(0, 0, 12, 9));
        assert_eq!(buffer.row_string(0), "a           ");
        assert_eq!(buffer.row_string(3), "b           ");
        assert_eq!(buffer.row_string(6), "c           ");
        // Aggregate rect spans from the first band to the last child's row.
        assert_eq!(built.rect, Rect::new(0, 0, 1, 7));
    }

    #[test]
    fn remainder_rows_are_not_distributed() {
        let stack = VStack::new((Text::new("a"), Text::new("b")));
        let (buffer, _) = build(&stack, Rect::new(0, 0, 12, 9));
        // 9 / 2 = 4 per band; row 8 belongs to no band.
        assert_eq!(buffer.row_string(0), "a           ");
        assert_eq!(buffer.row_string(4), "b           ");
    }

    #[test]
    fn children_get_indexed_identifiers() {
        let stack = VStack::new((Text::new("a"), Text::new("b")));
        let (_, built) = build(&stack, Rect::new(0, 0, 12, 4));
        let ids: Vec<String> = built
            .nodes
            .iter()
            .map(|node| node.borrow().identifier().to_string())
            .collect();
        assert_eq!(ids, vec!["root0", "root1"]);
    }

    #[test]
    fn single_view_content_is_one_band() {
        let stack = VStack::new(Text::new("a"));
        let (_, built) = build(&stack, Rect::new(0, 0, 12, 9));
        assert_eq!(built.nodes.len(), 1);
        assert_eq!(built.nodes[0].borrow().identifier(), "root");
    }
}
