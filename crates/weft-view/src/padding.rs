#![forbid(unsafe_code)]

//! Padding combinator.

use weft_core::geometry::{EdgeInsets, Rect};
use weft_render::AttributedBuffer;

use crate::view::{BuildInputs, Built, Interpolation, View};

/// Builds its child inside the rectangle inset by the given edge insets,
/// blanking the vacated ring so stale glyphs from previous frames do not
/// remain, and returns the child's rectangle expanded back outward.
#[derive(Debug, Clone)]
pub struct Padding<C: View> {
    content: C,
    insets: EdgeInsets,
}

impl<C: View> Padding<C> {
    /// Create a padding wrapper.
    pub const fn new(content: C, insets: EdgeInsets) -> Self {
        Self { content, insets }
    }
}

impl<C: View> View for Padding<C> {
    fn interpolation(&self) -> Box<dyn Interpolation> {
        Box::new(PaddingInterpolation {
            content: self.content.interpolation(),
            insets: self.insets,
        })
    }
}

struct PaddingInterpolation {
    content: Box<dyn Interpolation>,
    insets: EdgeInsets,
}

impl Interpolation for PaddingInterpolation {
    fn modify(&mut self, modifier: &crate::modifier::Modifier) {
        self.content.modify(modifier);
    }

    fn build(&mut self, inputs: &BuildInputs, buffer: &mut AttributedBuffer) -> Built {
        let inner = inputs.available.inset_by(self.insets);
        let built = self.content.build(&inputs.with_available(inner), buffer);
        if built.rect.is_null() {
            return built;
        }

        let child = built.rect;
        let insets = self.insets;
        let result = child.outset_by(insets);
        if insets.top > 0 {
            buffer.fill(
                Rect::new(result.min_x(), result.min_y(), result.size.width, insets.top),
                ' ',
            );
        }
        if insets.bottom > 0 {
            // The trailing blank band takes its height from the leading inset.
            buffer.fill(
                Rect::new(result.min_x(), child.max_y(), result.size.width, insets.top),
                ' ',
            );
        }
        if insets.left > 0 {
            buffer.fill(
                Rect::new(result.min_x(), child.min_y(), insets.left, child.size.height),
                ' ',
            );
        }
        if insets.right > 0 {
            // The trailing blank column takes its width from the leading inset.
            buffer.fill(
                Rect::new(child.max_x(), child.min_y(), insets.left, child.size.height),
                ' ',
            );
        }

        Built {
            rect: result,
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modifier::ViewExt;
    use crate::node::{Node, NodeState};
    use crate::text::Text;

    fn build(view: &dyn View, buffer: &mut AttributedBuffer, available: Rect) -> Built {
        let inputs = BuildInputs {
            identifier: String::from("root"),
            parent: Node::new("root", NodeState::Passive),
            available,
        };
        view.interpolation().build(&inputs, buffer)
    }

    #[test]
    fn insets_child_and_expands_result() {
        let mut buffer = AttributedBuffer::new(12, 5);
        let built = build(&Text::new("Hi").padding(1), &mut buffer, Rect::new(0, 0, 12, 5));
        assert_eq!(buffer.row_string(1), " Hi         ");
        // Child rect (1,1,2,1) expanded back outward by the insets.
        assert_eq!(built.rect, Rect::new(0, 0, 4, 3));
    }

    #[test]
    fn blanks_vacated_ring() {
        let mut buffer = AttributedBuffer::new(12, 5);
        buffer.fill(Rect::new(0, 0, 12, 5), 'x');
        build(&Text::new("Hi").padding(1), &mut buffer, Rect::new(0, 0, 12, 5));
        assert_eq!(buffer.row_string(0), "    xxxxxxxx");
        assert_eq!(buffer.row_string(1), " Hi xxxxxxxx");
        assert_eq!(buffer.row_string(2), "    xxxxxxxx");
    }

    #[test]
    fn trailing_blank_uses_leading_inset() {
        // Asymmetric insets: left 2, right 1. The blank column after the
        // child takes the leading width (2), not the trailing one.
        let mut buffer = AttributedBuffer::new(12, 3);
        buffer.fill(Rect::new(0, 0, 12, 3), 'x');
        let insets = EdgeInsets::new(0, 1, 0, 2);
        build(&Padding::new(Text::new("Hi"), insets), &mut buffer, Rect::new(0, 0, 12, 3));
        assert_eq!(buffer.row_string(0), "  Hi  xxxxxx");
    }

    #[test]
    fn null_child_passes_through() {
        let mut buffer = AttributedBuffer::new(12, 3);
        let absent: Option<Text> = None;
        let built = build(&Padding::new(absent, EdgeInsets::all(1)), &mut buffer, Rect::new(0, 0, 12, 3));
        assert!(built.rect.is_null());
        assert!(built.nodes.is_empty());
    }
}
