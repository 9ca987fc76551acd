#![forbid(unsafe_code)]

//! Spacer leaf.

use weft_render::AttributedBuffer;

use crate::node::{self, NodeState};
use crate::view::{BuildInputs, Built, Interpolation, Modifications, View};

/// Occupies its available rectangle without drawing anything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Spacer;

impl Spacer {
    /// Create a spacer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl View for Spacer {
    fn interpolation(&self) -> Box<dyn Interpolation> {
        Box::new(SpacerInterpolation {
            modifications: Modifications::default(),
        })
    }
}

struct SpacerInterpolation {
    modifications: Modifications,
}

impl Interpolation for SpacerInterpolation {
    fn modify(&mut self, modifier: &crate::modifier::Modifier) {
        self.modifications.apply(modifier);
    }

    fn build(&mut self, inputs: &BuildInputs, _buffer: &mut AttributedBuffer) -> Built {
        let rect = self.modifications.resolve(inputs.available);
        let node = node::resolve_child(&inputs.parent, &inputs.identifier, || NodeState::Passive);
        node.borrow_mut().set_rect(rect);
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
