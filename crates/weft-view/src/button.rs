#![forbid(unsafe_code)]

//! Button leaf.

use std::fmt;
use std::rc::Rc;

use weft_core::geometry::Rect;
use weft_render::AttributedBuffer;
use weft_style::StyleFlags;

use crate::node::{self, NodeState};
use crate::text::text_size;
use crate::view::{BuildInputs, Built, Interpolation, Modifications, View};

/// A press-activated control with a label.
///
/// The action closure lives on the description and is refreshed onto the
/// concrete node every frame; the pressed/focused flags live on the node
/// and survive reconciliation.
#[derive(Clone)]
pub struct Button {
    label: String,
    action: Rc<dyn Fn()>,
}

impl Button {
    /// Create a button firing `action` on activation.
    pub fn new(label: impl Into<String>, action: impl Fn() + 'static) -> Self {
        Self {
            label: label.into(),
            action: Rc::new(action),
        }
    }
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

impl View for Button {
    fn interpolation(&self) -> Box<dyn Interpolation> {
        Box::new(ButtonInterpolation {
            label: self.label.clone(),
            action: self.action.clone(),
            modifications: Modifications::default(),
        })
    }
}

struct ButtonInterpolation {
    label: String,
    action: Rc<dyn Fn()>,
    modifications: Modifications,
}

impl Interpolation for ButtonInterpolation {
    fn modify(&mut self, modifier: &crate::modifier::Modifier) {
        self.modifications.apply(modifier);
    }

    fn build(&mut self, inputs: &BuildInputs, buffer: &mut AttributedBuffer) -> Built {
        let resolved = self.modifications.resolve(inputs.available);
        let size = if self.modifications.has_explicit_size() {
            resolved.size
        } else {
            text_size(self.label.chars().count() as i32, resolved.size)
        };
        let rect = Rect {
            origin: resolved.origin,
            size,
        };

        let node = node::resolve_child(&inputs.parent, &inputs.identifier, || NodeState::Button {
            pressed: false,
            focused: false,
            action: self.action.clone(),
        });
        let highlighted = {
            let mut n = node.borrow_mut();
            n.set_rect(rect);
            match n.state_mut() {
                NodeState::Button { pressed, focused, action } => {
                    *action = self.action.clone();
                    *pressed || *focused
                }
                other => {
                    *other = NodeState::Button {
                        pressed: false,
                        focused: false,
                        action: self.action.clone(),
                    };
                    false
                }
            }
        };

        let mut style = self.modifications.attributes;
        if highlighted {
            style.attrs |= StyleFlags::REVERSE;
        }
        buffer.set_chars(&self.label, (!style.is_empty()).then_some(style), rect);

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
