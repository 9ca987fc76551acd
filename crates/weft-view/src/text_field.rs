#![forbid(unsafe_code)]

//! Text field leaf.

use std::fmt;
use std::rc::Rc;

use weft_core::geometry::{Rect, Size};
use weft_render::AttributedBuffer;
use weft_style::{Style, StyleFlags};

use crate::node::{self, NodeState};
use crate::view::{BuildInputs, Built, Interpolation, Modifications, View};

/// A single-line editable text field.
///
/// The edited buffer lives on the concrete node and survives
/// reconciliation; the description only carries the placeholder and the
/// submit action, refreshed onto the node every frame.
#[derive(Clone)]
pub struct TextField {
    placeholder: String,
    on_submit: Rc<dyn Fn(&str)>,
}

impl TextField {
    /// Create a text field firing `on_submit` with the contents on Enter.
    pub fn new(on_submit: impl Fn(&str) + 'static) -> Self {
        Self {
            placeholder: String::new(),
            on_submit: Rc::new(on_submit),
        }
    }

    /// Set the placeholder shown while empty and unfocused (builder).
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }
}

impl fmt::Debug for TextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextField")
            .field("placeholder", &self.placeholder)
            .finish_non_exhaustive()
    }
}

impl View for TextField {
    fn interpolation(&self) -> Box<dyn Interpolation> {
        Box::new(TextFieldInterpolation {
            placeholder: self.placeholder.clone(),
            on_submit: self.on_submit.clone(),
            modifications: Modifications::default(),
        })
    }
}

struct TextFieldInterpolation {
    placeholder: String,
    on_submit: Rc<dyn Fn(&str)>,
    modifications: Modifications,
}

impl Interpolation for TextFieldInterpolation {
    fn modify(&mut self, modifier: &crate::modifier::Modifier) {
        self.modifications.apply(modifier);
    }

    fn build(&mut self, inputs: &BuildInputs, buffer: &mut AttributedBuffer) -> Built {
        let resolved = self.modifications.resolve(inputs.available);
        let size = if self.modifications.has_explicit_size() {
            resolved.size
        } else {
            // Fields stretch across the available width on one row.
            Size::new(resolved.size.width, resolved.size.height.min(1))
        };
        let rect = Rect {
            origin: resolved.origin,
            size,
        };

        let node = node::resolve_child(&inputs.parent, &inputs.identifier, || {
            NodeState::TextField {
                value: String::new(),
                focused: false,
                on_submit: self.on_submit.clone(),
            }
        });
        let (value, focused) = {
            let mut n = node.borrow_mut();
            n.set_rect(rect);
            match n.state_mut() {
                NodeState::TextField { value, focused, on_submit } => {
                    *on_submit = self.on_submit.clone();
                    (value.clone(), *focused)
                }
                other => {
                    *other = NodeState::TextField {
                        value: String::new(),
                        focused: false,
                        on_submit: self.on_submit.clone(),
                    };
                    (String::new(), false)
                }
            }
        };

        if value.is_empty() && !focused && !self.placeholder.is_empty() {
            let style = self
                .modifications
                .attributes
                .merge(Style::new().attrs(StyleFlags::DIM));
            buffer.set_chars(&self.placeholder, Some(style), rect);
        } else {
            buffer.set_chars(&value, self.modifications.style(), rect);
            if focused {
                let cursor_x = rect.min_x() + (value.chars().count() as i32);
                if cursor_x < rect.max_x() {
                    let cursor = Style::new().attrs(StyleFlags::REVERSE);
                    buffer.set_chars(
                        " ",
                        Some(cursor),
                        Rect::new(cursor_x, rect.min_y(), 1, 1),
                    );
                }
            }
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
