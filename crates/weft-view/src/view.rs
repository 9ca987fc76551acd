#![forbid(unsafe_code)]

//! The interpolation protocol.
//!
//! A [`View`] is an immutable description of desired content. Building a
//! frame constructs an [`Interpolation`] from each description and recursively
//! drives it with a positional identifier, a parent node, and an available
//! rectangle. Leaves write into the buffer and create or reuse concrete
//! nodes; composites splice their children's results together without
//! introducing nodes of their own.

use std::fmt::Display;

use weft_core::geometry::{Rect, Size};
use weft_render::AttributedBuffer;
use weft_style::Style;

use crate::modifier::Modifier;
use crate::node::NodeRef;

/// An immutable description of UI content.
pub trait View {
    /// Construct the interpolation value for this description.
    fn interpolation(&self) -> Box<dyn Interpolation>;
}

/// Inputs threaded down the description tree during a build.
#[derive(Clone)]
pub struct BuildInputs {
    /// Positional identifier accumulated along the descent.
    pub identifier: String,
    /// The node that owns concrete nodes created in this subtree.
    pub parent: NodeRef,
    /// The rectangle handed to this subtree.
    pub available: Rect,
}

impl BuildInputs {
    /// Same position, different available rectangle.
    #[must_use]
    pub fn with_available(&self, available: Rect) -> Self {
        Self {
            identifier: self.identifier.clone(),
            parent: self.parent.clone(),
            available,
        }
    }

    /// Descend one structural step, appending a child-specific suffix.
    #[must_use]
    pub fn descend(&self, suffix: impl Display) -> Self {
        Self {
            identifier: format!("{}{suffix}", self.identifier),
            parent: self.parent.clone(),
            available: self.available,
        }
    }
}

/// The result of building one subtree.
pub struct Built {
    /// The rectangle the subtree actually occupied ([`Rect::NULL`] if none).
    pub rect: Rect,
    /// The subtree's top-level concrete nodes, in document order.
    pub nodes: Vec<NodeRef>,
}

impl Built {
    /// An empty result: null rectangle, no nodes.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            rect: Rect::NULL,
            nodes: Vec::new(),
        }
    }
}

/// The per-frame interpolation value constructed from a description.
pub trait Interpolation {
    /// Apply a style or geometry modifier to this interpolation's own
    /// drawing attributes. Wrappers forward to their child; N-ary
    /// containers forward to every child; leaves fold the modifier into
    /// their [`Modifications`] record.
    fn modify(&mut self, modifier: &Modifier);

    /// Number of independently addressable children.
    fn subviews(&self) -> usize {
        1
    }

    /// Build every position in order, unioning the returned rectangles.
    ///
    /// Leaves and wrappers override this; N-ary containers use the default,
    /// which degenerates to an indexed build of every position.
    fn build(&mut self, inputs: &BuildInputs, buffer: &mut AttributedBuffer) -> Built {
        let mut rect = Rect::NULL;
        let mut nodes = Vec::new();
        for index in 0..self.subviews() {
            let built = self.build_at(inputs, buffer, index);
            rect = rect.union(&built.rect);
            nodes.extend(built.nodes);
        }
        Built { rect, nodes }
    }

    /// Build the child at `position`.
    ///
    /// # Panics
    ///
    /// Panics when `position` is outside `[0, subviews())`; a mismatch
    /// between a container's declared count and its dispatch is a contract
    /// violation, never silently empty content.
    fn build_at(
        &mut self,
        inputs: &BuildInputs,
        buffer: &mut AttributedBuffer,
        position: usize,
    ) -> Built;
}

/// A leaf interpolation's accumulated modifier state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Modifications {
    /// Styling layered onto the leaf's own drawing.
    pub attributes: Style,
    /// Rectangle override; the size defaults to [`Size::UNSPECIFIED`]
    /// ("don't override layout") and the origin composes additively.
    pub rect: Rect,
}

impl Default for Modifications {
    fn default() -> Self {
        Self {
            attributes: Style::default(),
            rect: Rect::from_size(Size::UNSPECIFIED),
        }
    }
}

impl Modifications {
    /// Fold one modifier into the record.
    pub fn apply(&mut self, modifier: &Modifier) {
        match modifier {
            Modifier::Foreground(color) => self.attributes.fg = Some(*color),
            Modifier::Background(color) => self.attributes.bg = Some(*color),
            Modifier::Attributes(flags) => self.attributes.attrs |= *flags,
            Modifier::Offset(delta) => {
                self.rect.origin = self.rect.origin.translated(*delta);
            }
            Modifier::Frame(size) => self.rect.size = *size,
        }
    }

    /// Whether an explicit size override is in effect.
    #[must_use]
    pub fn has_explicit_size(&self) -> bool {
        !self.rect.size.is_unspecified()
    }

    /// Resolve the override against the parent-supplied rectangle: an
    /// unspecified size inherits the parent's, and the override origin is
    /// always added to the parent's origin.
    #[must_use]
    pub fn resolve(&self, available: Rect) -> Rect {
        let size = if self.rect.size.is_unspecified() {
            available.size
        } else {
            self.rect.size
        };
        Rect {
            origin: available.origin.translated(self.rect.origin),
            size,
        }
    }

    /// The style to hand to the buffer, or `None` when nothing is set.
    #[must_use]
    pub fn style(&self) -> Option<Style> {
        (!self.attributes.is_empty()).then_some(self.attributes)
    }
}
