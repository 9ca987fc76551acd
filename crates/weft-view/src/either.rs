#![forbid(unsafe_code)]

//! Conditional content: either of two branches, or optional content.
//!
//! The identifier suffix is fixed per branch (`A`/`B`), so switching the
//! active branch between frames removes one subtree and creates a
//! different one; there is never cross-branch reuse.

use weft_render::AttributedBuffer;

use crate::view::{BuildInputs, Built, Interpolation, View};

/// One of two alternative subtrees.
#[derive(Debug, Clone)]
pub enum Either<A, B> {
    /// The first branch.
    A(A),
    /// The second branch.
    B(B),
}

impl<A: View, B: View> View for Either<A, B> {
    fn interpolation(&self) -> Box<dyn Interpolation> {
        match self {
            Self::A(view) => Box::new(BranchInterpolation {
                child: view.interpolation(),
                suffix: 'A',
            }),
            Self::B(view) => Box::new(BranchInterpolation {
                child: view.interpolation(),
                suffix: 'B',
            }),
        }
    }
}

/// Optional content builds its `A` branch when present and nothing at all
/// when absent.
impl<V: View> View for Option<V> {
    fn interpolation(&self) -> Box<dyn Interpolation> {
        match self {
            Some(view) => Box::new(BranchInterpolation {
                child: view.interpolation(),
                suffix: 'A',
            }),
            None => Box::new(AbsentInterpolation),
        }
    }
}

struct BranchInterpolation {
    child: Box<dyn Interpolation>,
    suffix: char,
}

impl Interpolation for BranchInterpolation {
    fn modify(&mut self, modifier: &crate::modifier::Modifier) {
        self.child.modify(modifier);
    }

    fn build(&mut self, inputs: &BuildInputs, buffer: &mut AttributedBuffer) -> Built {
        self.child.build(&inputs.descend(self.suffix), buffer)
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

struct AbsentInterpolation;

impl Interpolation for AbsentInterpolation {
    fn modify(&mut self, _modifier: &crate::modifier::Modifier) {}

    fn subviews(&self) -> usize {
        0
    }

    fn build(&mut self, _inputs: &BuildInputs, _buffer: &mut AttributedBuffer) -> Built {
        Built::empty()
    }

    fn build_at(
        &mut self,
        _inputs: &BuildInputs,
        _buffer: &mut AttributedBuffer,
        position: usize,
    ) -> Built {
        panic!("child index {position} out of range for absent content");
    }
}
