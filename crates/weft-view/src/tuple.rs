#![forbid(unsafe_code)]

//! Fixed-arity containers.
//!
//! Tuples of views are the N-ary composite of the algebra: each child is
//! independently addressable and gets its decimal index appended to the
//! identifier path.

use weft_render::AttributedBuffer;

use crate::view::{BuildInputs, Built, Interpolation, View};

pub(crate) struct TupleInterpolation {
    children: Vec<Box<dyn Interpolation>>,
}

impl Interpolation for TupleInterpolation {
    fn modify(&mut self, modifier: &crate::modifier::Modifier) {
        for child in &mut self.children {
            child.modify(modifier);
        }
    }

    fn subviews(&self) -> usize {
        self.children.len()
    }

    fn build_at(
        &mut self,
        inputs: &BuildInputs,
        buffer: &mut AttributedBuffer,
        position: usize,
    ) -> Built {
        assert!(
            position < self.children.len(),
            "child index {position} out of range for {} subviews",
            self.children.len()
        );
        self.children[position].build(&inputs.descend(position), buffer)
    }
}

macro_rules! impl_view_for_tuple {
    ($($name:ident : $index:tt),+) => {
        impl<$($name: View),+> View for ($($name,)+) {
            fn interpolation(&self) -> Box<dyn Interpolation> {
                Box::new(TupleInterpolation {
                    children: vec![$(self.$index.interpolation()),+],
                })
            }
        }
    };
}

impl_view_for_tuple!(A: 0);
impl_view_for_tuple!(A: 0, B: 1);
impl_view_for_tuple!(A: 0, B: 1, C: 2);
impl_view_for_tuple!(A: 0, B: 1, C: 2, D: 3);
impl_view_for_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4);
impl_view_for_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5);
