#![forbid(unsafe_code)]

//! Color and text attribute types.

pub mod color;
pub mod style;

pub use color::Color;
pub use style::{Style, StyleFlags};
