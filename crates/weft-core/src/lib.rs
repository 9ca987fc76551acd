#![forbid(unsafe_code)]

//! Core value types for weft: geometry and canonical input events.
//!
//! This crate has no dependencies and no state. Everything here is a plain
//! value passed between the renderer, the view layer, and the driver.

pub mod event;
pub mod geometry;

pub use event::{ButtonState, MouseEvent};
pub use geometry::{EdgeInsets, Point, Rect, Size};
