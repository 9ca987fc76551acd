#![forbid(unsafe_code)]

//! weft: a declarative terminal rendering engine.
//!
//! Describe a UI as a tree of immutable views; the engine interpolates the
//! description each frame into a styled character grid and a persistent
//! node tree that carries widget state (focus, text buffers) across
//! frames.
//!
//! ```no_run
//! use weft::prelude::*;
//!
//! let mut app = App::new(|| {
//!     Box::new(
//!         Text::new("hello")
//!             .foreground(Color::Green)
//!             .padding(1)
//!             .bordered(BorderGlyphs::LINE),
//!     )
//! });
//! weft::runtime::run(&mut app).unwrap();
//! ```

pub use weft_core as core;
pub use weft_render as render;
#[cfg(feature = "runtime")]
pub use weft_runtime as runtime;
pub use weft_style as style;
pub use weft_view as view;

/// The commonly used surface, re-exported flat.
pub mod prelude {
    pub use weft_core::event::{ButtonState, MouseEvent};
    pub use weft_core::geometry::{EdgeInsets, Point, Rect, Size};
    pub use weft_style::{Color, Style, StyleFlags};
    pub use weft_view::{
        App, Binding, Border, BorderGlyphs, Button, Either, Fill, Padding, Spacer, StateCell,
        Text, TextField, VStack, View, ViewExt,
    };
}
