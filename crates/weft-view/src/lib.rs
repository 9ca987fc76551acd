#![forbid(unsafe_code)]

//! Declarative view descriptions and the engine that renders them.
//!
//! A UI is described as an immutable tree of [`View`] values. Each frame the
//! [`App`] context interpolates the description into an attributed buffer
//! and a persistent tree of [`Node`]s keyed by positional identifiers, so
//! stateful leaves (buttons, text fields) survive across frames.

pub mod app;
pub mod border;
pub mod button;
pub mod either;
pub mod fill;
pub mod focus;
pub mod modifier;
pub mod node;
pub mod padding;
pub mod spacer;
pub mod stack;
pub mod state;
pub mod text;
pub mod text_field;
pub mod tuple;
pub mod view;

pub use app::App;
pub use border::{Border, BorderGlyphs};
pub use button::Button;
pub use either::Either;
pub use fill::Fill;
pub use modifier::{Modified, Modifier, ViewExt};
pub use node::{Node, NodeRef, NodeState, WeakNode};
pub use padding::Padding;
pub use spacer::Spacer;
pub use stack::VStack;
pub use state::{Binding, RenderSignal, StateCell};
pub use text::Text;
pub use text_field::TextField;
pub use view::{BuildInputs, Built, Interpolation, Modifications, View};
