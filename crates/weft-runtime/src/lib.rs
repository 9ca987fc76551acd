#![forbid(unsafe_code)]

//! OS-facing driver glue: raw terminal mode, event decoding, and the
//! render loop. Everything here is thin; the engine itself never touches
//! the terminal.

pub mod logging;
pub mod terminal;

pub use terminal::{Input, Terminal, run, translate};
