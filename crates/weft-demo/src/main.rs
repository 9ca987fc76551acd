#![forbid(unsafe_code)]

//! Showcase: a bordered form with a text field, counter buttons, and a
//! conditional greeting, driven by the default event loop.
//!
//! Run with `RUST_LOG=trace` to get engine traces in `weft-demo.log`.

mod app;

use std::io;

fn main() -> io::Result<()> {
    weft::runtime::logging::init_logging("weft-demo.log")?;
    let mut app = app::build();
    weft::runtime::run(&mut app)
}
