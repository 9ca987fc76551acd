//! Property-based tests for run serialization.
//!
//! For buffers with arbitrary styled writes, the escape-coded stream must:
//!
//! 1. Contain exactly the grid text once control tokens are stripped.
//! 2. Be style-balanced: after the final token, no attributes remain open.
//! 3. Be byte-stable for the same sequence of writes.

use proptest::prelude::*;
use weft_core::geometry::Rect;
use weft_render::AttributedBuffer;
use weft_style::{Color, Style, StyleFlags};

const WIDTH: i32 = 16;
const HEIGHT: i32 = 4;

#[derive(Debug, Clone)]
struct Write {
    text: String,
    style: Option<Style>,
    rect: Rect,
}

fn style_strategy() -> impl Strategy<Value = Option<Style>> {
    prop_oneof![
        Just(None),
        Just(Some(Style::new().fg(Color::Red))),
        Just(Some(Style::new().fg(Color::Blue).attrs(StyleFlags::BOLD))),
        Just(Some(Style::new().bg(Color::Green))),
        Just(Some(Style::new().attrs(StyleFlags::UNDERLINE))),
    ]
}

fn write_strategy() -> impl Strategy<Value = Write> {
    (
        "[a-z]{1,12}",
        style_strategy(),
        -2i32..WIDTH + 2,
        -2i32..HEIGHT + 2,
        1i32..8,
        1i32..3,
    )
        .prop_map(|(text, style, x, y, w, h)| Write {
            text,
            style,
            rect: Rect::new(x, y, w, h),
        })
}

fn build(writes: &[Write]) -> AttributedBuffer {
    let mut buffer = AttributedBuffer::new(WIDTH, HEIGHT);
    for write in writes {
        buffer.set_chars(&write.text, write.style, write.rect);
    }
    buffer
}

fn serialize(buffer: &AttributedBuffer) -> Vec<u8> {
    let mut out = Vec::new();
    buffer.write(&mut out).unwrap();
    out
}

/// Strip `ESC [ ... m` sequences, returning (plain text, open style depth).
///
/// Depth counts applied non-reset tokens since the last reset; a balanced
/// stream ends at depth zero.
fn strip_tokens(stream: &[u8]) -> (String, usize) {
    let mut plain = Vec::new();
    let mut depth = 0usize;
    let mut i = 0;
    while i < stream.len() {
        if stream[i] == 0x1b {
            let start = i;
            while i < stream.len() && stream[i] != b'm' {
                i += 1;
            }
            assert!(i < stream.len(), "unterminated escape sequence");
            if &stream[start..=i] == b"\x1b[0m" {
                depth = 0;
            } else {
                depth += 1;
            }
            i += 1;
        } else {
            plain.push(stream[i]);
            i += 1;
        }
    }
    (String::from_utf8(plain).unwrap(), depth)
}

proptest! {
    #[test]
    fn stream_preserves_grid_text(writes in prop::collection::vec(write_strategy(), 0..8)) {
        let buffer = build(&writes);
        let expected: String = (0..HEIGHT).map(|y| buffer.row_string(y)).collect();
        let (plain, _) = strip_tokens(&serialize(&buffer));
        prop_assert_eq!(plain, expected);
    }

    #[test]
    fn stream_is_style_balanced(writes in prop::collection::vec(write_strategy(), 0..8)) {
        let buffer = build(&writes);
        let (_, depth) = strip_tokens(&serialize(&buffer));
        prop_assert_eq!(depth, 0);
    }

    #[test]
    fn stream_is_byte_stable(writes in prop::collection::vec(write_strategy(), 0..8)) {
        prop_assert_eq!(serialize(&build(&writes)), serialize(&build(&writes)));
    }
}
