#![forbid(unsafe_code)]

//! Attributed buffer storage.
//!
//! The [`AttributedBuffer`] is a flat row-major grid of `char`s plus an
//! ordered sequence of [`AttributeRun`]s. Writes clip silently against the
//! buffer bounds; styling is recorded as runs over flat index ranges and
//! resolved only at serialization time.
//!
//! # Invariants
//!
//! 1. `chars.len() == width * height`, fixed after creation.
//! 2. Runs are ordered by range start (insertion keeps the order).
//! 3. Runs never cover an empty range.
//! 4. Overlapping runs are kept as-is; the serializer layers them so the
//!    active attributes at any position are the union of covering runs.

use std::io::{self, Write};
use std::ops::Range;

use weft_core::geometry::Rect;
use weft_style::Style;

use crate::ansi;

/// A half-open flat-index range tagged with a style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeRun {
    /// Half-open range over the flat character grid.
    pub range: Range<usize>,
    /// Style applied over the range.
    pub style: Style,
}

/// A flat character grid with styled ranges.
#[derive(Debug, Clone)]
pub struct AttributedBuffer {
    width: i32,
    height: i32,
    chars: Vec<char>,
    runs: Vec<AttributeRun>,
}

impl AttributedBuffer {
    /// Create a new buffer filled with spaces.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is not positive.
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        assert!(width > 0, "buffer width must be > 0");
        assert!(height > 0, "buffer height must be > 0");
        Self {
            width,
            height,
            chars: vec![' '; (width * height) as usize],
            runs: Vec::new(),
        }
    }

    /// Buffer width in cells.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Buffer height in cells.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// The character at `(x, y)`, or `None` outside the buffer.
    #[must_use]
    pub fn char_at(&self, x: i32, y: i32) -> Option<char> {
        if x < 0 || x >= self.width || y < 0 || y >= self.height {
            return None;
        }
        Some(self.chars[(y * self.width + x) as usize])
    }

    /// The recorded style runs, in start order.
    #[must_use]
    pub fn runs(&self) -> &[AttributeRun] {
        &self.runs
    }

    /// One row of the grid as a string (for tests and snapshots).
    ///
    /// # Panics
    ///
    /// Panics if `y` is outside the buffer.
    #[must_use]
    pub fn row_string(&self, y: i32) -> String {
        assert!(y >= 0 && y < self.height, "row {y} out of bounds");
        let start = (y * self.width) as usize;
        self.chars[start..start + self.width as usize].iter().collect()
    }

    /// Reset every cell to a space and drop all runs.
    pub fn clear(&mut self) {
        self.chars.fill(' ');
        self.runs.clear();
    }

    /// Write `content` into `rect`, wrapping into successive rows of
    /// `rect.size.width` characters, up to `rect.size.height` rows.
    ///
    /// The write is clipped to the buffer on all four sides: rows above or
    /// below the grid and columns left or right of it are cropped, never
    /// shifted. If any cell was written and a style was supplied, one run is
    /// recorded covering the written flat-index range.
    pub fn set_chars(&mut self, content: &str, style: Option<Style>, rect: Rect) {
        if rect.is_null() || rect.size.is_empty() {
            return;
        }
        let chars: Vec<char> = content.chars().collect();
        let mut first: Option<usize> = None;
        let mut last = 0usize;

        for row in 0..rect.size.height {
            let y = rect.origin.y + row;
            let row_start = (row * rect.size.width) as usize;
            if row_start >= chars.len() {
                break;
            }
            if y < 0 || y >= self.height {
                // Cropped row; its slice of the content is consumed, not shifted.
                continue;
            }
            for col in 0..rect.size.width {
                let Some(&ch) = chars.get(row_start + col as usize) else {
                    break;
                };
                let x = rect.origin.x + col;
                if x < 0 || x >= self.width {
                    continue;
                }
                let flat = (y * self.width + x) as usize;
                self.chars[flat] = ch;
                if first.is_none() {
                    first = Some(flat);
                }
                last = flat;
            }
        }

        if let (Some(style), Some(start)) = (style, first) {
            if !style.is_empty() {
                self.insert_run(start..last + 1, style);
            }
        }
    }

    /// Fill a rectangle with a single unstyled character, clipped to bounds.
    pub fn fill(&mut self, rect: Rect, ch: char) {
        if rect.is_null() {
            return;
        }
        for y in rect.min_y().max(0)..rect.max_y().min(self.height) {
            for x in rect.min_x().max(0)..rect.max_x().min(self.width) {
                self.chars[(y * self.width + x) as usize] = ch;
            }
        }
    }

    /// Insert a run at its sorted position by range start.
    ///
    /// An equal start routes to the found index, placing the new run before
    /// the existing equal-start run it was compared against.
    fn insert_run(&mut self, range: Range<usize>, style: Style) {
        let start = range.start;
        let mut lo = 0usize;
        let mut hi = self.runs.len();
        let idx = loop {
            if lo >= hi {
                break lo;
            }
            let mid = lo + (hi - lo) / 2;
            match self.runs[mid].range.start.cmp(&start) {
                std::cmp::Ordering::Less => lo = mid + 1,
                std::cmp::Ordering::Greater => hi = mid,
                std::cmp::Ordering::Equal => break mid,
            }
        };
        self.runs.insert(idx, AttributeRun { range, style });
    }

    /// Serialize to an escape-coded stream.
    ///
    /// The output interleaves plain text with SGR tokens such that, reading
    /// left to right, the active attributes are always exactly the union of
    /// the runs covering the current position. Terminals can only reset all
    /// attributes at once, so closing any run emits a reset followed by the
    /// re-applied tokens of every run still open. A buffer with no runs is
    /// emitted verbatim.
    pub fn write<W: Write>(&self, w: &mut W) -> io::Result<()> {
        if self.runs.is_empty() {
            return self.write_plain(w, 0, self.chars.len());
        }

        let mut open: Vec<&AttributeRun> = Vec::new();
        let mut pos = 0usize;

        for run in &self.runs {
            self.close_expired(w, &mut open, &mut pos, run.range.start)?;
            self.write_plain(w, pos, run.range.start)?;
            pos = pos.max(run.range.start);
            ansi::sgr_style(w, &run.style)?;
            open.push(run);
        }

        self.close_expired(w, &mut open, &mut pos, self.chars.len())?;
        self.write_plain(w, pos, self.chars.len())
    }

    /// Close every open run ending at or before `boundary`, earliest end
    /// first, emitting text up to each end, a reset, and the surviving open
    /// runs' tokens.
    fn close_expired<W: Write>(
        &self,
        w: &mut W,
        open: &mut Vec<&AttributeRun>,
        pos: &mut usize,
        boundary: usize,
    ) -> io::Result<()> {
        loop {
            let Some(end) = open.iter().map(|run| run.range.end).min() else {
                return Ok(());
            };
            if end > boundary {
                return Ok(());
            }
            self.write_plain(w, *pos, end)?;
            *pos = (*pos).max(end);
            ansi::sgr_reset(w)?;
            open.retain(|run| run.range.end > end);
            for run in open.iter() {
                ansi::sgr_style(w, &run.style)?;
            }
        }
    }

    /// Emit the characters in `[from, to)` verbatim. No-op when `from >= to`.
    fn write_plain<W: Write>(&self, w: &mut W, from: usize, to: usize) -> io::Result<()> {
        if from >= to {
            return Ok(());
        }
        let text: String = self.chars[from..to].iter().collect();
        w.write_all(text.as_bytes())
    }
}
