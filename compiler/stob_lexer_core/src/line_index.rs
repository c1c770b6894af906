//! Offset to line/column mapping.
//!
//! [`LineIndex`] records where every line starts so a byte offset can be
//! turned into a [`Position`] without rescanning from the top of the file.
//! Line breaks follow the same rule as [`CharStream`](crate::CharStream):
//! `\n`, `\r` and `\r\n` each end exactly one line.

use memchr::memchr2_iter;

use crate::char_stream::Position;

/// Line start offsets of one source text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineIndex {
    /// Byte offset of the first character of each line. Always starts
    /// with 0.
    line_starts: Vec<u32>,
    len: u32,
}

impl LineIndex {
    /// Build the index for `text`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets beyond u32::MAX are never visible to the scanner"
    )]
    pub fn new(text: &str) -> Self {
        let bytes = text.as_bytes();
        let len = text.len().min(u32::MAX as usize);
        let mut line_starts = vec![0];
        for i in memchr2_iter(b'\n', b'\r', &bytes[..len]) {
            // `\r\n` is one break; the `\n` records it.
            if bytes[i] == b'\r' && bytes.get(i + 1) == Some(&b'\n') {
                continue;
            }
            line_starts.push((i + 1) as u32);
        }
        LineIndex {
            line_starts,
            len: len as u32,
        }
    }

    /// Number of lines. A trailing line break opens a final empty line.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Byte offset where 1-based `line` starts.
    pub fn line_start(&self, line: u32) -> Option<u32> {
        let index = (line as usize).checked_sub(1)?;
        self.line_starts.get(index).copied()
    }

    /// 1-based line containing `offset`. Offsets past the end map to the
    /// last line.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "line count is bounded by the u32 source length"
    )]
    pub fn line_of(&self, offset: u32) -> u32 {
        self.line_starts.partition_point(|&start| start <= offset) as u32
    }

    /// Full [`Position`] of `offset` in `text`, the same text the index was
    /// built from.
    ///
    /// Returns `None` if `offset` is past the end or not on a `char`
    /// boundary.
    pub fn position(&self, text: &str, offset: u32, tab_width: u32) -> Option<Position> {
        if offset > self.len || !text.is_char_boundary(offset as usize) {
            return None;
        }
        let line = self.line_of(offset);
        let start = self.line_start(line)?;
        let mut pos = Position {
            offset: start,
            line,
            column: 1,
            after_cr: start
                .checked_sub(1)
                .is_some_and(|i| text.as_bytes()[i as usize] == b'\r'),
        };
        for c in text.get(start as usize..offset as usize)?.chars() {
            pos = pos.advanced(c, tab_width);
        }
        Some(pos)
    }
}
