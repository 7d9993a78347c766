use lens_core::types::LinePosition;

/// A matched byte range in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub offset: usize,
    pub len: usize,
}

impl Span {
    pub fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }

    pub fn end(&self) -> usize {
        self.offset + self.len
    }

    pub(crate) fn shifted(self, by: usize) -> Self {
        Self {
            offset: self.offset + by,
            len: self.len,
        }
    }

    /// Convert to a line/column position.
    ///
    /// Lines are split on `\n` only, so a trailing `\r` counts as part of its
    /// line. Columns count characters, not bytes.
    pub fn to_position(self, text: &str) -> LinePosition {
        let mut line_start = 0usize;
        for (idx, line) in text.split('\n').enumerate() {
            let next_start = line_start + line.len() + 1;
            if next_start > self.offset {
                let column = char_len(text, line_start, self.offset);
                let width = char_len(text, self.offset, self.end());
                return LinePosition {
                    line: idx as u32 + 1,
                    column,
                    end_column: column + width,
                };
            }
            line_start = next_start;
        }
        LinePosition {
            line: 1,
            column: 0,
            end_column: char_len(text, 0, self.len),
        }
    }
}

fn char_len(text: &str, from: usize, to: usize) -> u32 {
    text.get(from..to).map(|s| s.chars().count()).unwrap_or(0) as u32
}

/// A byte range of the text that probes are restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: usize,
    pub end: usize,
}

impl Window {
    pub fn whole(text: &str) -> Self {
        Self {
            start: 0,
            end: text.len(),
        }
    }

    pub fn slice<'t>(&self, text: &'t str) -> &'t str {
        text.get(self.start..self.end).unwrap_or("")
    }
}
