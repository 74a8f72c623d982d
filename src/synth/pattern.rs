use std::fmt;

use crate::foundation::{
    core::FrameGeometry,
    error::{OledError, OledResult},
};

/// Length of one color dictionary entry: `c#rrggbb`.
pub const ENTRY_LEN: usize = 8;
/// Characters captured after the anchor recurs: the `#rrggbb` part of an entry.
pub const CAPTURE_LEN: usize = ENTRY_LEN - 1;

/// Per-cell positional extraction rule.
///
/// Applied to a buffer that starts at a frame boundary (one frame followed by the color
/// dictionary), the rule:
///
/// 1. skips `offset` characters,
/// 2. captures the cell's pixel character (the anchor),
/// 3. skips the `tail` characters left in the frame,
/// 4. lazily skips whole [`ENTRY_LEN`] blocks until a block starts with the anchor,
/// 5. captures the next [`CAPTURE_LEN`] characters.
///
/// Each rule only ever compares against its own anchor capture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ExtractionPattern {
    pub offset: usize,
    pub tail: usize,
}

impl ExtractionPattern {
    /// Rule for cell `(x, y)` of `geom`.
    pub fn for_cell(geom: FrameGeometry, x: u32, y: u32) -> OledResult<Self> {
        if x >= geom.width || y >= geom.height {
            return Err(OledError::validation(format!(
                "cell ({x}, {y}) is outside the {}x{} screen",
                geom.width, geom.height
            )));
        }
        let offset = geom.cell_offset(x, y);
        Ok(Self {
            offset,
            tail: geom.frame_size() - offset - 1,
        })
    }

    /// Characters covered before the block search starts: always one frame.
    pub fn frame_span(self) -> usize {
        self.offset + 1 + self.tail
    }

    /// Regex source in .NET syntax (named groups, `\k<px>` back-reference).
    pub fn render(self) -> String {
        self.to_string()
    }

    /// Run the rule as an explicit scan, returning the captured characters.
    ///
    /// `None` means the anchor never recurs in a complete block, which is the normal outcome
    /// for a truncated stream (e.g. past the last frame).
    pub fn extract<'a>(&self, buffer: &'a str) -> Option<&'a str> {
        let chars: Vec<(usize, char)> = buffer.char_indices().collect();
        let (_, anchor) = *chars.get(self.offset)?;

        let mut pos = self.frame_span();
        while pos + 1 + CAPTURE_LEN <= chars.len() {
            if chars[pos].1 == anchor {
                let start = chars[pos + 1].0;
                let end = chars
                    .get(pos + 1 + CAPTURE_LEN)
                    .map_or(buffer.len(), |&(i, _)| i);
                return Some(&buffer[start..end]);
            }
            pos += ENTRY_LEN;
        }
        None
    }
}

impl fmt::Display for ExtractionPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("^")?;
        if self.offset > 0 {
            write!(f, "(?:.{{{}}})", self.offset)?;
        }
        f.write_str("(?<px>.)")?;
        if self.tail > 0 {
            write!(f, "(?:.{{{}}})", self.tail)?;
        }
        write!(f, "(?:.{{{ENTRY_LEN}}})*?\\k<px>(?<out>.{{{CAPTURE_LEN}}})")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/synth/pattern.rs"]
mod tests;
