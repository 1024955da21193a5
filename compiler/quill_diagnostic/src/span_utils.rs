//! Byte offset to line and column.
//!
//! Line breaks are `\n`, `\r\n` and a lone `\r`, the same set the raw
//! scanner emits `Newline` for. Lines and columns are 1-based; columns
//! count characters.

/// Start offset of every line, searched with a binary search.
///
/// ```
/// use quill_diagnostic::span_utils::LineOffsetTable;
///
/// let source = "line1\nline2\r\nline3";
/// let table = LineOffsetTable::build(source);
///
/// assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
/// assert_eq!(table.offset_to_line_col(source, 6), (2, 1));
/// assert_eq!(table.offset_to_line_col(source, 13), (3, 1));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineOffsetTable {
    /// Byte offset of each line start. `offsets[0] == 0`.
    offsets: Vec<u32>,
}

impl LineOffsetTable {
    /// One pass over `source`.
    pub fn build(source: &str) -> Self {
        let bytes = source.as_bytes();
        let mut offsets = vec![0u32];
        // Offsets past u32::MAX are never produced; `lex` rejects such
        // sources up front.
        for ((i, &byte), next_line) in bytes.iter().enumerate().zip(1u32..) {
            let is_break = match byte {
                b'\n' => true,
                b'\r' => bytes.get(i + 1) != Some(&b'\n'),
                _ => false,
            };
            if is_break {
                offsets.push(next_line);
            }
        }
        LineOffsetTable { offsets }
    }

    /// Line containing `offset`. A line break belongs to the line it ends.
    #[inline]
    pub fn line_from_offset(&self, offset: u32) -> u32 {
        let line_idx = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        u32::try_from(line_idx).unwrap_or(u32::MAX - 1) + 1
    }

    /// Get 1-based (line, column) from a byte offset.
    ///
    /// The column counts characters (not bytes) from the start of the line.
    /// An offset inside a multi-byte character resolves to that character.
    pub fn offset_to_line_col(&self, source: &str, offset: u32) -> (u32, u32) {
        let line = self.line_from_offset(offset);
        let line_start = self
            .line_start_offset(line)
            .map_or(0, |start| start as usize);
        let rel = (offset as usize).min(source.len()).saturating_sub(line_start);

        let chars = source
            .get(line_start..)
            .unwrap_or_default()
            .char_indices()
            .take_while(|&(i, c)| i + c.len_utf8() <= rel)
            .count();
        let col = u32::try_from(chars).unwrap_or(u32::MAX - 1) + 1;

        (line, col)
    }

    /// Get the byte offset of a line start (1-based line number).
    ///
    /// Returns `None` if the line number is out of range.
    pub fn line_start_offset(&self, line: u32) -> Option<u32> {
        if line == 0 {
            return None;
        }
        self.offsets.get((line - 1) as usize).copied()
    }

    /// Get the number of lines in the source.
    pub fn line_count(&self) -> usize {
        self.offsets.len()
    }
}
