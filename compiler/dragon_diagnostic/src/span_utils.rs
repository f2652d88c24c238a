//! Line and column lookup for spans.

use dragon_ir::Span;

/// Pre-computed line offset table for line/column lookup.
///
/// ```
/// use dragon_diagnostic::span_utils::LineOffsetTable;
///
/// let source = "x: int = 1\ny: int = 2";
/// let table = LineOffsetTable::build(source);
///
/// assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
/// assert_eq!(table.offset_to_line_col(source, 11), (2, 1));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// Byte offset of each line start; `offsets[0] == 0`.
    offsets: Vec<u32>,
}

impl LineOffsetTable {
    /// Build a line offset table from source text.
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0u32];
        for (i, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                offsets.push(u32::try_from(i + 1).unwrap_or(u32::MAX));
            }
        }
        LineOffsetTable { offsets }
    }

    /// Get the 1-based line number containing a byte offset.
    pub fn line_from_offset(&self, offset: u32) -> u32 {
        let line_idx = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        u32::try_from(line_idx).unwrap_or(u32::MAX).saturating_add(1)
    }

    /// Get 1-based (line, column) from a byte offset.
    ///
    /// The column counts characters, not bytes.
    pub fn offset_to_line_col(&self, source: &str, offset: u32) -> (u32, u32) {
        let line = self.line_from_offset(offset);
        let line_start = self
            .offsets
            .get((line - 1) as usize)
            .copied()
            .unwrap_or(0) as usize;
        let end = (offset as usize).min(source.len());
        let col = source
            .get(line_start..end)
            .map_or(0, |text| text.chars().count());
        (line, u32::try_from(col).unwrap_or(u32::MAX).saturating_add(1))
    }

    /// Text of the 1-based line, without its terminator.
    pub fn line_text<'a>(&self, source: &'a str, line: u32) -> Option<&'a str> {
        let idx = line.checked_sub(1)? as usize;
        let start = *self.offsets.get(idx)? as usize;
        let end = self
            .offsets
            .get(idx + 1)
            .map_or(source.len(), |&next| next as usize);
        source
            .get(start..end)
            .map(|text| text.trim_end_matches(['\n', '\r']))
    }

    /// Number of lines in the source.
    pub fn line_count(&self) -> usize {
        self.offsets.len()
    }
}

/// Compute (line, column) of a span's start with a one-off table.
pub fn span_to_line_col(source: &str, span: Span) -> (u32, u32) {
    LineOffsetTable::build(source).offset_to_line_col(source, span.start)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_lookup() {
        let source = "a\nbb\nccc";
        let table = LineOffsetTable::build(source);
        assert_eq!(table.line_count(), 3);
        assert_eq!(table.line_from_offset(0), 1);
        assert_eq!(table.line_from_offset(2), 2);
        assert_eq!(table.line_from_offset(4), 2);
        assert_eq!(table.line_from_offset(5), 3);
    }

    #[test]
    fn test_columns_count_chars() {
        let source = "é = 1\nx";
        let table = LineOffsetTable::build(source);
        // 'é' is two bytes; '=' sits at byte 3, character column 3.
        assert_eq!(table.offset_to_line_col(source, 3), (1, 3));
        assert_eq!(table.offset_to_line_col(source, 7), (2, 1));
    }

    #[test]
    fn test_line_text() {
        let source = "first\r\nsecond\n";
        let table = LineOffsetTable::build(source);
        assert_eq!(table.line_text(source, 1), Some("first"));
        assert_eq!(table.line_text(source, 2), Some("second"));
        assert_eq!(table.line_text(source, 3), Some(""));
        assert_eq!(table.line_text(source, 4), None);
        assert_eq!(table.line_text(source, 0), None);
    }

    #[test]
    fn test_span_to_line_col() {
        assert_eq!(span_to_line_col("ab\ncd", Span::new(4, 5)), (2, 2));
    }
}
