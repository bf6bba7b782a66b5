//! Line/column lookup for rendering spans.
//!
//! Spans are byte offsets; humans want `line:column`. [`LineOffsetTable`]
//! precomputes line starts once per file so each lookup is a binary search.

use keel_ir::Span;

/// Byte offset of every line start in a source text.
///
/// ```
/// use keel_diagnostic::span_utils::LineOffsetTable;
///
/// let source = "class C\n{\n}";
/// let table = LineOffsetTable::build(source);
/// assert_eq!(table.line_col(source, 0), (1, 1));
/// assert_eq!(table.line_col(source, 8), (2, 1));
/// assert_eq!(table.line_text(source, 3), Some("}"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    // starts[i] is the offset of line i + 1
    starts: Vec<u32>,
}

impl LineOffsetTable {
    pub fn build(source: &str) -> Self {
        let mut starts = vec![0u32];
        starts.extend(
            source
                .bytes()
                .enumerate()
                .filter(|(_, b)| *b == b'\n')
                .map(|(i, _)| u32::try_from(i + 1).unwrap_or(u32::MAX)),
        );
        LineOffsetTable { starts }
    }

    /// 1-based line containing `offset`.
    pub fn line(&self, offset: u32) -> u32 {
        let idx = match self.starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        u32::try_from(idx).unwrap_or(u32::MAX - 1) + 1
    }

    /// 1-based `(line, column)`; the column counts characters, not bytes.
    pub fn line_col(&self, source: &str, offset: u32) -> (u32, u32) {
        let line = self.line(offset);
        let start = self.line_start(line).unwrap_or(0) as usize;
        let end = (offset as usize).min(source.len());
        let col = source
            .get(start..end)
            .map_or(0, |prefix| prefix.chars().count());
        (line, u32::try_from(col).unwrap_or(u32::MAX - 1) + 1)
    }

    /// Offset of the first byte of 1-based `line`.
    pub fn line_start(&self, line: u32) -> Option<u32> {
        let idx = line.checked_sub(1)?;
        self.starts.get(idx as usize).copied()
    }

    /// Text of 1-based `line`, without its line terminator.
    pub fn line_text<'s>(&self, source: &'s str, line: u32) -> Option<&'s str> {
        let start = self.line_start(line)? as usize;
        let end = self
            .line_start(line + 1)
            .map_or(source.len(), |next| next as usize);
        let text = source.get(start..end)?;
        Some(text.trim_end_matches(['\n', '\r']))
    }

    pub fn line_count(&self) -> usize {
        self.starts.len()
    }

    /// `line:col` of a span's start, as printed in diagnostics.
    pub fn location(&self, source: &str, span: Span) -> String {
        let (line, col) = self.line_col(source, span.start);
        format!("{line}:{col}")
    }
}

#[cfg(test)]
mod tests;
