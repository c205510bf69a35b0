//! Source text with a precomputed line table, for turning byte offsets into
//! line/column pairs when rendering.

use std::path::{Path, PathBuf};

#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
#[derive(Debug, Clone)]
pub struct SourceFile {
    name: String,
    path: Option<PathBuf>,
    text: String,

    line_breaks: Vec<usize>,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        let line_breaks = text
            .char_indices()
            .filter_map(|(i, ch)| (ch == '\n').then_some(i))
            .collect();

        Self {
            name: name.into(),
            path: None,
            text,
            line_breaks,
        }
    }

    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// 1-based line and column of a byte offset. The offset one past the end
    /// is valid, since that is where end-of-input diagnostics point.
    pub fn byte_to_line_col(&self, byte: usize) -> Option<(usize, usize)> {
        let line = self.byte_to_line_index(byte)?;

        let line_start = self.line_to_byte(line)?;
        let col = byte - line_start;

        Some((line + 1, col + 1))
    }

    pub fn byte_to_line_index(&self, byte: usize) -> Option<usize> {
        if byte > self.text.len() {
            return None;
        }

        match self.line_breaks.binary_search(&byte) {
            Ok(line) | Err(line) => Some(line),
        }
    }

    pub fn line_to_byte(&self, line: usize) -> Option<usize> {
        if line == 0 {
            Some(0)
        } else {
            self.line_breaks.get(line - 1).map(|&byte| byte + 1)
        }
    }

    /// The text of a line without its terminator.
    pub fn line_str(&self, index: usize) -> Option<&str> {
        let start = self.line_to_byte(index)?;
        let end = self.line_to_byte(index + 1).unwrap_or(self.text.len());

        let s = &self.text[start..end];
        let s = s.strip_suffix('\n').unwrap_or(s);
        let s = s.strip_suffix('\r').unwrap_or(s);

        Some(s)
    }

    pub fn num_lines(&self) -> usize {
        1 + self.line_breaks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::SourceFile;

    fn source(s: &str) -> SourceFile {
        SourceFile::new("sample", s)
    }

    #[test]
    fn line_index_of_offsets() {
        let file = source("");
        assert_eq!(file.byte_to_line_index(0), Some(0));
        assert_eq!(file.byte_to_line_index(1), None);

        let file = source("var x = 1\nx");
        assert_eq!(file.byte_to_line_index(0), Some(0));
        assert_eq!(file.byte_to_line_index(9), Some(0));
        assert_eq!(file.byte_to_line_index(10), Some(1));
        assert_eq!(file.byte_to_line_index(11), Some(1));
        assert_eq!(file.byte_to_line_index(12), None);
    }

    #[test]
    fn line_col_is_one_based() {
        let file = source("\nx");
        assert_eq!(file.byte_to_line_col(0), Some((1, 1)));
        assert_eq!(file.byte_to_line_col(1), Some((2, 1)));
        assert_eq!(file.byte_to_line_col(2), Some((2, 2)));

        let file = source("var = 1;\nvar y = 2;");
        assert_eq!(file.byte_to_line_col(4), Some((1, 5)));
        assert_eq!(file.byte_to_line_col(13), Some((2, 5)));
    }

    #[test]
    fn line_start_offsets() {
        let file = source("x\n");
        assert_eq!(file.line_to_byte(0), Some(0));
        assert_eq!(file.line_to_byte(1), Some(2));
        assert_eq!(file.line_to_byte(2), None);
        assert_eq!(file.num_lines(), 2);
    }

    #[test]
    fn line_text_strips_terminators() {
        let file = source("a\r\nb\n");
        assert_eq!(file.line_str(0), Some("a"));
        assert_eq!(file.line_str(1), Some("b"));
        assert_eq!(file.line_str(2), Some(""));
        assert_eq!(file.line_str(3), None);
    }
}
