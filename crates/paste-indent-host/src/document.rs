//! In-memory document receiving pastes.
//!
//! Text is stored LF-normalized in a [`Rope`]. The line ending found on load is remembered so
//! the document can be written back the way it came in.

use crate::{PasteError, Position};
use paste_indent::IndentOptions;
use ropey::Rope;

/// The preferred newline sequence used when writing a document out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    /// Unix-style LF (`'\n'`).
    Lf,
    /// Windows-style CRLF (`"\r\n"`).
    Crlf,
}

impl LineEnding {
    /// CRLF if `text` contains any `"\r\n"`, LF otherwise.
    pub fn detect(text: &str) -> Self {
        if text.contains("\r\n") {
            Self::Crlf
        } else {
            Self::Lf
        }
    }

    /// Convert LF-normalized text to this line ending.
    pub fn apply(self, text: &str) -> String {
        match self {
            Self::Lf => text.to_string(),
            Self::Crlf => text.replace('\n', "\r\n"),
        }
    }
}

/// Replace every `"\r\n"` with `'\n'`.
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n")
}

/// A text document with its own indent settings.
#[derive(Debug, Clone)]
pub struct Document {
    rope: Rope,
    line_ending: LineEnding,
    options: IndentOptions,
}

impl Document {
    /// Load `text` with default indent options.
    pub fn new(text: &str) -> Self {
        Self::with_options(text, IndentOptions::default())
    }

    /// Load `text` with per-document indent options.
    pub fn with_options(text: &str, options: IndentOptions) -> Self {
        Self {
            rope: Rope::from_str(&normalize_line_endings(text)),
            line_ending: LineEnding::detect(text),
            options,
        }
    }

    /// The LF-normalized content.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// The content using the line ending detected on load.
    pub fn text_with_line_ending(&self) -> String {
        self.line_ending.apply(&self.text())
    }

    /// Line ending detected on load.
    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Indent settings of this document.
    pub fn options(&self) -> IndentOptions {
        self.options
    }

    /// Replace the indent settings of this document.
    pub fn set_options(&mut self, options: IndentOptions) {
        self.options = options;
    }

    /// Number of lines; `N` line feeds make `N + 1` lines.
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Length of `line` in characters, excluding its line feed.
    pub fn line_len(&self, line: usize) -> Option<usize> {
        if line >= self.line_count() {
            return None;
        }
        let slice = self.rope.line(line);
        let len = slice.len_chars();
        if len > 0 && slice.char(len - 1) == '\n' {
            Some(len - 1)
        } else {
            Some(len)
        }
    }

    /// Text of `line`, excluding its line feed.
    pub fn line_text(&self, line: usize) -> Option<String> {
        let len = self.line_len(line)?;
        Some(self.rope.line(line).slice(..len).to_string())
    }

    /// Text of the line holding `position`, from column 0 up to `position.column`.
    pub fn line_prefix(&self, position: Position) -> Result<String, PasteError> {
        self.check_position(position)?;
        Ok(self
            .rope
            .line(position.line)
            .slice(..position.column)
            .to_string())
    }

    /// Character offset of `position`.
    pub fn position_to_char(&self, position: Position) -> Result<usize, PasteError> {
        self.check_position(position)?;
        Ok(self.rope.line_to_char(position.line) + position.column)
    }

    /// Position of character offset `offset`, clamped to the end of the document.
    pub fn char_to_position(&self, offset: usize) -> Position {
        let offset = offset.min(self.rope.len_chars());
        let line = self.rope.char_to_line(offset);
        Position::new(line, offset - self.rope.line_to_char(line))
    }

    /// Replace the text between `start` and `end` with `text`.
    ///
    /// `text` is LF-normalized before insertion.
    pub fn replace(
        &mut self,
        start: Position,
        end: Position,
        text: &str,
    ) -> Result<(), PasteError> {
        let (start, end) = if start <= end { (start, end) } else { (end, start) };
        let start = self.position_to_char(start)?;
        let end = self.position_to_char(end)?;
        self.replace_chars(start, end, &normalize_line_endings(text));
        Ok(())
    }

    pub(crate) fn replace_chars(&mut self, start: usize, end: usize, text: &str) {
        if start < end {
            self.rope.remove(start..end);
        }
        if !text.is_empty() {
            self.rope.insert(start, text);
        }
    }

    fn check_position(&self, position: Position) -> Result<(), PasteError> {
        match self.line_len(position.line) {
            Some(len) if position.column <= len => Ok(()),
            _ => Err(PasteError::PositionOutOfBounds {
                line: position.line,
                column: position.column,
            }),
        }
    }
}
