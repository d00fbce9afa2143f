//! Multi-caret paste with relative reindentation.
//!
//! # Overview
//!
//! A paste is split in two steps so hosts can preview or apply edits themselves:
//!
//! - [`plan_paste`] computes one [`PasteEdit`] per selection, in the coordinates of the
//!   unmodified document. Each selection gets its own target offset from the text preceding
//!   it on its line, so carets at different depths receive differently indented copies.
//! - [`apply_paste`] applies the plan and returns where the selections end up.
//!
//! [`paste_from_clipboard`] ties both to a [`ClipboardSource`], reading the clipboard before
//! the document is mutated.
//!
//! # Example
//!
//! ```rust
//! use paste_indent_host::{Document, PasteSettings, Position, Selection, apply_paste};
//!
//! let mut doc = Document::new("fn main() {\n    \n}");
//! let caret = Selection::caret(Position::new(1, 4));
//!
//! apply_paste(&mut doc, &[caret], "if ok {\n    run();\n}", PasteSettings::default()).unwrap();
//!
//! assert_eq!(doc.text(), "fn main() {\n    if ok {\n        run();\n    }\n}");
//! ```

use crate::document::normalize_line_endings;
use crate::selection::normalize_selections;
use crate::{ClipboardSource, Document, PasteError, PasteSettings, Position, Selection};
use paste_indent::{is_indent_whitespace, is_multiline, reindent};

/// A planned replacement of `start..end` (pre-edit coordinates) with `text`.
///
/// `start == end` is a plain insertion at a caret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasteEdit {
    /// Start of the replaced range.
    pub start: Position,
    /// End of the replaced range.
    pub end: Position,
    /// Text to put in place of the range.
    pub text: String,
}

/// Target offset for a paste whose caret sits after `line_prefix`.
///
/// This is the index of the first non-whitespace character of the prefix, i.e. the
/// indentation of the code the caret follows. When the prefix is all whitespace (or empty)
/// the caret column itself is the target.
///
/// ```rust
/// use paste_indent_host::paste_offset;
///
/// assert_eq!(paste_offset("    let x = ", 12), 4);
/// assert_eq!(paste_offset("\t\t", 2), 2);
/// assert_eq!(paste_offset("", 0), 0);
/// ```
pub fn paste_offset(line_prefix: &str, caret_column: usize) -> usize {
    line_prefix
        .chars()
        .position(|ch| !is_indent_whitespace(ch))
        .unwrap_or(caret_column)
}

/// Compute the edits pasting `text` into every selection of `document` would make.
///
/// Selections are normalized first (sorted, overlaps merged). Empty selections insert at the
/// caret, the others are replaced. `text` is LF-normalized; when it spans several lines every
/// copy is reindented for its own caret.
pub fn plan_paste(
    document: &Document,
    selections: &[Selection],
    text: &str,
) -> Result<Vec<PasteEdit>, PasteError> {
    let options = document.options();
    if options.tab_size == 0 {
        return Err(PasteError::InvalidTabSize(options.tab_size));
    }

    let text = normalize_line_endings(text);
    let multiline = is_multiline(&text);

    normalize_selections(selections)
        .into_iter()
        .map(|selection| {
            let (start, end) = (selection.start(), selection.end());
            document.position_to_char(end)?;
            let prefix = document.line_prefix(start)?;

            let text = if multiline {
                let offset = paste_offset(&prefix, start.column);
                tracing::trace!(
                    line = start.line,
                    column = start.column,
                    offset,
                    "reindent paste"
                );
                reindent(&text, offset, &options)
            } else {
                text.clone()
            };

            Ok(PasteEdit { start, end, text })
        })
        .collect()
}

/// Paste `text` into every selection of `document`.
///
/// Returns the selections after the paste, one per edit in document order:
/// - a caret right after each pasted block, or
/// - with [`PasteSettings::select_after`] and multi-line `text`, a selection spanning the
///   reindented lines of each block (column 0 of its second line through the end of its last).
pub fn apply_paste(
    document: &mut Document,
    selections: &[Selection],
    text: &str,
    settings: PasteSettings,
) -> Result<Vec<Selection>, PasteError> {
    let edits = plan_paste(document, selections, text)?;
    let spans = edits
        .iter()
        .map(|edit| {
            Ok((
                document.position_to_char(edit.start)?,
                document.position_to_char(edit.end)?,
            ))
        })
        .collect::<Result<Vec<_>, PasteError>>()?;

    // Back to front, so earlier spans stay valid.
    for (edit, &(start, end)) in edits.iter().zip(&spans).rev() {
        document.replace_chars(start, end, &edit.text);
    }

    let select_after = settings.select_after && is_multiline(text);
    let mut inserted_before = 0;
    let mut deleted_before = 0;
    let mut result = Vec::with_capacity(edits.len());

    for (edit, &(start, end)) in edits.iter().zip(&spans) {
        let inserted = edit.text.chars().count();
        let new_start = start - deleted_before + inserted_before;
        let new_end = new_start + inserted;
        inserted_before += inserted;
        deleted_before += end - start;

        let block_end = document.char_to_position(new_end);
        if select_after {
            let block_start = document.char_to_position(new_start);
            let last_len = document.line_len(block_end.line).unwrap_or(block_end.column);
            result.push(Selection::new(
                Position::new(block_start.line + 1, 0),
                Position::new(block_end.line, last_len),
            ));
        } else {
            result.push(Selection::caret(block_end));
        }
    }

    tracing::debug!(edits = edits.len(), select_after, "paste applied");
    Ok(result)
}

/// Read `clipboard` and paste its text into every selection of `document`.
///
/// Returns `Ok(None)` without touching the document when the clipboard is empty.
pub fn paste_from_clipboard<C>(
    document: &mut Document,
    selections: &[Selection],
    clipboard: &mut C,
    settings: PasteSettings,
) -> Result<Option<Vec<Selection>>, PasteError>
where
    C: ClipboardSource + ?Sized,
{
    let text = clipboard.read_text()?;
    if text.is_empty() {
        tracing::debug!("clipboard is empty, nothing to paste");
        return Ok(None);
    }

    apply_paste(document, selections, &text, settings).map(Some)
}
