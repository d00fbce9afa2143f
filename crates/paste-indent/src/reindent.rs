//! Relative reindentation of a pasted block.
//!
//! # Algorithm
//!
//! 1. Split the block on `'\n'`. A block without a line feed is returned as-is.
//! 2. Measure every line's leading whitespace in output units (see [`leading_width`]).
//!    Lines without any non-whitespace character are *blank* and carry no width.
//! 3. The *baseline* is the smallest width among the non-blank lines after the first one
//!    (0 when there is none).
//! 4. If the baseline is already 0 and the target offset is 0, the block is returned
//!    byte-for-byte.
//! 5. Otherwise the first line is kept, blank lines lose all their whitespace, and every
//!    other line is re-indented with `width - baseline + offset` indent characters.
//!
//! Only whitespace is inspected. "Whitespace" is the class accepted by [`is_indent_whitespace`],
//! so a trailing `'\r'` on a CRLF line belongs to the body of that line unless the line is
//! otherwise empty.

use crate::IndentOptions;
use std::iter;

/// Returns `true` if `text` spans more than one line.
///
/// Single-line text has no indentation to adjust and is always pasted verbatim.
pub fn is_multiline(text: &str) -> bool {
    text.contains('\n')
}

/// Returns `true` if `ch` may appear in the leading whitespace of a line.
///
/// This is Unicode `White_Space` plus U+FEFF ZERO WIDTH NO-BREAK SPACE, minus U+0085 NEXT
/// LINE: the whitespace class editors use when they look for the first non-blank character.
///
/// ```rust
/// use paste_indent::is_indent_whitespace;
///
/// assert!(is_indent_whitespace('\t'));
/// assert!(is_indent_whitespace('\u{feff}'));
/// assert!(!is_indent_whitespace('\u{85}'));
/// ```
pub fn is_indent_whitespace(ch: char) -> bool {
    match ch {
        '\u{feff}' => true,
        '\u{85}' => false,
        _ => ch.is_whitespace(),
    }
}

/// Measure the leading whitespace of `line` in output units.
///
/// - With spaces, each tab counts as `tab_size` columns and every other whitespace
///   character as one.
/// - With tabs, only tab characters count; other whitespace does not amount to a tab stop.
///
/// Returns `None` for a blank line (empty, or whitespace only).
///
/// ```rust
/// use paste_indent::{IndentOptions, leading_width};
///
/// assert_eq!(leading_width("\t  x", &IndentOptions::spaces(4)), Some(6));
/// assert_eq!(leading_width("\t  x", &IndentOptions::tabs(4)), Some(1));
/// assert_eq!(leading_width(" \t ", &IndentOptions::spaces(4)), None);
/// ```
pub fn leading_width(line: &str, options: &IndentOptions) -> Option<usize> {
    MeasuredLine::new(line, options).width
}

/// Reindent `text` so its least-indented line (after the first) starts at `offset`.
///
/// `offset` is expressed in indent characters of `options`. Relative nesting between lines
/// is preserved, output indentation is uniformly spaces or tabs, and the first line is never
/// modified. This never fails: any string and any offset produce a defined result.
///
/// ```rust
/// use paste_indent::{IndentOptions, reindent};
///
/// let block = "outer\n        inner1\n            inner2";
/// assert_eq!(
///     reindent(block, 2, &IndentOptions::spaces(4)),
///     "outer\n  inner1\n      inner2",
/// );
///
/// let block = "if (true) {\n\tx = 1;\n}";
/// assert_eq!(
///     reindent(block, 2, &IndentOptions::tabs(4)),
///     "if (true) {\n\t\t\tx = 1;\n\t\t}",
/// );
/// ```
pub fn reindent(text: &str, offset: usize, options: &IndentOptions) -> String {
    if !is_multiline(text) {
        return text.to_string();
    }

    let lines: Vec<MeasuredLine<'_>> = text
        .split('\n')
        .map(|line| MeasuredLine::new(line, options))
        .collect();

    let baseline = lines.iter().skip(1).filter_map(|line| line.width).min();
    if baseline == Some(0) && offset == 0 {
        return text.to_string();
    }
    let baseline = baseline.unwrap_or(0);

    let indent_char = options.indent_char();
    let mut out = String::with_capacity(text.len());

    for (index, line) in lines.iter().enumerate() {
        if index == 0 {
            out.push_str(line.raw);
            continue;
        }

        out.push('\n');
        let Some(width) = line.width else {
            // Blank lines never carry indentation.
            continue;
        };

        // `width >= baseline` for every non-blank line after the first.
        let depth = width.saturating_add(offset).saturating_sub(baseline);
        out.extend(iter::repeat_n(indent_char, depth));
        out.push_str(line.body);
    }

    out
}

/// A line split into its leading whitespace measurement and the text after it.
struct MeasuredLine<'a> {
    raw: &'a str,
    body: &'a str,
    width: Option<usize>,
}

impl<'a> MeasuredLine<'a> {
    fn new(raw: &'a str, options: &IndentOptions) -> Self {
        let Some(split) = raw
            .char_indices()
            .find(|(_, ch)| !is_indent_whitespace(*ch))
            .map(|(idx, _)| idx)
        else {
            return Self {
                raw,
                body: "",
                width: None,
            };
        };

        let (leading, body) = raw.split_at(split);
        Self {
            raw,
            body,
            width: Some(measure_leading(leading, options)),
        }
    }
}

fn measure_leading(leading: &str, options: &IndentOptions) -> usize {
    leading
        .chars()
        .map(|ch| match (ch, options.insert_spaces) {
            ('\t', true) => options.tab_size,
            (_, true) => 1,
            ('\t', false) => 1,
            (_, false) => 0,
        })
        .fold(0, usize::saturating_add)
}
