//! Indent configuration.
//!
//! Hosts derive an [`IndentOptions`] from their per-document (or global) settings and pass it
//! by value into every call. Nothing here is cached between calls.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Whitespace conventions of the document receiving a paste.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct IndentOptions {
    /// Indent with `' '` when `true`, with `'\t'` otherwise.
    pub insert_spaces: bool,
    /// Width of a tab stop in columns. Must be greater than 0.
    pub tab_size: usize,
}

impl IndentOptions {
    /// Create indent options from the two editor settings.
    pub fn new(insert_spaces: bool, tab_size: usize) -> Self {
        Self {
            insert_spaces,
            tab_size,
        }
    }

    /// Space indentation, expanding existing tabs to `tab_size` columns.
    pub fn spaces(tab_size: usize) -> Self {
        Self::new(true, tab_size)
    }

    /// Tab indentation.
    pub fn tabs(tab_size: usize) -> Self {
        Self::new(false, tab_size)
    }

    /// The single character used to build every output indentation run.
    pub fn indent_char(&self) -> char {
        if self.insert_spaces { ' ' } else { '\t' }
    }
}

impl Default for IndentOptions {
    fn default() -> Self {
        Self::spaces(4)
    }
}
