#![warn(missing_docs)]
//! Paste Indent - Relative Reindentation for Pasted Text
//!
//! # Overview
//!
//! `paste-indent` recomputes the leading whitespace of a multi-line block so that, once pasted
//! at a new column, the block keeps its internal nesting and lines up with the surrounding text.
//! It works purely on whitespace characters and knows nothing about programming languages.
//!
//! The first line is never touched: it is concatenated directly after whatever already sits
//! on the paste line. Every following line is shifted so that the least-indented one lands on
//! the requested offset, and all others keep their distance from it.
//!
//! # Quick Start
//!
//! ```rust
//! use paste_indent::{IndentOptions, reindent};
//!
//! let block = "if (true) {\n    x = 1;\n}";
//! let pasted = reindent(block, 8, &IndentOptions::spaces(4));
//!
//! assert_eq!(pasted, "if (true) {\n            x = 1;\n        }");
//! ```
//!
//! # Module Description
//!
//! - [`options`] - Indent configuration (spaces vs. tabs, tab size)
//! - [`reindent`] - The reindentation algorithm and its per-line measurement
//!
//! The crate performs no I/O and keeps no state, so it is safe to call from any number of
//! threads at once. Host integrations (clipboard, carets, documents) live in
//! `paste-indent-host`.
//!
//! # Features
//!
//! - `serde` - `Serialize`/`Deserialize` for [`IndentOptions`] using the editor's
//!   `insertSpaces`/`tabSize` keys. Its tests live in the `serde` test target, which only
//!   builds with the feature enabled (`cargo test -p paste-indent --features serde`).

pub mod options;
pub mod reindent;

pub use options::IndentOptions;
pub use reindent::{is_indent_whitespace, is_multiline, leading_width, reindent};
