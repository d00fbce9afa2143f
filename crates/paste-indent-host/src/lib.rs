#![warn(missing_docs)]
//! `paste-indent-host` - headless host integration for `paste-indent`.
//!
//! The reindentation core only turns a block of text into another block of text. Everything an
//! editor does around a "paste and indent" command lives here, without binding to any UI:
//!
//! - [`Document`] - rope-backed, LF-normalized text with per-document indent options
//! - [`Selection`] / [`Position`] - carets and selections in character columns
//! - [`paste`] - target offset detection, multi-caret planning and application
//! - [`ClipboardSource`] - the seam through which clipboard text arrives
//! - [`settings`] - immutable settings snapshots refreshed on configuration changes
//!
//! # Example
//!
//! ```rust
//! use paste_indent_host::{
//!     Document, Position, Selection, SettingsStore, StaticClipboard, paste_from_clipboard,
//! };
//! use serde_json::json;
//!
//! let store = SettingsStore::load(&json!({ "pasteAndIndent": { "selectAfter": true } })).unwrap();
//! let mut doc = Document::new("match x {\n    \n}");
//! let mut clipboard = StaticClipboard::new("Some(v) => {\n    use_it(v);\n}");
//!
//! let selections = paste_from_clipboard(
//!     &mut doc,
//!     &[Selection::caret(Position::new(1, 4))],
//!     &mut clipboard,
//!     store.snapshot(),
//! )
//! .unwrap()
//! .unwrap();
//!
//! assert_eq!(
//!     doc.text(),
//!     "match x {\n    Some(v) => {\n        use_it(v);\n    }\n}"
//! );
//! assert_eq!(
//!     selections,
//!     vec![Selection::new(Position::new(2, 0), Position::new(3, 5))]
//! );
//! ```

pub mod clipboard;
pub mod document;
pub mod error;
pub mod paste;
mod selection;
pub mod settings;

pub use clipboard::{ClipboardSource, StaticClipboard};
pub use document::{Document, LineEnding};
pub use error::{ClipboardError, PasteError};
pub use paste::{PasteEdit, apply_paste, paste_from_clipboard, paste_offset, plan_paste};
pub use paste_indent::IndentOptions;
pub use selection::{Position, Selection};
pub use settings::{
    ConfigurationChange, PasteSettings, SETTINGS_SECTION, SettingsStore,
    indent_options_from_configuration,
};
