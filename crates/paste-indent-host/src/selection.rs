//! Carets and selections.

use std::cmp::Ordering;

/// Position coordinates (line and column numbers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Zero-based logical line index.
    pub line: usize,
    /// Zero-based column in characters within the logical line.
    pub column: usize,
}

impl Position {
    /// Create a new logical position.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.line
            .cmp(&other.line)
            .then_with(|| self.column.cmp(&other.column))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A selection between a fixed `anchor` and a moving `active` end.
///
/// When both ends coincide the selection is a plain caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selection {
    /// The end that stays put while extending.
    pub anchor: Position,
    /// The end that follows the caret.
    pub active: Position,
}

impl Selection {
    /// Create a selection from `anchor` to `active`.
    pub fn new(anchor: Position, active: Position) -> Self {
        Self { anchor, active }
    }

    /// An empty selection (caret) at `position`.
    pub fn caret(position: Position) -> Self {
        Self::new(position, position)
    }

    /// The earlier of the two ends.
    pub fn start(&self) -> Position {
        self.anchor.min(self.active)
    }

    /// The later of the two ends.
    pub fn end(&self) -> Position {
        self.anchor.max(self.active)
    }

    /// Returns `true` if this selection is a caret.
    pub fn is_empty(&self) -> bool {
        self.anchor == self.active
    }
}

/// Sort selections by position and merge the ones that overlap.
///
/// Touching selections (one starts exactly where the previous ends) are kept apart, exact
/// duplicates are dropped and merged ranges are canonicalized to point forward.
pub(crate) fn normalize_selections(selections: &[Selection]) -> Vec<Selection> {
    let mut sorted = selections.to_vec();
    sorted.sort_by(|a, b| {
        a.start()
            .cmp(&b.start())
            .then_with(|| a.end().cmp(&b.end()))
    });

    let mut merged: Vec<Selection> = Vec::with_capacity(sorted.len());
    for sel in sorted {
        let Some(last) = merged.last_mut() else {
            merged.push(sel);
            continue;
        };

        if sel.start() < last.end() {
            *last = Selection::new(last.start().min(sel.start()), last.end().max(sel.end()));
        } else if sel.start() == last.start() && sel.end() == last.end() {
            continue;
        } else {
            merged.push(sel);
        }
    }

    merged
}
