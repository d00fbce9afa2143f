//! Settings snapshots.
//!
//! Hosts hand over their configuration as a JSON object shaped like an editor settings file:
//!
//! ```json
//! {
//!     "editor": { "insertSpaces": true, "tabSize": 4 },
//!     "pasteAndIndent": { "selectAfter": false }
//! }
//! ```
//!
//! A [`SettingsStore`] keeps the last loaded [`PasteSettings`] and refreshes it only when a
//! [`ConfigurationChange`] touches the `pasteAndIndent` section. Paste operations receive the
//! snapshot by value; nothing reads configuration implicitly.

use crate::PasteError;
use paste_indent::IndentOptions;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Name of the settings section owned by the paste command.
pub const SETTINGS_SECTION: &str = "pasteAndIndent";

/// Name of the settings section holding the editor's indent options.
pub const EDITOR_SECTION: &str = "editor";

/// Snapshot of the `pasteAndIndent` settings section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PasteSettings {
    /// Select the reindented lines after a multi-line paste.
    pub select_after: bool,
}

impl PasteSettings {
    /// Read the `pasteAndIndent` section of `config`.
    ///
    /// A missing section (or key) yields the defaults.
    pub fn from_configuration(config: &Value) -> Result<Self, PasteError> {
        read_section(config, SETTINGS_SECTION)
    }
}

/// Read `editor.insertSpaces` / `editor.tabSize`, defaulting to 4 spaces.
pub fn indent_options_from_configuration(config: &Value) -> Result<IndentOptions, PasteError> {
    read_section(config, EDITOR_SECTION)
}

fn read_section<T>(config: &Value, section: &str) -> Result<T, PasteError>
where
    T: Default + for<'de> Deserialize<'de>,
{
    match config.get(section) {
        None | Some(Value::Null) => Ok(T::default()),
        Some(value) => Ok(T::deserialize(value)?),
    }
}

/// The set of keys a configuration change touched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigurationChange {
    keys: Vec<String>,
}

impl ConfigurationChange {
    /// A change touching the given dotted keys (e.g. `pasteAndIndent.selectAfter`).
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns `true` if any changed key is `section` itself or lies below it.
    pub fn affects(&self, section: &str) -> bool {
        self.keys.iter().any(|key| {
            key == section
                || key
                    .strip_prefix(section)
                    .is_some_and(|rest| rest.starts_with('.'))
        })
    }
}

/// Holder of the current [`PasteSettings`] snapshot.
#[derive(Debug, Clone, Default)]
pub struct SettingsStore {
    current: PasteSettings,
}

impl SettingsStore {
    /// Load the initial snapshot from `config`.
    pub fn load(config: &Value) -> Result<Self, PasteError> {
        let current = PasteSettings::from_configuration(config)?;
        tracing::debug!(select_after = current.select_after, "paste settings loaded");
        Ok(Self { current })
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> PasteSettings {
        self.current
    }

    /// React to a configuration change notification.
    ///
    /// Reloads from `config` only when `change` affects the `pasteAndIndent` section and
    /// returns whether a reload happened. On error the previous snapshot is kept.
    pub fn on_configuration_changed(
        &mut self,
        change: &ConfigurationChange,
        config: &Value,
    ) -> Result<bool, PasteError> {
        if !change.affects(SETTINGS_SECTION) {
            return Ok(false);
        }

        self.current = PasteSettings::from_configuration(config)?;
        tracing::debug!(
            select_after = self.current.select_after,
            "paste settings reloaded"
        );
        Ok(true)
    }
}
