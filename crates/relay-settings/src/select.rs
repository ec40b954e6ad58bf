//! Selection of the enabled option within a category.

use std::collections::BTreeMap;

use relay_config::{CodecOption, ProtocolOption};

/// An option that carries an enabled flag.
pub trait Toggled {
    /// Whether this option is marked as the active choice.
    fn enabled(&self) -> bool;
}

impl Toggled for ProtocolOption {
    fn enabled(&self) -> bool {
        self.enabled
    }
}

impl Toggled for CodecOption {
    fn enabled(&self) -> bool {
        self.enabled
    }
}

/// Outcome of scanning a category for its enabled option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<'a, T> {
    /// Exactly one entry is enabled.
    Unique {
        /// The entry's identifier.
        key: &'a str,

        /// The entry itself.
        option: &'a T,
    },

    /// Several entries are enabled. `key`/`option` hold the last enabled
    /// entry in iteration order; later entries override earlier ones.
    Ambiguous {
        /// The winning entry's identifier.
        key: &'a str,

        /// The winning entry.
        option: &'a T,

        /// How many entries were enabled.
        enabled_count: usize,
    },

    /// No entry is enabled.
    Absent,
}

impl<'a, T> Selection<'a, T> {
    /// The winning entry, if any.
    ///
    /// For `Ambiguous` this is the last enabled entry in iteration order,
    /// which matches the overwrite-on-iteration behavior the engine has
    /// always had. Callers that want ambiguity to be an error match on
    /// the variant instead.
    pub fn chosen(&self) -> Option<(&'a str, &'a T)> {
        match *self {
            Self::Unique { key, option } | Self::Ambiguous { key, option, .. } => {
                Some((key, option))
            }
            Self::Absent => None,
        }
    }

    /// The winning identifier, or the empty string when nothing is enabled.
    pub fn key(&self) -> &'a str {
        self.chosen().map(|(key, _)| key).unwrap_or_default()
    }

    /// Returns true if exactly one entry is enabled.
    pub fn is_unique(&self) -> bool {
        matches!(self, Self::Unique { .. })
    }

    /// Returns true if several entries are enabled.
    pub fn is_ambiguous(&self) -> bool {
        matches!(self, Self::Ambiguous { .. })
    }

    /// Returns true if no entry is enabled.
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

/// Scan a category mapping for its enabled entry.
///
/// Entries are visited in the map's sorted-key order. The last enabled
/// entry wins; zero and multiple enabled entries are reported as data,
/// never as errors. Pure function of its input.
pub fn select_enabled<T: Toggled>(options: &BTreeMap<String, T>) -> Selection<'_, T> {
    let mut winner = None;
    let mut enabled_count = 0usize;

    for (key, option) in options {
        if option.enabled() {
            winner = Some((key.as_str(), option));
            enabled_count += 1;
        }
    }

    match winner {
        Some((key, option)) if enabled_count == 1 => Selection::Unique { key, option },
        Some((key, option)) => Selection::Ambiguous {
            key,
            option,
            enabled_count,
        },
        None => Selection::Absent,
    }
}
