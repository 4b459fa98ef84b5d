use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::validation::is_valid_option_name;
use crate::config::BagConfig;
use crate::normalizer::KeyMode;

/// State of a recorded option. Never-added options have no record at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionState {
    Active,
    /// Tombstone left by [`OptionSet::remove`].
    Removed,
}

#[derive(Debug, Clone, PartialEq)]
struct OptionEntry {
    original: String,
    state: OptionState,
    seq: u64,
}

/// A set of named flags with tombstones.
///
/// Removing an option keeps a `Removed` record, so callers can tell "never
/// set" from "explicitly turned off". Names rejected by the validator
/// (by default [`is_valid_option_name`]: empty or whitespace) are silently
/// ignored.
#[derive(Debug, Clone)]
pub struct OptionSet {
    entries: HashMap<String, OptionEntry>,
    mode: KeyMode,
    validator: fn(&str) -> bool,
    next_seq: u64,
}

impl Default for OptionSet {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            mode: KeyMode::default(),
            validator: is_valid_option_name,
            next_seq: 0,
        }
    }
}

impl OptionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &BagConfig) -> Self {
        Self::new().with_key_mode(config.key_mode())
    }

    pub fn with_key_mode(mut self, mode: KeyMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn key_mode(&self) -> KeyMode {
        self.mode
    }

    /// Replace the rule deciding which names are accepted.
    ///
    /// The validator sees the name as given, before key resolution. It
    /// replaces the default rule, so it must reject blank names itself if
    /// they should stay out.
    ///
    /// ```
    /// use attrbag::OptionSet;
    ///
    /// let mut options = OptionSet::new()
    ///     .with_validator(|name| name.chars().all(|c| c.is_ascii_alphanumeric()));
    /// options.add("verbose").add("dry-run");
    /// assert_eq!(options.active_options(), vec!["verbose"]);
    /// ```
    pub fn with_validator(mut self, validator: fn(&str) -> bool) -> Self {
        self.validator = validator;
        self
    }

    pub fn is_valid(&self, name: &str) -> bool {
        (self.validator)(name)
    }

    pub fn add(&mut self, name: &str) -> &mut Self {
        if self.accept(name) {
            self.record(name, OptionState::Active);
        }
        self
    }

    /// Add every valid name. For names normalizing to the same option the
    /// last spelling is the one reported.
    pub fn add_all<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let valid: Vec<S> = names
            .into_iter()
            .filter(|name| self.accept(name.as_ref()))
            .collect();
        for name in &valid {
            self.record(name.as_ref(), OptionState::Active);
        }
        self
    }

    /// Mark `name` as removed, creating the tombstone if needed.
    pub fn remove(&mut self, name: &str) -> &mut Self {
        if self.accept(name) {
            self.record(name, OptionState::Removed);
        }
        self
    }

    /// Forget `name` entirely.
    pub fn unset(&mut self, name: &str) -> &mut Self {
        if self.accept(name) && self.entries.remove(&*self.mode.resolve(name)).is_some() {
            trace!(name, "option unset");
        }
        self
    }

    /// True only for active options.
    pub fn has(&self, name: &str) -> bool {
        self.state(name) == Some(OptionState::Active)
    }

    pub fn is_removed(&self, name: &str) -> bool {
        self.state(name) == Some(OptionState::Removed)
    }

    pub fn state(&self, name: &str) -> Option<OptionState> {
        self.entries
            .get(&*self.mode.resolve(name))
            .map(|entry| entry.state)
    }

    /// Active option names, as spelled when last recorded.
    pub fn active_options(&self) -> Vec<&str> {
        self.names_in(OptionState::Active)
    }

    /// Removed option names, as spelled when last recorded.
    pub fn removed_options(&self) -> Vec<&str> {
        self.names_in(OptionState::Removed)
    }

    /// Drop every record, active and removed.
    pub fn clear(&mut self) -> &mut Self {
        self.entries.clear();
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn accept(&self, name: &str) -> bool {
        let valid = self.is_valid(name);
        if !valid {
            debug!(name, "ignoring invalid option name");
        }
        valid
    }

    fn record(&mut self, name: &str, state: OptionState) {
        let key = self.mode.resolve(name).into_owned();
        match self.entries.get_mut(&key) {
            Some(entry) => {
                entry.original = name.to_string();
                entry.state = state;
            }
            None => {
                let seq = self.next_seq;
                self.next_seq += 1;
                self.entries.insert(
                    key,
                    OptionEntry {
                        original: name.to_string(),
                        state,
                        seq,
                    },
                );
            }
        }
        trace!(name, ?state, "option recorded");
    }

    fn names_in(&self, state: OptionState) -> Vec<&str> {
        let mut entries: Vec<&OptionEntry> = self
            .entries
            .values()
            .filter(|entry| entry.state == state)
            .collect();
        entries.sort_by_key(|entry| entry.seq);
        entries
            .into_iter()
            .map(|entry| entry.original.as_str())
            .collect()
    }
}
