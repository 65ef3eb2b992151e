//! Trigger-list parsing.

use serde::{Deserialize, Serialize};

/// An ordered set of case-sensitive trigger strings.
///
/// Parsed from a comma-separated source with all whitespace removed. Empty
/// entries are discarded, so an empty source yields an empty set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct TriggerSet {
    triggers: Vec<String>,
}

impl TriggerSet {
    /// Parses a comma-separated trigger list.
    #[must_use]
    pub fn parse(source: &str) -> Self {
        let stripped: String = source.chars().filter(|c| !c.is_whitespace()).collect();
        let mut triggers: Vec<String> = Vec::new();

        for part in stripped.split(',') {
            if !part.is_empty() && !triggers.iter().any(|t| t == part) {
                triggers.push(part.to_string());
            }
        }

        Self { triggers }
    }

    /// Whether `candidate` is exactly one of the triggers.
    #[must_use]
    pub fn contains(&self, candidate: &str) -> bool {
        self.triggers.iter().any(|t| t == candidate)
    }

    /// Whether the single character `c` is one of the triggers.
    #[must_use]
    pub fn contains_char(&self, c: char) -> bool {
        let mut buf = [0u8; 4];
        self.contains(c.encode_utf8(&mut buf))
    }

    /// Iterates over the triggers in configured order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.triggers.iter().map(String::as_str)
    }

    /// Number of triggers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    /// Whether no trigger is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }
}

impl From<String> for TriggerSet {
    fn from(source: String) -> Self {
        Self::parse(&source)
    }
}

impl From<TriggerSet> for String {
    fn from(set: TriggerSet) -> Self {
        set.triggers.join(",")
    }
}

impl<S: AsRef<str>> FromIterator<S> for TriggerSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::default();
        for trigger in iter {
            let trigger = trigger.as_ref();
            if !trigger.is_empty() && !set.contains(trigger) {
                set.triggers.push(trigger.to_string());
            }
        }
        set
    }
}
