//! Core preference types
//!
//! A [`PrefEntry`] is one `user_pref(...)` declaration. A [`PrefSet`] is the
//! resolved mapping built from a sequence of entries, keyed by exact name.

use serde::{Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// A literal preference value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PrefValue {
    Bool(bool),
    Integer(i64),
    String(String),
}

impl fmt::Display for PrefValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrefValue::Bool(b) => write!(f, "{}", b),
            PrefValue::Integer(n) => write!(f, "{}", n),
            PrefValue::String(s) => f.write_str(s),
        }
    }
}

impl From<bool> for PrefValue {
    fn from(b: bool) -> Self {
        PrefValue::Bool(b)
    }
}

impl From<i64> for PrefValue {
    fn from(n: i64) -> Self {
        PrefValue::Integer(n)
    }
}

impl From<i32> for PrefValue {
    fn from(n: i32) -> Self {
        PrefValue::Integer(i64::from(n))
    }
}

impl From<&str> for PrefValue {
    fn from(s: &str) -> Self {
        PrefValue::String(s.to_string())
    }
}

impl From<String> for PrefValue {
    fn from(s: String) -> Self {
        PrefValue::String(s)
    }
}

/// Convenience accessors for [`PrefValue`]
pub trait PrefValueExt {
    fn as_bool(&self) -> Option<bool>;
    fn as_i64(&self) -> Option<i64>;
    fn as_str(&self) -> Option<&str>;
    fn is_bool(&self) -> bool;
    fn is_integer(&self) -> bool;
    fn is_string(&self) -> bool;
    /// Short type label used in human-readable output
    fn type_name(&self) -> &'static str;
}

impl PrefValueExt for PrefValue {
    fn as_bool(&self) -> Option<bool> {
        match self {
            PrefValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    fn as_i64(&self) -> Option<i64> {
        match self {
            PrefValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    fn as_str(&self) -> Option<&str> {
        match self {
            PrefValue::String(s) => Some(s),
            _ => None,
        }
    }

    fn is_bool(&self) -> bool {
        matches!(self, PrefValue::Bool(_))
    }

    fn is_integer(&self) -> bool {
        matches!(self, PrefValue::Integer(_))
    }

    fn is_string(&self) -> bool {
        matches!(self, PrefValue::String(_))
    }

    fn type_name(&self) -> &'static str {
        match self {
            PrefValue::Bool(_) => "bool",
            PrefValue::Integer(_) => "integer",
            PrefValue::String(_) => "string",
        }
    }
}

/// A single `user_pref("<key>", <value>);` declaration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrefEntry {
    pub key: String,
    pub value: PrefValue,
    /// 1-indexed source line of the declaration (0 when built in memory)
    #[serde(skip)]
    pub line: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<&'static str>,
}

impl PrefEntry {
    /// Build an entry that did not come from a file
    pub fn new(key: impl Into<String>, value: impl Into<PrefValue>) -> Self {
        PrefEntry {
            key: key.into(),
            value: value.into(),
            line: 0,
            explanation: None,
        }
    }
}

/// Ordered set of preferences with unique keys
///
/// Entries keep the position where their key first appeared. Inserting an
/// existing key replaces the stored entry (last write wins).
#[derive(Debug, Clone, Default)]
pub struct PrefSet {
    entries: Vec<PrefEntry>,
    index: HashMap<String, usize>,
}

impl PrefSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert an entry, returning the one it replaced
    pub fn insert(&mut self, entry: PrefEntry) -> Option<PrefEntry> {
        match self.index.get(&entry.key) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos], entry)),
            None => {
                self.index.insert(entry.key.clone(), self.entries.len());
                self.entries.push(entry);
                None
            }
        }
    }

    /// Look up a value by exact key
    pub fn get(&self, key: &str) -> Option<&PrefValue> {
        self.entry(key).map(|e| &e.value)
    }

    pub fn entry(&self, key: &str) -> Option<&PrefEntry> {
        self.index.get(key).map(|&pos| &self.entries[pos])
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PrefEntry> {
        self.entries.iter()
    }

    /// Key to value mapping, sorted by key
    pub fn to_map(&self) -> BTreeMap<String, PrefValue> {
        self.entries
            .iter()
            .map(|e| (e.key.clone(), e.value.clone()))
            .collect()
    }
}

/// Two sets are equal when they map the same keys to the same values
impl PartialEq for PrefSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .entries
                .iter()
                .all(|e| other.get(&e.key) == Some(&e.value))
    }
}

impl FromIterator<PrefEntry> for PrefSet {
    fn from_iter<I: IntoIterator<Item = PrefEntry>>(iter: I) -> Self {
        let mut set = PrefSet::new();
        for entry in iter {
            set.insert(entry);
        }
        set
    }
}

impl<'a> IntoIterator for &'a PrefSet {
    type Item = &'a PrefEntry;
    type IntoIter = std::slice::Iter<'a, PrefEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for PrefSet {
    type Item = PrefEntry;
    type IntoIter = std::vec::IntoIter<PrefEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Serializes as a JSON object in set order
impl Serialize for PrefSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.key, &entry.value)?;
        }
        map.end()
    }
}
