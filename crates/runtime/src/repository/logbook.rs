//! The match logbook: flow text and committed actions, in order.

use arena_core::{CharacterSnapshot, Value};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as Json};

use super::Result;

/// One line of the logbook.
///
/// Serialised untagged: messages are bare strings, actions are objects with
/// `action`, `source` and `target`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LogEntry<N: Value = i64> {
    Message(String),
    Action {
        action: String,
        source: CharacterSnapshot<N>,
        target: Vec<CharacterSnapshot<N>>,
    },
}

impl<N: Value> LogEntry<N> {
    pub fn message(&self) -> Option<&str> {
        match self {
            LogEntry::Message(text) => Some(text),
            LogEntry::Action { .. } => None,
        }
    }
}

/// Everything a match produced worth keeping.
#[derive(Clone, Debug, PartialEq)]
pub struct Logbook<N: Value = i64> {
    entries: Vec<LogEntry<N>>,
}

impl<N: Value> Default for Logbook<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Value> Logbook<N> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, entry: LogEntry<N>) {
        self.entries.push(entry);
    }

    pub fn push_message(&mut self, text: impl Into<String>) {
        self.entries.push(LogEntry::Message(text.into()));
    }

    pub fn entries(&self) -> &[LogEntry<N>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Plain text entries only.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(LogEntry::message)
    }

    /// Actions committed so far, by name.
    pub fn actions(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(|entry| match entry {
            LogEntry::Action { action, .. } => Some(action.as_str()),
            LogEntry::Message(_) => None,
        })
    }
}

impl<N> Logbook<N>
where
    N: Value + Serialize + DeserializeOwned,
{
    /// `{"log": [...]}`.
    pub fn to_json(&self) -> Result<Json> {
        let entries = serde_json::to_value(&self.entries)?;
        let mut document = Map::new();
        document.insert(String::from("log"), entries);
        Ok(Json::Object(document))
    }

    /// Reads a logbook document. Anything without an array `log` field is an
    /// empty logbook; entries inside the array must be well formed.
    pub fn from_json(document: Json) -> Result<Self> {
        let entries = match document {
            Json::Object(mut fields) => match fields.remove("log") {
                Some(log @ Json::Array(_)) => serde_json::from_value(log)?,
                _ => Vec::new(),
            },
            _ => Vec::new(),
        };
        Ok(Self { entries })
    }
}
