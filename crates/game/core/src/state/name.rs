//! Character names.

use std::fmt;

/// Given name plus optional family name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Name {
    pub given: String,
    pub family: Option<String>,
}

impl Name {
    pub fn new(given: impl Into<String>, family: impl Into<String>) -> Self {
        Self {
            given: given.into(),
            family: Some(family.into()),
        }
    }

    /// Short form used in menus and combat descriptions.
    pub fn display(&self) -> String {
        self.given.clone()
    }

    /// Given and family name.
    pub fn full(&self) -> String {
        match &self.family {
            Some(family) if !family.is_empty() => format!("{} {}", self.given, family),
            _ => self.given.clone(),
        }
    }
}

impl From<&str> for Name {
    fn from(given: &str) -> Self {
        Self {
            given: given.to_owned(),
            family: None,
        }
    }
}

impl From<String> for Name {
    fn from(given: String) -> Self {
        Self {
            given,
            family: None,
        }
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full())
    }
}
