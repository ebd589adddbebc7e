//! Team record and prior-experience tags

use serde::Serialize;

use super::{FieldText, ValidationError};

/// Prior-experience tags (`hpHistory`).
///
/// Behaves as a set: duplicates collapse to their first occurrence. Stored as
/// a JSON array in `teams.hp_history`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HistoryTags(Vec<String>);

impl HistoryTags {
    /// Validate and de-duplicate raw tags.
    pub fn new<I, S>(tags: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out: Vec<String> = Vec::new();
        for tag in tags {
            let tag = FieldText::new("hpHistory", tag.as_ref())?;
            if !out.iter().any(|t| t == tag.as_str()) {
                out.push(tag.as_str().to_owned());
            }
        }
        Ok(Self(out))
    }

    /// Serialize for storage.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.0)
    }

    /// Parse the stored representation.
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s).map(Self)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Validated team (parent) record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub startup_name: FieldText,
    pub country: FieldText,
    pub city: FieldText,
    pub university: FieldText,
    pub sdg: FieldText,
    pub history: HistoryTags,
    pub lead_source: FieldText,
}

/// Generated identifier of a stored team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TeamId(i64);

impl TeamId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
