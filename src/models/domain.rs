use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// One genderize.io result record
///
/// Only `name` and `gender` are interpreted. Everything else the API returns
/// (`probability`, `count`, `country_id`, ...) is kept in `extra` so the
/// record passes through unchanged. Parsing is strict: a missing `name` or
/// a non-string `gender` rejects the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenderResult {
    pub name: String,
    /// `None` when the API has no prediction for the name
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl GenderResult {
    /// Create a record with only a name and gender label
    pub fn new(name: impl Into<String>, gender: Option<&str>) -> Self {
        Self {
            name: name.into(),
            gender: gender.map(str::to_string),
            extra: Map::new(),
        }
    }

    pub fn is_female(&self) -> bool {
        self.gender.as_deref() == Some("female")
    }
}

/// Honorific derived from a gender prediction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Title {
    #[default]
    Mr,
    Ms,
}

impl Title {
    pub fn as_str(&self) -> &'static str {
        match self {
            Title::Mr => "Mr",
            Title::Ms => "Ms",
        }
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
