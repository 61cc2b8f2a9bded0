use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterId(pub u64);

impl From<u64> for ParameterId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for ParameterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ParameterName(pub(crate) String);

impl ParameterName {
    pub fn value(self) -> String {
        self.0
    }
}

#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum IllegalParameterName {
    #[error("A parameter name may not be empty.")]
    Empty,
}

impl TryFrom<String> for ParameterName {
    type Error = IllegalParameterName;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.trim().is_empty() {
            Err(IllegalParameterName::Empty)
        } else {
            Ok(Self(value))
        }
    }
}

impl TryFrom<&str> for ParameterName {
    type Error = IllegalParameterName;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        ParameterName::try_from(value.to_owned())
    }
}

impl From<ParameterName> for String {
    fn from(value: ParameterName) -> Self {
        value.0
    }
}

impl fmt::Display for ParameterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The input kinds a parameter can be rendered as.
/// The serialized tags match the HTML `type` attribute of the form input.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterKind {
    Text,
    Email,
    Tel,
    Time,
    Date,
    Number,
    Range,
}

impl ParameterKind {
    pub const KINDS: [ParameterKind; 7] = [
        ParameterKind::Text,
        ParameterKind::Email,
        ParameterKind::Tel,
        ParameterKind::Time,
        ParameterKind::Date,
        ParameterKind::Number,
        ParameterKind::Range,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterKind::Text => "text",
            ParameterKind::Email => "email",
            ParameterKind::Tel => "tel",
            ParameterKind::Time => "time",
            ParameterKind::Date => "date",
            ParameterKind::Number => "number",
            ParameterKind::Range => "range",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ParameterKind::Text => "Text",
            ParameterKind::Email => "Email",
            ParameterKind::Tel => "Telephone",
            ParameterKind::Time => "Time",
            ParameterKind::Date => "Date",
            ParameterKind::Number => "Number",
            ParameterKind::Range => "Range",
        }
    }
}

#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
#[error("Unknown parameter kind: '{value}'")]
pub struct IllegalParameterKind {
    pub value: String,
}

impl TryFrom<&str> for ParameterKind {
    type Error = IllegalParameterKind;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        ParameterKind::KINDS.into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or(IllegalParameterKind { value: String::from(value) })
    }
}

impl TryFrom<String> for ParameterKind {
    type Error = IllegalParameterKind;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        ParameterKind::try_from(value.as_str())
    }
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The static description of a parameter. Carries no value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    pub id: ParameterId,
    pub name: ParameterName,
    #[serde(rename = "type")]
    pub kind: ParameterKind,
}
