use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{ValidationError, ValidationResult};
use crate::highlight::Role;

/// Kind of change detected between the source and target trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DiffKind {
    Create,
    Delete,
    Update,
}

impl DiffKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DiffKind::Create => "CREATE",
            DiffKind::Delete => "DELETE",
            DiffKind::Update => "UPDATE",
        }
    }

    /// Marker printed in front of the key in the transfer listing.
    pub fn symbol(self) -> char {
        match self {
            DiffKind::Delete => '-',
            DiffKind::Create | DiffKind::Update => '+',
        }
    }

    pub fn role(self) -> Role {
        match self {
            DiffKind::Create => Role::Success,
            DiffKind::Delete => Role::Danger,
            DiffKind::Update => Role::Warning,
        }
    }
}

impl FromStr for DiffKind {
    type Err = ValidationError;

    /// Tags are matched exactly; `"delete"` or `" DELETE"` are rejected.
    fn from_str(tag: &str) -> ValidationResult<Self> {
        match tag {
            "CREATE" => Ok(DiffKind::Create),
            "DELETE" => Ok(DiffKind::Delete),
            "UPDATE" => Ok(DiffKind::Update),
            _ => Err(ValidationError::UnknownDiffType(tag.to_owned())),
        }
    }
}

impl TryFrom<String> for DiffKind {
    type Error = ValidationError;

    fn try_from(tag: String) -> ValidationResult<Self> {
        tag.parse()
    }
}

impl From<DiffKind> for String {
    fn from(kind: DiffKind) -> Self {
        kind.as_str().to_owned()
    }
}

impl fmt::Display for DiffKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single changed item, in the order the diffing engine produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawItemDiff")]
pub struct ItemDiff {
    #[serde(rename = "type")]
    pub kind: DiffKind,
    pub key: String,
}

#[derive(Deserialize)]
struct RawItemDiff {
    #[serde(rename = "type")]
    kind: DiffKind,
    key: String,
}

impl TryFrom<RawItemDiff> for ItemDiff {
    type Error = ValidationError;

    fn try_from(raw: RawItemDiff) -> ValidationResult<Self> {
        ItemDiff::new(raw.kind, raw.key)
    }
}

impl ItemDiff {
    pub fn new(kind: DiffKind, key: impl Into<String>) -> ValidationResult<Self> {
        let key = key.into();
        if key.is_empty() {
            return Err(ValidationError::EmptyKey);
        }
        Ok(Self { kind, key })
    }

    /// Build a diff from an untyped tag as emitted by the engine.
    pub fn parse(tag: &str, key: impl Into<String>) -> ValidationResult<Self> {
        Self::new(tag.parse()?, key)
    }

    pub fn create(key: impl Into<String>) -> ValidationResult<Self> {
        Self::new(DiffKind::Create, key)
    }

    pub fn update(key: impl Into<String>) -> ValidationResult<Self> {
        Self::new(DiffKind::Update, key)
    }

    pub fn delete(key: impl Into<String>) -> ValidationResult<Self> {
        Self::new(DiffKind::Delete, key)
    }

    /// `"<symbol> <key>"` without any styling.
    pub fn line(&self) -> String {
        format!("{} {}", self.kind.symbol(), self.key)
    }
}
