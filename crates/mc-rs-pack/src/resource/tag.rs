//! Tag files (`tags/<registry>/<name>.json`).
//!
//! A tag value either names a concrete element (`minecraft:oak_door`) or
//! includes another tag (`#minecraft:wooden_doors`).

use std::fmt;
use std::str::FromStr;

use mc_rs_resource_location::{LocationError, ResourceLocation};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Tag {
    #[serde(default)]
    pub values: Vec<TagEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replace: Option<bool>,
}

impl Tag {
    pub fn new(values: Vec<TagEntry>) -> Self {
        Self {
            values,
            replace: None,
        }
    }
}

/// What a tag value points at.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TagReference {
    Element(ResourceLocation),
    /// Another tag whose contents are included.
    Tag(ResourceLocation),
}

impl TagReference {
    pub fn id(&self) -> &ResourceLocation {
        match self {
            Self::Element(id) | Self::Tag(id) => id,
        }
    }

    pub fn is_tag(&self) -> bool {
        matches!(self, Self::Tag(_))
    }
}

impl fmt::Display for TagReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Element(id) => write!(f, "{id}"),
            Self::Tag(id) => write!(f, "#{id}"),
        }
    }
}

impl FromStr for TagReference {
    type Err = LocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.strip_prefix('#') {
            Some(tag) => Ok(Self::Tag(tag.parse()?)),
            None => Ok(Self::Element(s.parse()?)),
        }
    }
}

/// One entry of a tag's `values` list.
///
/// Entries without a `required` flag are written as bare strings, the
/// others as `{"id": ..., "required": ...}` objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTagEntry", into = "RawTagEntry")]
pub struct TagEntry {
    pub reference: TagReference,
    pub required: Option<bool>,
}

impl TagEntry {
    pub fn element(id: ResourceLocation) -> Self {
        Self {
            reference: TagReference::Element(id),
            required: None,
        }
    }

    pub fn tag(id: ResourceLocation) -> Self {
        Self {
            reference: TagReference::Tag(id),
            required: None,
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawTagEntry {
    Plain(String),
    Object {
        id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        required: Option<bool>,
    },
}

impl TryFrom<RawTagEntry> for TagEntry {
    type Error = LocationError;

    fn try_from(raw: RawTagEntry) -> Result<Self, Self::Error> {
        Ok(match raw {
            RawTagEntry::Plain(reference) => Self {
                reference: reference.parse()?,
                required: None,
            },
            RawTagEntry::Object { id, required } => Self {
                reference: id.parse()?,
                required,
            },
        })
    }
}

impl From<TagEntry> for RawTagEntry {
    fn from(entry: TagEntry) -> Self {
        match entry.required {
            None => Self::Plain(entry.reference.to_string()),
            Some(required) => Self::Object {
                id: entry.reference.to_string(),
                required: Some(required),
            },
        }
    }
}
