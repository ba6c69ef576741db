//! `pack.mcmeta` parsing and validation.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::codec::parse_json;
use crate::error::{PackError, Result};
use crate::options::PackOptions;

/// The `pack_format` this crate reads and writes by default.
pub const PACK_FORMAT: u32 = 5;

/// A JSON text component: a plain string, a component object, or an array
/// of components.
pub type TextComponent = Value;

/// One entry of the `language` section of a resource pack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageInfo {
    pub region: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bidirectional: Option<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PackMeta {
    pub description: TextComponent,
    pub pack_format: i64,
    pub languages: BTreeMap<String, LanguageInfo>,
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Only strings, component objects and component arrays are text
/// components.
pub fn check_description(description: &TextComponent) -> Result<()> {
    match description {
        Value::String(_) | Value::Object(_) | Value::Array(_) => Ok(()),
        other => Err(PackError::InvalidDescription(format!(
            "expected a text component, got {}",
            json_type(other)
        ))),
    }
}

impl PackMeta {
    pub fn new(description: TextComponent, pack_format: u32) -> Self {
        Self {
            description,
            pack_format: i64::from(pack_format),
            languages: BTreeMap::new(),
        }
    }

    /// Parse and validate the contents of `pack.mcmeta` found at `path`.
    pub fn parse(path: &Path, bytes: &[u8], options: &PackOptions) -> Result<Self> {
        let mut root: Map<String, Value> = parse_json(path, bytes)?;
        let pack = match root.get("pack") {
            Some(Value::Object(pack)) => pack,
            Some(other) => {
                return Err(PackError::InvalidPack(format!(
                    "\"pack\" in {} must be an object, got {}",
                    path.display(),
                    json_type(other)
                )))
            }
            None => {
                return Err(PackError::InvalidPack(format!(
                    "{} has no \"pack\" section",
                    path.display()
                )))
            }
        };

        let description = match pack.get("description") {
            Some(value) => {
                check_description(value)?;
                value.clone()
            }
            None => return Err(PackError::InvalidDescription("missing".to_string())),
        };

        let pack_format = match pack.get("pack_format") {
            Some(value) => value.as_i64().ok_or_else(|| {
                PackError::InvalidPackFormat(format!("expected an integer, got {value}"))
            })?,
            None => return Err(PackError::InvalidPackFormat("missing".to_string())),
        };
        if options.check_format && pack_format != i64::from(options.pack_format) {
            return Err(PackError::PackFormatMismatch {
                expected: options.pack_format,
                got: pack_format,
            });
        }

        let languages = match root.remove("language") {
            Some(value) => serde_json::from_value(value).map_err(|e| PackError::json(path, e))?,
            None => BTreeMap::new(),
        };

        Ok(Self {
            description,
            pack_format,
            languages,
        })
    }

    /// The `pack.mcmeta` document. `language` is only present when
    /// languages are declared.
    pub fn to_json(&self) -> Value {
        let mut meta = json!({
            "pack": {
                "description": self.description,
                "pack_format": self.pack_format,
            }
        });
        if !self.languages.is_empty() {
            meta["language"] = json!(self.languages);
        }
        meta
    }
}
