//! `namespace:path` identifiers.

use std::borrow::Cow;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::LocationError;

/// Namespace assumed when a location string omits one.
pub const DEFAULT_NAMESPACE: &str = "minecraft";

/// An immutable `namespace:path` identifier.
///
/// Both parts are restricted to lowercase ASCII letters, digits, `_`, `-`
/// and `.`; the path may also contain `/`. Neither the namespace nor any
/// path segment may be empty or made only of dots. Two locations are equal
/// exactly when their canonical strings are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceLocation {
    namespace: String,
    path: String,
}

impl ResourceLocation {
    pub fn new(
        namespace: impl Into<String>,
        path: impl Into<String>,
    ) -> Result<Self, LocationError> {
        let namespace = namespace.into();
        let path = path.into();
        if !namespace.chars().all(is_namespace_char) || is_dot_segment(&namespace) {
            return Err(LocationError::InvalidNamespace(namespace));
        }
        if path.is_empty() {
            return Err(LocationError::EmptyPath);
        }
        if !is_path(&path) {
            return Err(LocationError::InvalidPath(path));
        }
        let namespace = if namespace.is_empty() {
            DEFAULT_NAMESPACE.to_string()
        } else {
            namespace
        };
        Ok(Self { namespace, path })
    }

    /// A location in the default namespace.
    pub fn minecraft(path: impl Into<String>) -> Result<Self, LocationError> {
        Self::new(DEFAULT_NAMESPACE, path)
    }

    /// Whether `name` could be the namespace part of a location.
    pub fn is_valid_namespace(name: &str) -> bool {
        !name.is_empty() && name.chars().all(is_namespace_char) && !is_dot_segment(name)
    }

    /// Whether `path` could be the path part of a location.
    pub fn is_valid_path(path: &str) -> bool {
        !path.is_empty() && is_path(path)
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Relative file path `<namespace>/<base>/<path><extension>`.
    ///
    /// An empty `base` places the file directly under the namespace.
    pub fn to_path(&self, base: &str, extension: &str) -> PathBuf {
        let mut file = PathBuf::from(&self.namespace);
        if !base.is_empty() {
            file.push(base);
        }
        for segment in self.path.split('/') {
            file.push(segment);
        }
        if !extension.is_empty() {
            let mut name = file.file_name().unwrap_or_default().to_os_string();
            name.push(extension);
            file.set_file_name(name);
        }
        file
    }
}

fn is_namespace_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '_' | '-' | '.')
}

fn is_path_char(c: char) -> bool {
    is_namespace_char(c) || c == '/'
}

/// A name made only of dots (`.`, `..`, `...`).
fn is_dot_segment(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c == '.')
}

/// Every `/`-separated segment is a non-empty, non-dot file name, so the
/// path maps onto exactly one file below its category directory.
fn is_path(path: &str) -> bool {
    path.chars().all(is_path_char)
        && path
            .split('/')
            .all(|segment| !segment.is_empty() && !is_dot_segment(segment))
}

impl FromStr for ResourceLocation {
    type Err = LocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((namespace, path)) => Self::new(namespace, path),
            None => Self::new(DEFAULT_NAMESPACE, s),
        }
    }
}

impl fmt::Display for ResourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

impl Serialize for ResourceLocation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ResourceLocation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Anything a [`ResourceMap`](crate::ResourceMap) lookup can be keyed by.
///
/// Strings are parsed (and so normalized) on every lookup; locations are
/// borrowed as-is.
pub trait ToResourceLocation {
    fn to_resource_location(&self) -> Result<Cow<'_, ResourceLocation>, LocationError>;
}

impl ToResourceLocation for ResourceLocation {
    fn to_resource_location(&self) -> Result<Cow<'_, ResourceLocation>, LocationError> {
        Ok(Cow::Borrowed(self))
    }
}

impl ToResourceLocation for str {
    fn to_resource_location(&self) -> Result<Cow<'_, ResourceLocation>, LocationError> {
        self.parse().map(Cow::Owned)
    }
}

impl ToResourceLocation for String {
    fn to_resource_location(&self) -> Result<Cow<'_, ResourceLocation>, LocationError> {
        self.as_str().to_resource_location()
    }
}
