//! Pack read/write errors.

use std::io;
use std::path::{Path, PathBuf};

use mc_rs_resource_location::LocationError;
use thiserror::Error;

use crate::resource::PackType;

pub type Result<T> = std::result::Result<T, PackError>;

#[derive(Debug, Error)]
pub enum PackError {
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid UTF-8 in {}", path.display())]
    Utf8 { path: PathBuf },

    #[error("invalid pack: {0}")]
    InvalidPack(String),

    #[error("invalid description: {0}")]
    InvalidDescription(String),

    #[error("invalid pack format: {0}")]
    InvalidPackFormat(String),

    #[error("invalid pack format: expected {expected}, got {got}")]
    PackFormatMismatch { expected: u32, got: i64 },

    #[error("resource type {resource_type} belongs to {actual} packs, not {expected} packs")]
    WrongPackType {
        resource_type: String,
        expected: PackType,
        actual: PackType,
    },

    #[error("resource type {0} has no registered codec")]
    UnregisteredType(String),

    #[error("codec for {codec} cannot encode a {got} resource")]
    CodecMismatch { codec: String, got: String },

    #[error("resource {id} must be stored as {expected}")]
    MisplacedResource { id: String, expected: String },

    #[error("invalid pack options: {0}")]
    Options(#[from] toml::de::Error),

    #[error(transparent)]
    Location(#[from] LocationError),
}

impl PackError {
    pub fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn json(path: &Path, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Whether this error reports a missing file or directory.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}
