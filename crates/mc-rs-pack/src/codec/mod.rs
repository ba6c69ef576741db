//! Per-category read/write codecs and the registry that dispatches to them.
//!
//! Most categories are one of a few parametric shapes ([`BinaryCodec`],
//! [`JsonCodec`], [`TextCodec`], [`LinesCodec`]) configured with a base
//! directory and a file filter. Textures, sound events and other
//! namespace-wide files have their own codecs.

mod binary;
mod json;
mod namespace;
mod text;
mod texture;

pub use binary::BinaryCodec;
pub use json::JsonCodec;
pub use namespace::{NamespaceFileCodec, SoundEventsCodec};
pub use text::{join_lines, parse_lines, LinesCodec, TextCodec};
pub use texture::TextureCodec;

use std::collections::HashMap;
use std::fmt;
use std::io;
use std::path::Path;

use async_trait::async_trait;
use futures::future::try_join_all;
use mc_rs_resource_location::{ResourceLocation, ResourceMap};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::discovery::{discover, Filter};
use crate::error::{PackError, Result};
use crate::fs::PackFs;
use crate::resource::{PackResource, ResourceKind};

/// Reads and writes one resource category below a pack type directory
/// (`<root>/assets` or `<root>/data`).
#[async_trait]
pub trait Codec<R: PackResource>: Send + Sync {
    /// Decode every resource of the category.
    async fn read(&self, fs: &dyn PackFs, dir: &Path) -> Result<Vec<(ResourceLocation, R)>>;

    /// Encode one resource, creating directories as needed.
    async fn write(
        &self,
        fs: &dyn PackFs,
        dir: &Path,
        id: &ResourceLocation,
        resource: &R,
    ) -> Result<()>;

    /// Encode a whole category. Entries are written concurrently.
    async fn write_all(
        &self,
        fs: &dyn PackFs,
        dir: &Path,
        resources: &ResourceMap<R>,
    ) -> Result<()> {
        try_join_all(
            resources
                .iter()
                .map(|(id, resource)| self.write(fs, dir, id, resource)),
        )
        .await?;
        Ok(())
    }
}

/// Binds a codec's payload type to one variant of a resource enum.
pub struct Variant<R, T> {
    wrap: fn(T) -> R,
    unwrap: fn(&R) -> Option<&T>,
}

impl<R, T> Clone for Variant<R, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R, T> Copy for Variant<R, T> {}

impl<R, T> Variant<R, T> {
    pub fn new(wrap: fn(T) -> R, unwrap: fn(&R) -> Option<&T>) -> Self {
        Self { wrap, unwrap }
    }

    pub fn wrap(&self, value: T) -> R {
        (self.wrap)(value)
    }
}

impl<R: PackResource, T> Variant<R, T> {
    /// The payload of `resource`, or a mismatch error naming `codec`.
    pub fn unwrap<'a>(&self, codec: &str, resource: &'a R) -> Result<&'a T> {
        (self.unwrap)(resource).ok_or_else(|| PackError::CodecMismatch {
            codec: codec.to_string(),
            got: resource.kind().name().to_string(),
        })
    }
}

/// `variant!(Enum::Variant)` builds the [`Variant`] for a one-field tuple
/// variant.
macro_rules! variant {
    ($resource:ident :: $variant:ident) => {
        $crate::codec::Variant::new($resource::$variant, |resource| match resource {
            $resource::$variant(value) => Some(value),
            #[allow(unreachable_patterns)]
            _ => None,
        })
    };
}
pub(crate) use variant;

/// Immutable lookup table from resource kind to codec.
pub struct CodecRegistry<R: PackResource> {
    codecs: HashMap<R::Kind, Box<dyn Codec<R>>>,
}

impl<R: PackResource> Default for CodecRegistry<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: PackResource> CodecRegistry<R> {
    pub fn new() -> Self {
        Self {
            codecs: HashMap::new(),
        }
    }

    /// Register `codec` for `kind`, replacing any earlier registration.
    pub fn with(mut self, kind: R::Kind, codec: impl Codec<R> + 'static) -> Self {
        self.codecs.insert(kind, Box::new(codec));
        self
    }

    /// Remove the registration for `kind`.
    pub fn without(mut self, kind: R::Kind) -> Self {
        self.codecs.remove(&kind);
        self
    }

    pub fn get(&self, kind: R::Kind) -> Result<&dyn Codec<R>> {
        self.codecs
            .get(&kind)
            .map(|codec| codec.as_ref())
            .ok_or_else(|| PackError::UnregisteredType(kind.name().to_string()))
    }

    pub fn contains(&self, kind: R::Kind) -> bool {
        self.codecs.contains_key(&kind)
    }
}

impl<R: PackResource> fmt::Debug for CodecRegistry<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<_> = self.codecs.keys().collect();
        kinds.sort();
        f.debug_struct("CodecRegistry").field("kinds", &kinds).finish()
    }
}

const BYTE_ORDER_MARK: &[u8] = &[0xEF, 0xBB, 0xBF];

pub(crate) async fn read_file(fs: &dyn PackFs, path: &Path) -> Result<Vec<u8>> {
    fs.read(path).await.map_err(|e| PackError::io(path, e))
}

/// Read a file that may legitimately be absent.
pub(crate) async fn read_optional(fs: &dyn PackFs, path: &Path) -> Result<Option<Vec<u8>>> {
    match fs.read(path).await {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(PackError::io(path, e)),
    }
}

pub(crate) async fn write_file(fs: &dyn PackFs, path: &Path, contents: &[u8]) -> Result<()> {
    fs.write(path, contents)
        .await
        .map_err(|e| PackError::io(path, e))
}

pub(crate) fn parse_json<T: DeserializeOwned>(path: &Path, bytes: &[u8]) -> Result<T> {
    let bytes = bytes.strip_prefix(BYTE_ORDER_MARK).unwrap_or(bytes);
    serde_json::from_slice(bytes).map_err(|e| PackError::json(path, e))
}

pub(crate) fn to_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<Vec<u8>> {
    let mut bytes = serde_json::to_vec_pretty(value).map_err(|e| PackError::json(path, e))?;
    bytes.push(b'\n');
    Ok(bytes)
}

pub(crate) fn decode_utf8(path: &Path, bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|_| PackError::Utf8 {
        path: path.to_path_buf(),
    })
}

/// Discover a category and decode each file concurrently.
pub(crate) async fn read_each<R, F>(
    fs: &dyn PackFs,
    dir: &Path,
    base: &str,
    filter: Filter,
    decode: F,
) -> Result<Vec<(ResourceLocation, R)>>
where
    R: Send,
    F: Fn(&Path, Vec<u8>) -> Result<R> + Sync,
{
    let ids = discover(fs, dir, base, filter).await?;
    let decode = &decode;
    let reads = ids.into_iter().map(|id| async move {
        let path = dir.join(id.to_path(base, filter.extension()));
        let bytes = read_file(fs, &path).await?;
        let resource = decode(&path, bytes)?;
        Ok::<_, PackError>((id, resource))
    });
    try_join_all(reads).await
}
