//! Files that hold one resource (or a whole category) per namespace:
//! `<namespace>/sounds.json` and `<namespace>/<name>.json`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use futures::future::try_join_all;
use mc_rs_resource_location::{ResourceLocation, ResourceMap};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use super::{parse_json, read_optional, to_json, write_file, Codec, Variant};
use crate::discovery::namespaces;
use crate::error::{PackError, Result};
use crate::fs::PackFs;
use crate::resource::{PackResource, SoundEvent};

const SOUNDS_FILE: &str = "sounds.json";

fn sounds_path(dir: &Path, namespace: &str) -> PathBuf {
    dir.join(namespace).join(SOUNDS_FILE)
}

/// Sound events. Every namespace keeps all of its events in a single
/// `sounds.json` object keyed by event path.
pub struct SoundEventsCodec<R> {
    variant: Variant<R, SoundEvent>,
}

impl<R> SoundEventsCodec<R> {
    pub fn new(variant: Variant<R, SoundEvent>) -> Self {
        Self { variant }
    }
}

impl<R: PackResource> SoundEventsCodec<R> {
    async fn read_namespace(
        &self,
        fs: &dyn PackFs,
        dir: &Path,
        namespace: String,
    ) -> Result<Vec<(ResourceLocation, R)>> {
        let path = sounds_path(dir, &namespace);
        let Some(bytes) = read_optional(fs, &path).await? else {
            return Ok(Vec::new());
        };
        let events: BTreeMap<String, SoundEvent> = parse_json(&path, &bytes)?;
        let mut resources = Vec::with_capacity(events.len());
        for (key, event) in events {
            match ResourceLocation::new(namespace.as_str(), key.as_str()) {
                Ok(id) => resources.push((id, self.variant.wrap(event))),
                Err(e) => warn!("Skipping sound event {key:?} in {}: {e}", path.display()),
            }
        }
        Ok(resources)
    }
}

#[async_trait]
impl<R: PackResource> Codec<R> for SoundEventsCodec<R> {
    async fn read(&self, fs: &dyn PackFs, dir: &Path) -> Result<Vec<(ResourceLocation, R)>> {
        let reads = namespaces(fs, dir)
            .await?
            .into_iter()
            .map(|namespace| self.read_namespace(fs, dir, namespace));
        Ok(try_join_all(reads).await?.into_iter().flatten().collect())
    }

    /// Merge one event into its namespace's existing `sounds.json`.
    async fn write(
        &self,
        fs: &dyn PackFs,
        dir: &Path,
        id: &ResourceLocation,
        resource: &R,
    ) -> Result<()> {
        let event = self.variant.unwrap(SOUNDS_FILE, resource)?;
        let path = sounds_path(dir, id.namespace());
        let mut events: BTreeMap<String, SoundEvent> = match read_optional(fs, &path).await? {
            Some(bytes) => parse_json(&path, &bytes)?,
            None => BTreeMap::new(),
        };
        events.insert(id.path().to_string(), event.clone());
        write_file(fs, &path, &to_json(&path, &events)?).await
    }

    async fn write_all(
        &self,
        fs: &dyn PackFs,
        dir: &Path,
        resources: &ResourceMap<R>,
    ) -> Result<()> {
        let mut by_namespace: BTreeMap<&str, BTreeMap<&str, &SoundEvent>> = BTreeMap::new();
        for (id, resource) in resources {
            let event = self.variant.unwrap(SOUNDS_FILE, resource)?;
            by_namespace
                .entry(id.namespace())
                .or_default()
                .insert(id.path(), event);
        }
        let writes = by_namespace.into_iter().map(|(namespace, events)| async move {
            let path = sounds_path(dir, namespace);
            let bytes = to_json(&path, &events)?;
            write_file(fs, &path, &bytes).await
        });
        try_join_all(writes).await?;
        Ok(())
    }
}

/// A resource stored as the single file `<namespace>/<name>.json`; its
/// location is always `<namespace>:<name>`.
pub struct NamespaceFileCodec<R, T> {
    name: &'static str,
    variant: Variant<R, T>,
}

impl<R, T> NamespaceFileCodec<R, T> {
    pub fn new(name: &'static str, variant: Variant<R, T>) -> Self {
        Self { name, variant }
    }

    fn path(&self, dir: &Path, namespace: &str) -> PathBuf {
        dir.join(namespace).join(format!("{}.json", self.name))
    }
}

#[async_trait]
impl<R, T> Codec<R> for NamespaceFileCodec<R, T>
where
    R: PackResource,
    T: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    async fn read(&self, fs: &dyn PackFs, dir: &Path) -> Result<Vec<(ResourceLocation, R)>> {
        let reads = namespaces(fs, dir).await?.into_iter().map(|namespace| async move {
            let path = self.path(dir, &namespace);
            let Some(bytes) = read_optional(fs, &path).await? else {
                return Ok(None);
            };
            let value: T = parse_json(&path, &bytes)?;
            let id = ResourceLocation::new(namespace, self.name)?;
            Ok::<_, PackError>(Some((id, self.variant.wrap(value))))
        });
        Ok(try_join_all(reads).await?.into_iter().flatten().collect())
    }

    async fn write(
        &self,
        fs: &dyn PackFs,
        dir: &Path,
        id: &ResourceLocation,
        resource: &R,
    ) -> Result<()> {
        let value = self.variant.unwrap(self.name, resource)?;
        if id.path() != self.name {
            return Err(PackError::MisplacedResource {
                id: id.to_string(),
                expected: format!("{}:{}", id.namespace(), self.name),
            });
        }
        let path = self.path(dir, id.namespace());
        write_file(fs, &path, &to_json(&path, value)?).await
    }
}
