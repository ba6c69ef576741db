//! JSON files.

use std::path::Path;

use async_trait::async_trait;
use mc_rs_resource_location::ResourceLocation;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{parse_json, read_each, to_json, write_file, Codec, Variant};
use crate::discovery::Filter;
use crate::error::Result;
use crate::fs::PackFs;
use crate::resource::PackResource;

const EXTENSION: &str = ".json";

/// `<base>/<path>.json`, decoded into `T` with serde.
pub struct JsonCodec<R, T> {
    base: &'static str,
    variant: Variant<R, T>,
}

impl<R, T> JsonCodec<R, T> {
    pub fn new(base: &'static str, variant: Variant<R, T>) -> Self {
        Self { base, variant }
    }
}

#[async_trait]
impl<R, T> Codec<R> for JsonCodec<R, T>
where
    R: PackResource,
    T: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    async fn read(&self, fs: &dyn PackFs, dir: &Path) -> Result<Vec<(ResourceLocation, R)>> {
        read_each(fs, dir, self.base, Filter::Extension(EXTENSION), |path, bytes| {
            Ok(self.variant.wrap(parse_json(path, &bytes)?))
        })
        .await
    }

    async fn write(
        &self,
        fs: &dyn PackFs,
        dir: &Path,
        id: &ResourceLocation,
        resource: &R,
    ) -> Result<()> {
        let value = self.variant.unwrap(self.base, resource)?;
        let path = dir.join(id.to_path(self.base, EXTENSION));
        let bytes = to_json(&path, value)?;
        write_file(fs, &path, &bytes).await
    }
}
