//! Textures: `<base>/<path>.png` plus an optional `.png.mcmeta` sidecar.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use futures::future::try_join_all;
use mc_rs_resource_location::ResourceLocation;

use super::{parse_json, read_file, read_optional, to_json, write_file, Codec, Variant};
use crate::discovery::{discover, Filter};
use crate::error::{PackError, Result};
use crate::fs::PackFs;
use crate::resource::{PackResource, Texture, TextureMetadata};

const BASE: &str = "textures";
const EXTENSION: &str = ".png";
const SIDECAR_SUFFIX: &str = ".mcmeta";

fn sidecar_path(image: &Path) -> PathBuf {
    let mut path = image.as_os_str().to_owned();
    path.push(SIDECAR_SUFFIX);
    PathBuf::from(path)
}

pub struct TextureCodec<R> {
    variant: Variant<R, Texture>,
}

impl<R> TextureCodec<R> {
    pub fn new(variant: Variant<R, Texture>) -> Self {
        Self { variant }
    }
}

#[async_trait]
impl<R: PackResource> Codec<R> for TextureCodec<R> {
    async fn read(&self, fs: &dyn PackFs, dir: &Path) -> Result<Vec<(ResourceLocation, R)>> {
        let ids = discover(fs, dir, BASE, Filter::Extension(EXTENSION)).await?;
        let reads = ids.into_iter().map(|id| async move {
            let path = dir.join(id.to_path(BASE, EXTENSION));
            let image = read_file(fs, &path).await?;
            let sidecar = sidecar_path(&path);
            let metadata = match read_optional(fs, &sidecar).await? {
                Some(bytes) => parse_json::<TextureMetadata>(&sidecar, &bytes)?,
                None => TextureMetadata::default(),
            };
            let texture = Texture::new(image).with_metadata(metadata);
            Ok::<_, PackError>((id, self.variant.wrap(texture)))
        });
        try_join_all(reads).await
    }

    async fn write(
        &self,
        fs: &dyn PackFs,
        dir: &Path,
        id: &ResourceLocation,
        resource: &R,
    ) -> Result<()> {
        let texture = self.variant.unwrap(BASE, resource)?;
        let path = dir.join(id.to_path(BASE, EXTENSION));
        write_file(fs, &path, &texture.image).await?;
        if !texture.metadata.is_empty() {
            let sidecar = sidecar_path(&path);
            let bytes = to_json(&sidecar, &texture.metadata)?;
            write_file(fs, &sidecar, &bytes).await?;
        }
        Ok(())
    }
}
