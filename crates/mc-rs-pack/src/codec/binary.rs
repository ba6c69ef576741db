//! Raw and gzip-compressed binary files.

use std::io::{Read, Write};
use std::path::Path;

use async_trait::async_trait;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use mc_rs_resource_location::ResourceLocation;

use super::{read_each, write_file, Codec, Variant};
use crate::discovery::Filter;
use crate::error::{PackError, Result};
use crate::fs::PackFs;
use crate::resource::PackResource;

/// Stores a resource's bytes as-is, or gzip-compressed when built with
/// [`BinaryCodec::gzip`].
pub struct BinaryCodec<R> {
    base: &'static str,
    filter: Filter,
    variant: Variant<R, Vec<u8>>,
    gzip: bool,
}

impl<R> BinaryCodec<R> {
    pub fn new(base: &'static str, filter: Filter, variant: Variant<R, Vec<u8>>) -> Self {
        Self {
            base,
            filter,
            variant,
            gzip: false,
        }
    }

    pub fn gzip(mut self) -> Self {
        self.gzip = true;
        self
    }
}

#[async_trait]
impl<R: PackResource> Codec<R> for BinaryCodec<R> {
    async fn read(&self, fs: &dyn PackFs, dir: &Path) -> Result<Vec<(ResourceLocation, R)>> {
        read_each(fs, dir, self.base, self.filter, |path, bytes| {
            let bytes = if self.gzip {
                decompress(path, &bytes)?
            } else {
                bytes
            };
            Ok(self.variant.wrap(bytes))
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
        let bytes = self.variant.unwrap(self.base, resource)?;
        let path = dir.join(id.to_path(self.base, self.filter.extension()));
        if self.gzip {
            let compressed = compress(&path, bytes)?;
            write_file(fs, &path, &compressed).await
        } else {
            write_file(fs, &path, bytes).await
        }
    }
}

/// Gzip with the default level. The header carries no timestamp, so equal
/// input gives equal output.
fn compress(path: &Path, data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(data)
        .map_err(|e| PackError::io(path, e))?;
    encoder.finish().map_err(|e| PackError::io(path, e))
}

fn decompress(path: &Path, data: &[u8]) -> Result<Vec<u8>> {
    let mut decoder = GzDecoder::new(data);
    let mut output = Vec::new();
    decoder
        .read_to_end(&mut output)
        .map_err(|e| PackError::io(path, e))?;
    Ok(output)
}
