//! Java Edition resource pack and data pack model.
//!
//! A [`Pack`] holds one [`ResourceMap`] per resource category and knows how
//! to read itself from, and write itself to, a pack directory:
//!
//! ```text
//! <root>/pack.mcmeta
//! <root>/pack.png
//! <root>/<assets|data>/<namespace>/<category>/<path><extension>
//! ```
//!
//! Each category's on-disk encoding is a [`Codec`](codec::Codec); the codecs
//! for a pack type are collected in an explicitly built
//! [`CodecRegistry`](codec::CodecRegistry) and handed to [`PackIo`] together
//! with the filesystem to use.

pub mod any;
pub mod codec;
pub mod discovery;
pub mod error;
pub mod fs;
pub mod meta;
pub mod options;
pub mod pack;
pub mod resource;

pub use any::{AnyPack, Resource, ResourceRef, ResourceType};
pub use error::{PackError, Result};
pub use meta::{LanguageInfo, PackMeta, TextComponent, PACK_FORMAT};
pub use options::PackOptions;
pub use pack::{DataPack, Pack, PackIo, ResourcePack};
pub use resource::{
    AssetResource, AssetType, DataResource, DataType, PackResource, PackType, ResourceKind,
};

pub use mc_rs_resource_location::{LocationError, ResourceLocation, ResourceMap, ToResourceLocation};
