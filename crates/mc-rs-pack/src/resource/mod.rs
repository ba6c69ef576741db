//! Resource variants and their categories.
//!
//! Each pack type has its own closed set of variants: [`AssetResource`] for
//! resource packs and [`DataResource`] for data packs. A [`Pack`](crate::Pack)
//! is specialized over one of them, so a data pack cannot hold a texture.

mod assets;
mod data;
pub mod sound;
pub mod tag;
pub mod texture;

pub use assets::{AssetResource, AssetType, Language};
pub use data::{DataResource, DataType};
pub use sound::SoundEvent;
pub use tag::{Tag, TagEntry, TagReference};
pub use texture::{
    Animation, AnimationFrame, AnimationFrames, Hat, Texture, TextureMetadata, TextureSection,
    VillagerSection,
};

use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::codec::CodecRegistry;

/// Whether a pack is a resource pack (`assets`) or a data pack (`data`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackType {
    Assets,
    Data,
}

impl PackType {
    /// Directory under the pack root holding the namespaces.
    pub fn directory(self) -> &'static str {
        match self {
            PackType::Assets => "assets",
            PackType::Data => "data",
        }
    }
}

impl fmt::Display for PackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.directory())
    }
}

/// The type tag of a resource variant.
pub trait ResourceKind:
    Copy + Eq + Ord + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Every category, in the order packs write them.
    const ALL: &'static [Self];

    /// Position of this category in [`Self::ALL`].
    fn index(self) -> usize;

    fn name(self) -> &'static str;
}

/// A closed set of resource variants belonging to one pack type.
pub trait PackResource: Clone + PartialEq + fmt::Debug + Send + Sync + 'static {
    type Kind: ResourceKind;

    const PACK_TYPE: PackType;

    fn kind(&self) -> Self::Kind;

    /// The standard codec for every category of this pack type.
    fn codecs() -> CodecRegistry<Self>;
}
