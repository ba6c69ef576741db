//! Packs whose type is only known at runtime.
//!
//! [`Pack<R>`](crate::Pack) rules out cross-type access at compile time.
//! [`AnyPack`] is for callers that pick the pack type from input (a CLI flag,
//! a config file) and therefore have to check each access instead.

use std::fmt;
use std::path::Path;

use mc_rs_resource_location::{ResourceLocation, ToResourceLocation};

use crate::error::{PackError, Result};
use crate::meta::TextComponent;
use crate::pack::{DataPack, ResourcePack};
use crate::resource::{
    AssetResource, AssetType, DataResource, DataType, PackResource, PackType, ResourceKind,
};

/// A resource category of either pack type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceType {
    Asset(AssetType),
    Data(DataType),
}

impl ResourceType {
    pub fn pack_type(self) -> PackType {
        match self {
            Self::Asset(_) => PackType::Assets,
            Self::Data(_) => PackType::Data,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Asset(kind) => kind.name(),
            Self::Data(kind) => kind.name(),
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<AssetType> for ResourceType {
    fn from(kind: AssetType) -> Self {
        Self::Asset(kind)
    }
}

impl From<DataType> for ResourceType {
    fn from(kind: DataType) -> Self {
        Self::Data(kind)
    }
}

/// An owned resource of either pack type.
#[derive(Debug, Clone, PartialEq)]
pub enum Resource {
    Asset(AssetResource),
    Data(DataResource),
}

impl Resource {
    pub fn resource_type(&self) -> ResourceType {
        match self {
            Self::Asset(resource) => ResourceType::Asset(resource.kind()),
            Self::Data(resource) => ResourceType::Data(resource.kind()),
        }
    }
}

impl From<AssetResource> for Resource {
    fn from(resource: AssetResource) -> Self {
        Self::Asset(resource)
    }
}

impl From<DataResource> for Resource {
    fn from(resource: DataResource) -> Self {
        Self::Data(resource)
    }
}

/// A borrowed resource of either pack type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResourceRef<'a> {
    Asset(&'a AssetResource),
    Data(&'a DataResource),
}

impl ResourceRef<'_> {
    pub fn cloned(self) -> Resource {
        match self {
            Self::Asset(resource) => Resource::Asset(resource.clone()),
            Self::Data(resource) => Resource::Data(resource.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AnyPack {
    Assets(ResourcePack),
    Data(DataPack),
}

impl AnyPack {
    pub fn new(pack_type: PackType, description: impl Into<TextComponent>) -> Self {
        match pack_type {
            PackType::Assets => Self::Assets(ResourcePack::new(description)),
            PackType::Data => Self::Data(DataPack::new(description)),
        }
    }

    /// Read the pack at `dir` as a pack of `pack_type`.
    pub async fn read(dir: impl AsRef<Path>, pack_type: PackType) -> Result<Self> {
        Ok(match pack_type {
            PackType::Assets => Self::Assets(ResourcePack::read(dir).await?),
            PackType::Data => Self::Data(DataPack::read(dir).await?),
        })
    }

    pub async fn write(&self, dir: impl AsRef<Path>) -> Result<()> {
        match self {
            Self::Assets(pack) => pack.write(dir).await,
            Self::Data(pack) => pack.write(dir).await,
        }
    }

    pub fn pack_type(&self) -> PackType {
        match self {
            Self::Assets(_) => AssetResource::PACK_TYPE,
            Self::Data(_) => DataResource::PACK_TYPE,
        }
    }

    pub fn description(&self) -> &TextComponent {
        match self {
            Self::Assets(pack) => pack.description(),
            Self::Data(pack) => pack.description(),
        }
    }

    fn wrong_type(&self, resource_type: ResourceType) -> PackError {
        PackError::WrongPackType {
            resource_type: resource_type.name().to_string(),
            expected: self.pack_type(),
            actual: resource_type.pack_type(),
        }
    }

    /// Fails with [`PackError::WrongPackType`] when `resource_type` belongs to
    /// the other pack type.
    pub fn get_resource<K>(
        &self,
        resource_type: impl Into<ResourceType>,
        id: &K,
    ) -> Result<Option<ResourceRef<'_>>>
    where
        K: ToResourceLocation + ?Sized,
    {
        match (self, resource_type.into()) {
            (Self::Assets(pack), ResourceType::Asset(kind)) => {
                Ok(pack.get_resource(kind, id).map(ResourceRef::Asset))
            }
            (Self::Data(pack), ResourceType::Data(kind)) => {
                Ok(pack.get_resource(kind, id).map(ResourceRef::Data))
            }
            (_, resource_type) => Err(self.wrong_type(resource_type)),
        }
    }

    pub fn add_resource(
        &mut self,
        id: ResourceLocation,
        resource: impl Into<Resource>,
    ) -> Result<Option<Resource>> {
        match (self, resource.into()) {
            (Self::Assets(pack), Resource::Asset(resource)) => {
                Ok(pack.add_resource(id, resource).map(Resource::Asset))
            }
            (Self::Data(pack), Resource::Data(resource)) => {
                Ok(pack.add_resource(id, resource).map(Resource::Data))
            }
            (this, resource) => Err(this.wrong_type(resource.resource_type())),
        }
    }

    pub fn delete_resource<K>(
        &mut self,
        resource_type: impl Into<ResourceType>,
        id: &K,
    ) -> Result<Option<Resource>>
    where
        K: ToResourceLocation + ?Sized,
    {
        match (self, resource_type.into()) {
            (Self::Assets(pack), ResourceType::Asset(kind)) => {
                Ok(pack.delete_resource(kind, id).map(Resource::Asset))
            }
            (Self::Data(pack), ResourceType::Data(kind)) => {
                Ok(pack.delete_resource(kind, id).map(Resource::Data))
            }
            (this, resource_type) => Err(this.wrong_type(resource_type)),
        }
    }
}

impl From<ResourcePack> for AnyPack {
    fn from(pack: ResourcePack) -> Self {
        Self::Assets(pack)
    }
}

impl From<DataPack> for AnyPack {
    fn from(pack: DataPack) -> Self {
        Self::Data(pack)
    }
}
